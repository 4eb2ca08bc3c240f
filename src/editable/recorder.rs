//! Macro recording.

use super::operation::Operation;

/// Records a linear log of operations while recording is active.
#[derive(Debug, Clone, Default)]
pub struct MacroRecorder {
    recording: bool,
    log: Vec<Operation>,
}

impl MacroRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recording. The existing log is kept; call [`clear`](Self::clear)
    /// first for a fresh macro.
    pub fn start(&mut self) {
        self.recording = true;
    }

    pub fn stop(&mut self) {
        self.recording = false;
    }

    /// Empty the log. Returns `self` so it chains with `start()`.
    pub fn clear(&mut self) -> &mut Self {
        self.log.clear();
        self
    }

    /// Append `op` if recording, otherwise do nothing
    pub fn record(&mut self, op: &Operation) {
        if self.recording {
            self.log.push(op.clone());
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// The recorded operations in submission order
    pub fn replay_list(&self) -> &[Operation] {
        &self.log
    }

    /// Replace the log wholesale (used when importing a saved macro)
    pub fn load(&mut self, ops: Vec<Operation>) {
        self.log = ops;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_only_while_recording() {
        let mut recorder = MacroRecorder::new();
        recorder.record(&Operation::Insert { ch: 'a' });
        assert!(recorder.replay_list().is_empty());

        recorder.start();
        recorder.record(&Operation::Insert { ch: 'b' });
        recorder.stop();
        recorder.record(&Operation::Insert { ch: 'c' });

        assert_eq!(recorder.replay_list(), &[Operation::Insert { ch: 'b' }]);
    }

    #[test]
    fn test_start_keeps_log() {
        let mut recorder = MacroRecorder::new();
        recorder.start();
        recorder.record(&Operation::Copy);
        recorder.stop();
        recorder.start();
        recorder.record(&Operation::Paste);

        assert_eq!(recorder.replay_list(), &[Operation::Copy, Operation::Paste]);
    }

    #[test]
    fn test_clear_chains_with_start() {
        let mut recorder = MacroRecorder::new();
        recorder.start();
        recorder.record(&Operation::Cut);
        recorder.stop();

        recorder.clear().start();
        assert!(recorder.is_recording());
        assert!(recorder.replay_list().is_empty());
    }
}
