//! File collaborator used by the engine for open/save.
//!
//! The engine only ever exchanges `Vec<char>` with a [`FileStore`]; it never
//! touches the filesystem itself.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::spellcheck::Dictionary;

/// Reads and writes raw character sequences.
pub trait FileStore {
    fn read_file(&mut self, path: &Path) -> io::Result<Vec<char>>;

    fn write_file(&mut self, path: &Path, chars: &[char]) -> io::Result<()>;
}

/// [`FileStore`] backed by the local filesystem (UTF-8 text).
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileStore;

impl FileStore for FsFileStore {
    fn read_file(&mut self, path: &Path) -> io::Result<Vec<char>> {
        let text = fs::read_to_string(path)?;
        tracing::debug!("Read {} chars from {}", text.chars().count(), path.display());
        Ok(text.chars().collect())
    }

    fn write_file(&mut self, path: &Path, chars: &[char]) -> io::Result<()> {
        let text: String = chars.iter().collect();
        fs::write(path, text)?;
        tracing::debug!("Wrote {} chars to {}", chars.len(), path.display());
        Ok(())
    }
}

/// In-memory [`FileStore`], for tests and for embedding the engine without a
/// filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileStore {
    files: HashMap<PathBuf, Vec<char>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to seed a file
    pub fn with_file(mut self, path: impl Into<PathBuf>, text: &str) -> Self {
        self.files.insert(path.into(), text.chars().collect());
        self
    }

    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.get(path).map(|chars| chars.iter().collect())
    }
}

impl FileStore for MemoryFileStore {
    fn read_file(&mut self, path: &Path) -> io::Result<Vec<char>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn write_file(&mut self, path: &Path, chars: &[char]) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), chars.to_vec());
        Ok(())
    }
}

/// Load a word-per-line dictionary file
pub fn load_dictionary(path: &Path) -> io::Result<Dictionary> {
    let file = File::open(path)?;
    let dictionary = Dictionary::from_reader(BufReader::new(file))?;
    tracing::info!(
        "Loaded {} dictionary words from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}
