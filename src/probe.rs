use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Filesystem checks used by commands that open files
pub trait FileProbe {
    /// Whether anything (file or directory) exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` can be opened for reading. The handle is released
    /// before returning.
    fn readable(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Entire content of `path`, byte for byte
    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Probe backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProbe;

impl FileProbe for OsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn readable(&self, path: &Path) -> bool {
        File::open(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn probes_existing_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "no trailing newline").unwrap();

        assert!(OsProbe.exists(&file));
        assert!(OsProbe.readable(&file));
        assert!(!OsProbe.is_dir(&file));
        assert_eq!(OsProbe.read_all(&file).unwrap(), b"no trailing newline");
    }

    #[test]
    fn directories_exist_but_are_dirs() {
        let dir = TempDir::new().unwrap();
        assert!(OsProbe.exists(dir.path()));
        assert!(OsProbe.is_dir(dir.path()));
    }

    #[test]
    fn missing_path_is_neither_present_nor_readable() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert!(!OsProbe.exists(&missing));
        assert!(!OsProbe.readable(&missing));
        assert!(OsProbe.read_all(&missing).is_err());
    }

    #[test]
    fn read_all_keeps_bytes_verbatim() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("crlf");
        fs::write(&file, b"a\r\nb\n\n").unwrap();
        assert_eq!(OsProbe.read_all(&file).unwrap(), b"a\r\nb\n\n");
    }
}
