use super::Resource;
use crate::error::{Result, StockError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Inventory kept in one file on disk.
///
/// Both operations open and close the file within the call, so the handle
/// is released on every return path. Writes truncate in place; an interrupted
/// write can leave a partial file.
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Resource for FileResource {
    fn read(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StockError::ResourceNotFound(self.location()))
            }
            Err(e) => Err(StockError::Io(e)),
        }
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockError::Io)?;
            }
        }
        fs::write(&self.path, contents).map_err(StockError::Io)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let resource = FileResource::new(dir.path().join("inventory.txt"));
        let err = resource.read().unwrap_err();
        assert!(matches!(err, StockError::ResourceNotFound(loc) if loc.ends_with("inventory.txt")));
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut resource = FileResource::new(dir.path().join("stock").join("inventory.txt"));
        resource.write("header\nA,B,C,1,2\n").unwrap();
        assert_eq!(resource.read().unwrap(), "header\nA,B,C,1,2\n");
    }

    #[test]
    fn write_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut resource = FileResource::new(dir.path().join("inventory.txt"));
        resource.write("a much longer first version\n").unwrap();
        resource.write("short\n").unwrap();
        assert_eq!(resource.read().unwrap(), "short\n");
    }
}
