//! Owns the optional log file. Closed until a path is opened, back to Closed when
//! replaced, cleared, or dropped.

use crate::fmt::Rendered;

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// At most one open handle; every transition goes through [`FileOutput::close`] first.
#[derive(Debug, Default)]
pub struct FileOutput {
    open: Option<(PathBuf, File)>,
}

impl FileOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: None }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.open.as_ref().map(|(path, _)| path.as_path())
    }

    /// Closes the current file, then creates or truncates `path`.
    ///
    /// An empty path only closes. On failure the output stays Closed.
    ///
    /// # Errors
    /// The I/O error from creating the file.
    pub fn open(&mut self, path: &Path) -> Result<(), crate::Error> {
        self.close();

        if path.as_os_str().is_empty() {
            return Ok(());
        }

        let file = File::create(path)?;
        self.open = Some((path.to_path_buf(), file));
        Ok(())
    }

    /// Flushes and releases the handle. Closing a Closed output is a no-op.
    pub fn close(&mut self) {
        if let Some((_, mut file)) = self.open.take() {
            let _ = file.flush();
        }
    }

    /// Appends the plain view of `rendered`; a Closed output swallows it.
    ///
    /// # Errors
    /// I/O errors from the write.
    pub fn write(&mut self, rendered: &Rendered) -> Result<(), crate::Error> {
        if let Some((_, file)) = self.open.as_mut() {
            file.write_all(rendered.plain.as_bytes())?;
        }
        Ok(())
    }

    /// # Errors
    /// I/O errors from the flush.
    pub fn flush(&mut self) -> Result<(), crate::Error> {
        if let Some((_, file)) = self.open.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

impl Drop for FileOutput {
    fn drop(&mut self) {
        self.close();
    }
}
