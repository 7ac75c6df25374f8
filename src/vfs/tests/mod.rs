use crate::vfs::{FileHandle, FileSystem, FsError, OpenMode, VfsStat};
use alloc::sync::Arc;

// Test helper functions (fixtures)

/// Backend that accepts every open and echoes fixed data.
pub struct EchoFs {
    pub name: &'static str,
}

impl FileSystem for EchoFs {
    fn fs_type(&self) -> &'static str {
        self.name
    }

    fn open(&self, _path: &str, mode: &str) -> Result<FileHandle, FsError> {
        Ok(FileHandle::new(1, OpenMode::parse(mode)))
    }

    fn close(&self, _file: FileHandle) -> Result<(), FsError> {
        Ok(())
    }

    fn read(&self, _file: FileHandle, buf: &mut [u8]) -> Result<usize, FsError> {
        buf.fill(b'e');
        Ok(buf.len())
    }

    fn write(&self, file: FileHandle, buf: &[u8]) -> Result<usize, FsError> {
        match file.mode() {
            OpenMode::Write => Ok(buf.len()),
            OpenMode::Read => Err(FsError::BadFileDescriptor),
        }
    }

    fn tell(&self, _file: FileHandle) -> Result<usize, FsError> {
        Ok(0)
    }

    fn eof(&self, _file: FileHandle) -> Result<bool, FsError> {
        Ok(false)
    }

    fn unlink(&self, _path: &str) -> Result<(), FsError> {
        Err(FsError::NotFound)
    }

    fn stat(&self, _path: &str) -> Result<VfsStat, FsError> {
        Err(FsError::NotFound)
    }
}

/// Create an `EchoFs` ready to mount
pub fn create_echo_fs(name: &'static str) -> Arc<EchoFs> {
    Arc::new(EchoFs { name })
}
