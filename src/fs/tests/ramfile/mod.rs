use crate::fs::ramfile::{RamFile, RamVolume};
use crate::vfs::{FileSystem, FsError, OpenMode};
use alloc::sync::Arc;
use alloc::vec::Vec;

// Test helper functions (fixtures)

/// Staging capacity of the small test files
pub const SMALL: usize = 8;

/// A RamFile with an 8-byte staging buffer, so flush paths are cheap to hit
pub fn create_small_ramfile() -> RamFile<SMALL> {
    RamFile::new()
}

/// A volume with the default staging size and no cap
pub fn create_test_volume() -> Arc<RamVolume> {
    RamVolume::new()
}

/// Deterministic non-repeating-looking payload
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

/// Writes `chunks` in order through one write handle and closes it
pub fn write_chunks<const N: usize>(file: &mut RamFile<N>, chunks: &[&[u8]]) -> Result<(), FsError> {
    let handle = file.open(OpenMode::Write)?;
    for chunk in chunks {
        file.write(handle, chunk)?;
    }
    file.close(handle)
}

/// Opens for read, drains the file with `step`-sized reads and returns the
/// bytes plus the final `tell`, leaving the handle open
pub fn read_all<const N: usize>(file: &mut RamFile<N>, step: usize) -> (Vec<u8>, usize) {
    let handle = file.open(OpenMode::Read).unwrap();
    let mut out = Vec::new();
    let mut buf = alloc::vec![0u8; step];
    loop {
        let n = file.read(handle, &mut buf).unwrap();
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }
    let tell = file.tell(handle).unwrap();
    (out, tell)
}

/// Writes `content` through the volume interface and closes
pub fn write_volume(volume: &RamVolume, content: &[u8]) {
    let file = volume.open("upload.nc", "w").unwrap();
    volume.write(file, content).unwrap();
    volume.close(file).unwrap();
}

pub mod ramfile_integration;
