//! constants for the RAM volume (platform-independent)

/// Capacity of the write staging buffer.
///
/// Matches the transmit block size of the host's streams, so a producer that
/// writes block by block fills the buffer in one or two calls.
pub const STAGING_BUFFER_SIZE: usize = 256;

/// Mount point of the RAM volume.
pub const RAM_MOUNT_PATH: &str = "/ram";

/// Filesystem type name reported to the mount table.
pub const RAM_FS_TYPE: &str = "ramfile";
