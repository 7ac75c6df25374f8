//! 虚拟文件系统接口
//!
//! 后端被挂载所需实现的 [`FileSystem`]、后端报告的错误码 [`FsError`]、
//! 将路径路由到后端的挂载表，以及宿主复位时清空易失后端的复位链。
pub mod error;
pub mod file;
pub mod lifecycle;
pub mod mount;
pub mod path;

pub use error::FsError;
pub use file::{FileHandle, FileSystem, OpenMode, VfsStat};
pub use lifecycle::{ResetChain, ResetHook};
pub use mount::{MountFlags, MountPoint, MountTable};
pub use path::{normalize_path, parse_path};

#[cfg(test)]
mod tests;
