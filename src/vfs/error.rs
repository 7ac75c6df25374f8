//! VFS 错误类型
//!
//! 与 POSIX 兼容的错误码，可通过 [`FsError::to_errno()`] 转换为 C 风格调用者期望的负值状态码。

use core::fmt;

/// VFS 错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// -ENOENT(2): 文件不存在
    NotFound,
    /// -EBADF(9): 句柄未打开，或属于更早的一次打开
    BadFileDescriptor,
    /// -ENOMEM(12): 后备存储无法增长
    NoMemory,
    /// -EBUSY(16): 已有未关闭的句柄
    Busy,
    /// -EEXIST(17): 挂载点已被占用
    AlreadyExists,
    /// -EINVAL(22): size/count 或路径无效
    InvalidArgument,
    /// -ENOTSUP(95): 目录等不支持的操作
    NotSupported,
}

impl FsError {
    /// 转换为负的 errno 值
    pub fn to_errno(&self) -> isize {
        match self {
            FsError::NotFound => -2,
            FsError::BadFileDescriptor => -9,
            FsError::NoMemory => -12,
            FsError::Busy => -16,
            FsError::AlreadyExists => -17,
            FsError::InvalidArgument => -22,
            FsError::NotSupported => -95,
        }
    }

    /// 该错误是否已销毁文件内容
    pub fn is_destructive(&self) -> bool {
        matches!(self, FsError::NoMemory)
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FsError::NotFound => "no such file",
            FsError::BadFileDescriptor => "bad file handle",
            FsError::NoMemory => "out of memory",
            FsError::Busy => "file already open",
            FsError::AlreadyExists => "already mounted",
            FsError::InvalidArgument => "invalid argument",
            FsError::NotSupported => "operation not supported",
        };
        f.write_str(text)
    }
}
