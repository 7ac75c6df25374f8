//! 后端接口 - 分发层对已挂载卷调用的操作
//!
//! 分发层将路径解析到挂载点，再把相对于挂载点的路径转发给后端。后端由
//! [`FileSystem::open`] 发放 [`FileHandle`]，之后每个按文件的调用都会把它传回。
//!
//! 方法返回 `Result`；提供的 [`FileSystem::fread`]、[`FileSystem::fwrite`] 和
//! [`FileSystem::status`] 将结果折算为 C 风格调用者使用的哨兵值（字节数、0、负 errno）。

use crate::vfs::FsError;

/// 文件打开方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// 读回已有内容
    Read,
    /// 用写入的数据替换内容
    Write,
}

impl OpenMode {
    /// 解析 fopen 风格的模式串：包含 `'w'` 即为写
    ///
    /// ```
    /// use ramfile::OpenMode;
    /// assert_eq!(OpenMode::parse("wb"), OpenMode::Write);
    /// assert_eq!(OpenMode::parse("r"), OpenMode::Read);
    /// ```
    pub fn parse(mode: &str) -> Self {
        if mode.contains('w') {
            OpenMode::Write
        } else {
            OpenMode::Read
        }
    }
}

/// 已打开文件的不透明句柄
///
/// 每次成功打开的 `id` 都不同，因此关闭（或 unlink）之后仍被持有的句柄不再匹配，
/// 会被当作失效句柄拒绝。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHandle {
    id: u64,
    mode: OpenMode,
}

impl FileHandle {
    /// 创建句柄，仅由后端调用
    pub const fn new(id: u64, mode: OpenMode) -> Self {
        Self { id, mode }
    }

    /// 打开序号
    pub fn id(&self) -> u64 {
        self.id
    }

    /// 打开方向
    pub fn mode(&self) -> OpenMode {
        self.mode
    }
}

/// [`FileSystem::stat`] 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VfsStat {
    /// 已提交的字节数
    pub size: usize,
}

/// 可挂载后端提供的操作
///
/// 目录操作默认返回 [`FsError::NotSupported`]，扁平后端只需实现文件操作。
pub trait FileSystem: Send + Sync {
    /// 后端类型名，如 "ramfile"
    fn fs_type(&self) -> &'static str;

    /// 以 `mode`（fopen 模式串）打开 `path`
    fn open(&self, path: &str, mode: &str) -> Result<FileHandle, FsError>;

    /// 关闭已打开的句柄
    fn close(&self, file: FileHandle) -> Result<(), FsError>;

    /// 从文件中最多复制 `buf.len()` 字节
    ///
    /// 到达文件末尾时返回 `Ok(0)`。
    fn read(&self, file: FileHandle, buf: &mut [u8]) -> Result<usize, FsError>;

    /// 写入全部 `buf` 或失败，不会报告部分写入
    fn write(&self, file: FileHandle, buf: &[u8]) -> Result<usize, FsError>;

    /// 下一个待读字节的位置
    fn tell(&self, file: FileHandle) -> Result<usize, FsError>;

    /// 读位置是否已到末尾
    fn eof(&self, file: FileHandle) -> Result<bool, FsError>;

    /// 删除 `path`
    fn unlink(&self, path: &str) -> Result<(), FsError>;

    /// 获取 `path` 的大小
    fn stat(&self, path: &str) -> Result<VfsStat, FsError>;

    /// 创建目录
    fn mkdir(&self, _path: &str) -> Result<(), FsError> {
        Err(FsError::NotSupported)
    }

    /// 切换工作目录
    fn chdir(&self, _path: &str) -> Result<(), FsError> {
        Err(FsError::NotSupported)
    }

    /// 删除目录
    fn rmdir(&self, _path: &str) -> Result<(), FsError> {
        Err(FsError::NotSupported)
    }

    /// 打开目录以便列举
    fn opendir(&self, _path: &str) -> Result<FileHandle, FsError> {
        Err(FsError::NotSupported)
    }

    /// 关闭目录句柄
    fn closedir(&self, _dir: FileHandle) {}

    /// 按块读取 `count` 个 `size` 字节的元素
    ///
    /// 返回读到的字节数，文件末尾时可能更少，任何错误返回 0。
    fn fread(&self, file: FileHandle, buf: &mut [u8], size: usize, count: usize) -> usize {
        block_len(size, count, buf.len())
            .and_then(|len| self.read(file, &mut buf[..len]))
            .unwrap_or(0)
    }

    /// 按块写入 `count` 个 `size` 字节的元素
    ///
    /// 成功时返回请求的字节数，任何错误返回 0。
    fn fwrite(&self, file: FileHandle, buf: &[u8], size: usize, count: usize) -> usize {
        block_len(size, count, buf.len())
            .and_then(|len| self.write(file, &buf[..len]))
            .unwrap_or(0)
    }

    /// 将结果映射为 0 或负 errno
    fn status(&self, result: Result<(), FsError>) -> isize {
        match result {
            Ok(()) => 0,
            Err(e) => e.to_errno(),
        }
    }
}

/// 计算 `size * count`，检查溢出及调用者缓冲区长度
fn block_len(size: usize, count: usize, available: usize) -> Result<usize, FsError> {
    match size.checked_mul(count) {
        Some(len) if len <= available => Ok(len),
        _ => Err(FsError::InvalidArgument),
    }
}
