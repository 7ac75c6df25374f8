//! RAM 文件 - 保存在堆内存中的单个隐式文件
//!
//! 卷不识别文件名，任何路径都指向同一个文件。生产者以写方式打开并流式写入，
//! 关闭后内容定稿；消费者再以读方式打开并流式读回。关闭读句柄即删除内容（只读一次）。
//!
//! # 状态机
//!
//! ```text
//!            open(w)                 open(r)
//!   Closed ----------> Writing   Closed ----------> Reading
//!      ^                  |         ^                  |
//!      +---- close -------+         +---- close -------+
//!        (flush staging)              (free content)
//! ```
//!
//! [`RamFile::unlink`] 与 [`RamFile::reset`] 在任何状态下都会清空一切。
//!
//! # 写路径
//!
//! 写入经过 `N` 字节的 [`StagingBuffer`]：
//! 1. 若暂存区非空且放不下新的 `n` 字节，先提交暂存的字节；
//! 2. 若暂存区为空且 `n > N`，直接提交；
//! 3. 否则放入暂存区。
//!
//! 提交失败会释放后备存储（[`FsError::NoMemory`]），文件仍存在，大小为 0。
//!
//! 错误只返回不记录日志，由 [`RamVolume`] 在释放锁之后报告；这里只输出 debug 日志。

mod staging;
mod store;
mod volume;

pub use staging::StagingBuffer;
pub use store::BackingStore;
pub use volume::{RamVolume, mount_ram_volume};

use crate::config::STAGING_BUFFER_SIZE;
use crate::vfs::{FileHandle, FsError, OpenMode};
use core::cmp::min;

/// 文件在打开/关闭周期中的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RamFileState {
    /// 没有未关闭的句柄
    Closed,
    /// 写打开，字节不断累积
    Writing,
    /// 读打开，回放字节
    Reading,
}

/// 内存文件及其唯一句柄
pub struct RamFile<const N: usize = STAGING_BUFFER_SIZE> {
    store: BackingStore,
    staging: StagingBuffer<N>,
    state: RamFileState,
    /// 写打开时置位，删除时清除；`stat` 据此报告
    present: bool,
    /// 剩余待读字节数，读偏移为 `len - remaining`
    remaining: usize,
    /// 最近一次发放的句柄 id
    open_id: u64,
}

impl<const N: usize> RamFile<N> {
    /// 不存在且不限大小的文件
    pub const fn new() -> Self {
        Self::with_max_size(None)
    }

    /// 不存在的文件，已提交大小不得超过 `max_size`
    pub const fn with_max_size(max_size: Option<usize>) -> Self {
        Self {
            store: BackingStore::new(max_size),
            staging: StagingBuffer::new(),
            state: RamFileState::Closed,
            present: false,
            remaining: 0,
            open_id: 0,
        }
    }

    /// 打开文件
    ///
    /// 已有未关闭句柄时，无论请求何种模式都返回 [`FsError::Busy`]。写打开会丢弃
    /// 之前的内容；读打开不存在的文件会成功，但没有可读内容。
    pub fn open(&mut self, mode: OpenMode) -> Result<FileHandle, FsError> {
        if self.state != RamFileState::Closed {
            return Err(FsError::Busy);
        }

        match mode {
            OpenMode::Write => {
                self.store.release();
                self.staging.clear();
                self.present = true;
                self.remaining = 0;
                self.state = RamFileState::Writing;
            }
            OpenMode::Read => {
                self.remaining = self.store.len();
                self.state = RamFileState::Reading;
            }
        }
        self.open_id = self.open_id.wrapping_add(1);

        pr_debug!("ramfile: open {:?} -> handle {}", mode, self.open_id);
        Ok(FileHandle::new(self.open_id, mode))
    }

    /// 关闭句柄
    ///
    /// 关闭写句柄会刷新暂存区并保留内容；关闭读句柄会删除内容。失效句柄不改变任何状态。
    pub fn close(&mut self, file: FileHandle) -> Result<(), FsError> {
        self.check_handle(file)?;

        let result = match self.state {
            RamFileState::Writing => self.flush().map(|_| ()),
            RamFileState::Reading => {
                self.store.release();
                self.present = false;
                Ok(())
            }
            RamFileState::Closed => Ok(()),
        };
        self.state = RamFileState::Closed;
        self.remaining = 0;

        pr_debug!(
            "ramfile: close handle {}, {} bytes committed",
            file.id(),
            self.store.len()
        );
        result
    }

    /// 追加全部 `buf`，返回 `buf.len()`
    pub fn write(&mut self, file: FileHandle, buf: &[u8]) -> Result<usize, FsError> {
        self.check_handle(file)?;
        if file.mode() != OpenMode::Write {
            return Err(FsError::BadFileDescriptor);
        }
        if buf.is_empty() {
            return Ok(0);
        }

        if !self.staging.is_empty() && !self.staging.fits(buf.len()) {
            self.flush()?;
        }

        if self.staging.is_empty() && buf.len() > self.staging.capacity() {
            self.store.append(buf)?;
            return Ok(buf.len());
        }

        self.staging.append(buf)?;
        Ok(buf.len())
    }

    /// 从读位置最多复制 `buf.len()` 字节，末尾返回 `Ok(0)`
    pub fn read(&mut self, file: FileHandle, buf: &mut [u8]) -> Result<usize, FsError> {
        self.check_handle(file)?;
        if file.mode() != OpenMode::Read {
            return Err(FsError::BadFileDescriptor);
        }

        let count = min(buf.len(), self.remaining);
        let start = self.store.len() - self.remaining;
        buf[..count].copy_from_slice(&self.store.as_slice()[start..start + count]);
        self.remaining -= count;

        Ok(count)
    }

    /// 已读字节数；写打开时为已提交长度
    pub fn tell(&self, file: FileHandle) -> Result<usize, FsError> {
        self.check_handle(file)?;
        Ok(self.store.len() - self.remaining)
    }

    /// 是否已无可读内容
    pub fn eof(&self, file: FileHandle) -> Result<bool, FsError> {
        self.check_handle(file)?;
        Ok(self.remaining == 0)
    }

    /// 删除文件并使未关闭的句柄失效
    pub fn unlink(&mut self) {
        pr_debug!("ramfile: unlink ({:?})", self.state);
        self.wipe();
    }

    /// 已提交大小；文件不存在时返回 [`FsError::NotFound`]
    ///
    /// 不计入正在写入的暂存字节。
    pub fn stat(&self) -> Result<usize, FsError> {
        if self.present {
            Ok(self.store.len())
        } else {
            Err(FsError::NotFound)
        }
    }

    /// 宿主复位：不论状态都清空文件
    pub fn reset(&mut self) {
        pr_debug!("ramfile: reset ({:?})", self.state);
        self.wipe();
    }

    /// 当前状态
    pub fn state(&self) -> RamFileState {
        self.state
    }

    /// 文件是否存在
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// 已提交字节数
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// 是否没有已提交字节
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// 暂存区中等待提交的字节数
    pub fn staged_len(&self) -> usize {
        self.staging.len()
    }

    /// 后备存储的大小上限
    pub fn max_size(&self) -> Option<usize> {
        self.store.max_size()
    }

    fn check_handle(&self, file: FileHandle) -> Result<(), FsError> {
        let expected = match file.mode() {
            OpenMode::Write => RamFileState::Writing,
            OpenMode::Read => RamFileState::Reading,
        };
        if self.state == expected && file.id() == self.open_id {
            Ok(())
        } else {
            Err(FsError::BadFileDescriptor)
        }
    }

    /// 提交暂存字节并清空暂存区
    fn flush(&mut self) -> Result<usize, FsError> {
        if self.staging.is_empty() {
            return Ok(self.store.len());
        }
        let result = self.store.append(self.staging.as_slice());
        self.staging.clear();
        result
    }

    fn wipe(&mut self) {
        self.store.release();
        self.staging.clear();
        self.present = false;
        self.remaining = 0;
        self.state = RamFileState::Closed;
    }
}

impl<const N: usize> Default for RamFile<N> {
    fn default() -> Self {
        Self::new()
    }
}
