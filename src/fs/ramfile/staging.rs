//! 写暂存区
//!
//! 小块写入先落在这里，每满一次才向后备存储提交一次，因此存储增长次数约为
//! `total / N`，而不是每次写调用一次。

use crate::vfs::FsError;

/// 固定容量的未提交字节缓冲区
pub struct StagingBuffer<const N: usize> {
    data: [u8; N],
    /// 已使用字节数，始终 `<= N`
    length: usize,
}

impl<const N: usize> StagingBuffer<N> {
    /// 创建空缓冲区
    pub const fn new() -> Self {
        Self {
            data: [0; N],
            length: 0,
        }
    }

    /// 固定容量 `N`
    pub const fn capacity(&self) -> usize {
        N
    }

    /// 当前暂存字节数
    pub fn len(&self) -> usize {
        self.length
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// 能否再放下 `n` 字节
    pub fn fits(&self, n: usize) -> bool {
        n <= N - self.length
    }

    /// 追加 `bytes`；放不下时拒绝，且不暂存任何字节
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), FsError> {
        if !self.fits(bytes.len()) {
            return Err(FsError::InvalidArgument);
        }
        let end = self.length + bytes.len();
        self.data[self.length..end].copy_from_slice(bytes);
        self.length = end;
        Ok(())
    }

    /// 暂存的字节
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.length]
    }

    /// 丢弃所有暂存字节
    pub fn clear(&mut self) {
        self.length = 0;
    }
}

impl<const N: usize> Default for StagingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
