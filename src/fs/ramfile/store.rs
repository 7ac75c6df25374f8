//! 后备存储
//!
//! 持有已提交的字节。按需精确增长：每次提交只预留它追加的字节数。

use crate::vfs::FsError;
use alloc::vec::Vec;

/// 已提交的文件内容
pub struct BackingStore {
    data: Vec<u8>,
    /// `data.len()` 的上限，`None` 表示不限
    max_size: Option<usize>,
}

impl BackingStore {
    /// 创建空存储，可选大小上限
    pub const fn new(max_size: Option<usize>) -> Self {
        Self {
            data: Vec::new(),
            max_size,
        }
    }

    /// 已提交长度
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 大小上限
    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// 已提交的字节
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// 将存储增长 `bytes.len()` 并复制进去
    ///
    /// 返回新长度。失败时释放整个存储并返回 [`FsError::NoMemory`]，之前写入的内容全部丢失。
    pub fn append(&mut self, bytes: &[u8]) -> Result<usize, FsError> {
        if let Err(e) = self.grow(bytes.len()) {
            self.release();
            return Err(e);
        }
        self.data.extend_from_slice(bytes);
        Ok(self.data.len())
    }

    fn grow(&mut self, additional: usize) -> Result<(), FsError> {
        let new_len = self
            .data
            .len()
            .checked_add(additional)
            .ok_or(FsError::NoMemory)?;
        if self.max_size.is_some_and(|max| new_len > max) {
            return Err(FsError::NoMemory);
        }
        self.data
            .try_reserve_exact(additional)
            .map_err(|_| FsError::NoMemory)
    }

    /// 释放缓冲区，之后存储为空
    pub fn release(&mut self) {
        self.data = Vec::new();
    }
}
