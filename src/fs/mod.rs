//! 文件系统后端
//!
//! 目前只有一个后端：[`ramfile`]，对外暴露单个内存文件的卷。
pub mod ramfile;

#[cfg(test)]
mod tests;
