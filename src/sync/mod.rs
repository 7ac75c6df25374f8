//! 同步原语
//!
//! 本 crate 中每个共享结构（卷、挂载表、复位链、日志环）都由一把 [`SpinLock`] 保护。
//! 持锁期间不会挂起，自旋即可。
mod spin_lock;

pub use spin_lock::*;
