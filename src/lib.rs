//! In-memory single-file volume
//!
//! A block of heap memory exposed to a virtual filesystem layer as exactly one
//! implicit file: open it for writing to accumulate streamed bytes, close it to
//! finalize, then open it for reading to stream the bytes back once.
//!
//! # Layout
//!
//! - [`config`] - compile-time constants (staging size, mount point)
//! - [`sync`] - the lock every shared structure sits behind
//! - [`log`] - `pr_*` logging macros backed by a bounded ring buffer
//! - [`vfs`] - the backend contract, error codes, mount table and reset chain
//! - [`fs`] - the RAM file backend itself
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
pub mod log;

pub mod config;
pub mod fs;
pub mod sync;
pub mod vfs;

#[cfg(test)]
#[macro_use]
pub mod test;

pub use fs::ramfile::{RamFile, RamFileState, RamVolume, mount_ram_volume};
pub use vfs::{FileHandle, FileSystem, FsError, MountFlags, MountTable, OpenMode, ResetChain};
