//! 挂载表
//!
//! 将规范化的绝对路径映射到已挂载的后端。查找时按完整路径组件选择最长匹配，
//! 因此 `/ram` 负责 `/ram/upload.nc`，但不负责 `/ramdisk`。

use crate::sync::SpinLock;
use crate::vfs::path::strip_mount_prefix;
use crate::vfs::{FileSystem, FsError, normalize_path};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

bitflags::bitflags! {
    /// 挂载点对路径路由呈现的模式位
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MountFlags: u32 {
        /// 按目录路由，"<挂载点>/<名称>" 形式的路径都会到达该后端
        const DIRECTORY = 1 << 0;

        /// 不出现在挂载列表中
        const HIDDEN    = 1 << 1;
    }
}

/// 挂载点
pub struct MountPoint {
    /// 挂载的后端
    pub fs: Arc<dyn FileSystem>,

    /// 挂载标志
    pub flags: MountFlags,

    /// 规范化后的挂载路径
    pub mount_path: String,
}

impl MountPoint {
    /// 创建新的挂载点
    pub fn new(fs: Arc<dyn FileSystem>, mount_path: String, flags: MountFlags) -> Arc<Self> {
        Arc::new(Self {
            fs,
            flags,
            mount_path,
        })
    }
}

/// 挂载表
///
/// 由宿主创建并显式传给挂载者，没有全局实例。
pub struct MountTable {
    /// 挂载路径 -> 挂载点
    mounts: SpinLock<BTreeMap<String, Arc<MountPoint>>>,
}

impl MountTable {
    /// 创建空挂载表
    pub const fn new() -> Self {
        Self {
            mounts: SpinLock::new(BTreeMap::new()),
        }
    }

    /// 将 `fs` 挂载到 `path`
    ///
    /// 路径必须是绝对路径，否则返回 `InvalidArgument`；已被占用返回 `AlreadyExists`。
    pub fn mount(
        &self,
        fs: Arc<dyn FileSystem>,
        path: &str,
        flags: MountFlags,
    ) -> Result<(), FsError> {
        let normalized_path = normalize_path(path);
        if !normalized_path.starts_with('/') {
            return Err(FsError::InvalidArgument);
        }

        let mut mounts = self.mounts.lock();
        if mounts.contains_key(&normalized_path) {
            return Err(FsError::AlreadyExists);
        }

        let mount_point = MountPoint::new(fs, normalized_path.clone(), flags);
        mounts.insert(normalized_path, mount_point);

        Ok(())
    }

    /// 卸载 `path` 处的挂载点并返回它
    pub fn umount(&self, path: &str) -> Result<Arc<MountPoint>, FsError> {
        let normalized_path = normalize_path(path);

        self.mounts
            .lock()
            .remove(&normalized_path)
            .ok_or(FsError::NotFound)
    }

    /// 查找路径对应的挂载点
    ///
    /// 返回按完整路径组件的最长匹配。
    pub fn find_mount(&self, path: &str) -> Option<Arc<MountPoint>> {
        self.resolve(path).map(|(mount_point, _)| mount_point)
    }

    /// 查找 `path` 的挂载点及其下的相对路径
    pub fn resolve(&self, path: &str) -> Option<(Arc<MountPoint>, String)> {
        let normalized_path = normalize_path(path);
        let mounts = self.mounts.lock();

        let mut best_match: Option<(&Arc<MountPoint>, &str)> = None;
        let mut best_len = 0;

        for (mount_path, mount_point) in mounts.iter() {
            if let Some(rest) = strip_mount_prefix(&normalized_path, mount_path) {
                if best_match.is_none() || mount_path.len() > best_len {
                    best_match = Some((mount_point, rest));
                    best_len = mount_path.len();
                }
            }
        }

        best_match.map(|(mount_point, rest)| (mount_point.clone(), String::from(rest)))
    }

    /// 列出 (挂载路径, 文件系统类型)，跳过带 `HIDDEN` 的挂载点
    pub fn list_mounts(&self) -> Vec<(String, String)> {
        let mounts = self.mounts.lock();
        mounts
            .iter()
            .filter(|(_, mp)| !mp.flags.contains(MountFlags::HIDDEN))
            .map(|(path, mp)| (path.clone(), String::from(mp.fs.fs_type())))
            .collect()
    }
}

impl Default for MountTable {
    fn default() -> Self {
        Self::new()
    }
}
