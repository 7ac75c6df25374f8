//! RAM 卷 - 通过 VFS 后端接口暴露的 [`RamFile`]

use super::{RamFile, RamFileState};
use crate::config::{RAM_FS_TYPE, RAM_MOUNT_PATH};
use crate::sync::SpinLock;
use crate::vfs::{
    FileHandle, FileSystem, FsError, MountFlags, MountTable, OpenMode, ResetChain, ResetHook,
    VfsStat,
};
use alloc::sync::Arc;

/// 持有一个 [`RamFile`] 的可挂载卷
///
/// 每次调用在整个过程中持有卷锁，并发调用者因此被串行化。失败在释放锁之后才记录日志。
pub struct RamVolume {
    file: SpinLock<RamFile>,
}

impl RamVolume {
    /// 创建不限大小的卷
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            file: SpinLock::new(RamFile::new()),
        })
    }

    /// 创建文件最多容纳 `max_size` 字节的卷
    pub fn with_max_size(max_size: usize) -> Arc<Self> {
        Arc::new(Self {
            file: SpinLock::new(RamFile::with_max_size(Some(max_size))),
        })
    }

    /// 已提交字节数
    pub fn used_size(&self) -> usize {
        self.file.lock().len()
    }

    /// 大小上限
    pub fn max_size(&self) -> Option<usize> {
        self.file.lock().max_size()
    }

    /// 文件状态
    pub fn state(&self) -> RamFileState {
        self.file.lock().state()
    }
}

/// 在卷锁释放后记录失败的调用，控制台输出函数因此可以查询卷
fn report<T>(op: &str, result: Result<T, FsError>) -> Result<T, FsError> {
    match &result {
        Err(e @ (FsError::Busy | FsError::BadFileDescriptor)) => {
            pr_warn!("ramfile: {} refused: {}", op, e);
        }
        Err(e @ FsError::NoMemory) => {
            pr_err!("ramfile: {} failed ({}), content dropped", op, e);
        }
        _ => {}
    }
    result
}

impl FileSystem for RamVolume {
    fn fs_type(&self) -> &'static str {
        RAM_FS_TYPE
    }

    fn open(&self, _path: &str, mode: &str) -> Result<FileHandle, FsError> {
        let result = self.file.lock().open(OpenMode::parse(mode));
        report("open", result)
    }

    fn close(&self, file: FileHandle) -> Result<(), FsError> {
        let result = self.file.lock().close(file);
        report("close", result)
    }

    fn read(&self, file: FileHandle, buf: &mut [u8]) -> Result<usize, FsError> {
        let result = self.file.lock().read(file, buf);
        report("read", result)
    }

    fn write(&self, file: FileHandle, buf: &[u8]) -> Result<usize, FsError> {
        let result = self.file.lock().write(file, buf);
        report("write", result)
    }

    fn tell(&self, file: FileHandle) -> Result<usize, FsError> {
        let result = self.file.lock().tell(file);
        report("tell", result)
    }

    fn eof(&self, file: FileHandle) -> Result<bool, FsError> {
        let result = self.file.lock().eof(file);
        report("eof", result)
    }

    fn unlink(&self, _path: &str) -> Result<(), FsError> {
        self.file.lock().unlink();
        Ok(())
    }

    fn stat(&self, _path: &str) -> Result<VfsStat, FsError> {
        let size = self.file.lock().stat()?;
        Ok(VfsStat { size })
    }
}

impl ResetHook for RamVolume {
    fn name(&self) -> &str {
        RAM_FS_TYPE
    }

    fn on_reset(&self) {
        let dropped = {
            let mut file = self.file.lock();
            let dropped = file.len() + file.staged_len();
            file.reset();
            dropped
        };
        if dropped > 0 {
            pr_info!("ramfile: reset dropped {} bytes", dropped);
        }
    }
}

/// 将 `volume` 挂载到 [`RAM_MOUNT_PATH`] 并接入宿主复位
///
/// 挂载点标记为隐藏目录，"/ram/<任意名称>" 都会路由到该卷。路径已被挂载时不注册任何钩子。
pub fn mount_ram_volume(
    table: &MountTable,
    resets: &ResetChain,
    volume: Arc<RamVolume>,
) -> Result<(), FsError> {
    table
        .mount(
            volume.clone(),
            RAM_MOUNT_PATH,
            MountFlags::DIRECTORY | MountFlags::HIDDEN,
        )
        .inspect_err(|e| pr_warn!("ramfile: mount at {} failed: {}", RAM_MOUNT_PATH, e))?;
    resets.register(volume);

    pr_info!("ramfile: mounted at {}", RAM_MOUNT_PATH);
    Ok(())
}
