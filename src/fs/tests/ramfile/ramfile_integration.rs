//! 通过 VFS 接口、挂载表和复位链测试 RamVolume

use super::*;
use crate::config::{RAM_FS_TYPE, RAM_MOUNT_PATH};
use crate::fs::ramfile::{RamFileState, mount_ram_volume};
use crate::log::{LogEntry, set_console_sink};
use crate::sync::SpinLock;
use crate::vfs::{MountFlags, MountTable, ResetChain, VfsStat};
use crate::{kassert, test_case};
use core::sync::atomic::{AtomicUsize, Ordering};

test_case!(test_volume_hello_world, {
    let volume = create_test_volume();

    let file = volume.open("/whatever", "w").unwrap();
    kassert!(volume.fwrite(file, b"hello ", 1, 6) == 6);
    kassert!(volume.fwrite(file, b"world", 5, 1) == 5);
    volume.close(file).unwrap();
    kassert!(volume.stat("ignored") == Ok(VfsStat { size: 11 }));

    let file = volume.open("another/name", "r").unwrap();
    let mut buf = [0u8; 20];
    kassert!(volume.fread(file, &mut buf, 1, 20) == 11);
    kassert!(&buf[..11] == b"hello world");
    kassert!(volume.eof(file) == Ok(true));
    kassert!(volume.tell(file) == Ok(11));
    volume.close(file).unwrap();

    kassert!(volume.stat("x") == Err(FsError::NotFound));
});

test_case!(test_volume_sentinels, {
    let volume = create_test_volume();
    let file = volume.open("f", "w").unwrap();

    kassert!(volume.fwrite(file, b"abc", 2, 2) == 0);
    kassert!(volume.fwrite(file, b"abc", 0, 3) == 0);
    kassert!(volume.fwrite(file, b"abcd", 2, 2) == 4);
    kassert!(volume.status(volume.close(file)) == 0);
    kassert!(volume.status(volume.close(file)) == -9);

    kassert!(volume.open("f", "w").is_ok());
    kassert!(volume.open("f", "w").err() == Some(FsError::Busy));
});

test_case!(test_volume_directory_ops_unsupported, {
    let volume = create_test_volume();
    kassert!(volume.mkdir("/ram/d") == Err(FsError::NotSupported));
    kassert!(volume.chdir("/ram/d") == Err(FsError::NotSupported));
    kassert!(volume.rmdir("/ram/d") == Err(FsError::NotSupported));
    kassert!(volume.opendir("/ram") == Err(FsError::NotSupported));
    kassert!(volume.status(volume.mkdir("/ram/d")) == -95);
});

test_case!(test_volume_unlink, {
    let volume = create_test_volume();
    write_volume(&volume, b"abc");
    kassert!(volume.used_size() == 3);

    kassert!(volume.unlink("/ram/anything") == Ok(()));
    kassert!(volume.stat("") == Err(FsError::NotFound));
    kassert!(volume.used_size() == 0);
});

test_case!(test_volume_size_cap, {
    let volume = RamVolume::with_max_size(1024);
    kassert!(volume.max_size() == Some(1024));
    kassert!(create_test_volume().max_size().is_none());

    let file = volume.open("f", "w").unwrap();
    kassert!(volume.fwrite(file, &pattern(2048), 1, 2048) == 0);
    kassert!(volume.stat("f").unwrap().size == 0);
});

test_case!(test_mount_ram_volume, {
    let table = MountTable::new();
    let resets = ResetChain::new();
    let volume = create_test_volume();

    mount_ram_volume(&table, &resets, volume.clone()).unwrap();

    let (mp, rest) = table.resolve("/ram/upload.nc").unwrap();
    kassert!(mp.mount_path == RAM_MOUNT_PATH);
    kassert!(rest == "upload.nc");
    kassert!(mp.flags == MountFlags::DIRECTORY | MountFlags::HIDDEN);
    kassert!(mp.fs.fs_type() == RAM_FS_TYPE);
    kassert!(resets.is_registered(RAM_FS_TYPE));

    // 经挂载点写入到达同一个卷
    let file = mp.fs.open(&rest, "w").unwrap();
    mp.fs.write(file, b"routed").unwrap();
    mp.fs.close(file).unwrap();
    kassert!(volume.used_size() == 6);

    kassert!(table.find_mount("/ramdisk/x").is_none());
});

test_case!(test_mount_twice_registers_once, {
    let table = MountTable::new();
    let resets = ResetChain::new();

    mount_ram_volume(&table, &resets, create_test_volume()).unwrap();
    let again = mount_ram_volume(&table, &resets, create_test_volume());

    kassert!(again == Err(FsError::AlreadyExists));
    kassert!(resets.len() == 1);
    // 挂载点带 HIDDEN，不出现在列表中
    kassert!(table.list_mounts().is_empty());
    kassert!(table.umount(RAM_MOUNT_PATH).is_ok());
    kassert!(table.find_mount("/ram/x").is_none());
});

test_case!(test_reset_chain_wipes_after_host_hook, {
    let table = MountTable::new();
    let resets = ResetChain::new();
    let volume = create_test_volume();
    let seen_by_host = Arc::new(SpinLock::new(None));

    // 宿主自己的复位处理先于卷注册
    let host_volume = volume.clone();
    let host_seen = seen_by_host.clone();
    resets.register_fn("host", move || {
        *host_seen.lock() = Some(host_volume.stat("").map(|st| st.size));
    });
    mount_ram_volume(&table, &resets, volume.clone()).unwrap();

    let file = volume.open("", "w").unwrap();
    volume.write(file, &pattern(1000)).unwrap();
    volume.write(file, b"staged").unwrap();

    resets.reset();

    kassert!(*seen_by_host.lock() == Some(Ok(1000)));
    kassert!(volume.stat("") == Err(FsError::NotFound));
    kassert!(volume.state() == RamFileState::Closed);
    kassert!(volume.write(file, b"late") == Err(FsError::BadFileDescriptor));
});

test_case!(test_volume_serializes_concurrent_opens, {
    let volume = create_test_volume();
    let winners = Arc::new(SpinLock::new(0usize));

    let threads: Vec<_> = (0..8)
        .map(|_| {
            let volume = volume.clone();
            let winners = winners.clone();
            std::thread::spawn(move || {
                if volume.open("f", "w").is_ok() {
                    *winners.lock() += 1;
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }

    kassert!(*winners.lock() == 1);
    kassert!(volume.state() == RamFileState::Writing);
});

static WATCHED_VOLUME: SpinLock<Option<Arc<RamVolume>>> = SpinLock::new(None);
static WATCHED_REPORTS: AtomicUsize = AtomicUsize::new(0);

fn querying_sink(entry: &LogEntry) {
    let volume = WATCHED_VOLUME.lock().clone();
    if let Some(volume) = volume {
        if entry.message().starts_with("ramfile:") {
            // 若警告在持有卷锁时记录，这里会永远自旋
            let _ = volume.used_size();
            WATCHED_REPORTS.fetch_add(1, Ordering::SeqCst);
        }
    }
}

test_case!(test_console_sink_may_query_volume, {
    let volume = RamVolume::with_max_size(16);
    *WATCHED_VOLUME.lock() = Some(volume.clone());
    set_console_sink(Some(querying_sink));

    let file = volume.open("f", "w").unwrap();
    kassert!(volume.open("f", "w").err() == Some(FsError::Busy));
    kassert!(volume.write(file, &pattern(300)) == Err(FsError::NoMemory));
    volume.close(file).unwrap();
    kassert!(volume.write(file, b"late") == Err(FsError::BadFileDescriptor));

    set_console_sink(None);
    *WATCHED_VOLUME.lock() = None;
    kassert!(WATCHED_REPORTS.load(Ordering::SeqCst) >= 3);
});
