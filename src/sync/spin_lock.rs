//! 自旋锁

use core::ops::{Deref, DerefMut};

/// 拥有受保护数据的自旋锁
///
/// 不可重入：同一调用链对同一把锁两次调用 [`SpinLock::lock`] 会死锁。
///
/// ```ignore
/// let lock = SpinLock::new(0usize);
/// {
///     let mut guard = lock.lock();
///     *guard += 1;
/// } // 此处释放
/// ```
pub struct SpinLock<T: ?Sized> {
    inner: spin::Mutex<T>,
}

impl<T> SpinLock<T> {
    /// 创建包裹 `data` 的未上锁自旋锁
    pub const fn new(data: T) -> Self {
        Self {
            inner: spin::Mutex::new(data),
        }
    }

    /// 消耗锁并返回受保护的数据
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T: ?Sized> SpinLock<T> {
    /// 自旋直到获得锁，返回 RAII 守卫
    pub fn lock(&self) -> SpinLockGuard<'_, T> {
        SpinLockGuard {
            guard: self.inner.lock(),
        }
    }

    /// 尝试获取一次锁
    pub fn try_lock(&self) -> Option<SpinLockGuard<'_, T>> {
        self.inner.try_lock().map(|guard| SpinLockGuard { guard })
    }

    /// 锁当前是否被持有（仅用于调试/测试）
    pub fn is_locked(&self) -> bool {
        self.inner.is_locked()
    }
}

impl<T: Default> Default for SpinLock<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// 析构时释放 [`SpinLock`]
pub struct SpinLockGuard<'a, T: ?Sized + 'a> {
    guard: spin::MutexGuard<'a, T>,
}

impl<T: ?Sized> Deref for SpinLockGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T: ?Sized> DerefMut for SpinLockGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}
