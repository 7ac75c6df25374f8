//! 复位链
//!
//! 宿主复位时调用 [`ResetChain::reset`]。持有易失状态的子系统各自注册一个
//! [`ResetHook`]；钩子按注册顺序执行，宿主先注册的钩子先于之后挂载的卷的钩子运行。

use crate::sync::SpinLock;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// 宿主复位时需要清空的对象
pub trait ResetHook: Send + Sync {
    /// 用于日志和 [`ResetChain::is_registered`] 的名称
    fn name(&self) -> &str;

    /// 丢弃易失状态
    fn on_reset(&self);
}

/// 通过 [`ResetChain::register_fn`] 注册的闭包
struct FnHook {
    name: String,
    callback: Box<dyn Fn() + Send + Sync>,
}

impl ResetHook for FnHook {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_reset(&self) {
        (self.callback)()
    }
}

/// 有序的复位钩子列表
pub struct ResetChain {
    hooks: SpinLock<Vec<Arc<dyn ResetHook>>>,
}

impl ResetChain {
    /// 创建空复位链
    pub const fn new() -> Self {
        Self {
            hooks: SpinLock::new(Vec::new()),
        }
    }

    /// 追加钩子
    pub fn register(&self, hook: Arc<dyn ResetHook>) {
        pr_debug!("reset chain: registered {}", hook.name());
        self.hooks.lock().push(hook);
    }

    /// 将闭包作为钩子追加
    pub fn register_fn<F>(&self, name: &str, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.register(Arc::new(FnHook {
            name: String::from(name),
            callback: Box::new(callback),
        }));
    }

    /// 是否已注册该名称的钩子
    pub fn is_registered(&self, name: &str) -> bool {
        self.hooks.lock().iter().any(|hook| hook.name() == name)
    }

    /// 已注册钩子数
    pub fn len(&self) -> usize {
        self.hooks.lock().len()
    }

    /// 是否没有注册任何钩子
    pub fn is_empty(&self) -> bool {
        self.hooks.lock().is_empty()
    }

    /// 按注册顺序运行所有钩子
    ///
    /// 先对列表做快照，钩子运行时不持有复位链的锁。
    pub fn reset(&self) {
        let hooks: Vec<Arc<dyn ResetHook>> = self.hooks.lock().clone();
        pr_info!("reset: running {} hooks", hooks.len());
        for hook in hooks {
            hook.on_reset();
        }
    }
}

impl Default for ResetChain {
    fn default() -> Self {
        Self::new()
    }
}
