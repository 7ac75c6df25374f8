//! 路径解析与规范化

use alloc::string::String;
use alloc::vec::Vec;

/// 路径组件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathComponent {
    /// "/"
    Root,
    /// "."
    Current,
    /// ".."
    Parent,
    /// 普通文件名
    Normal(String),
}

/// 将路径字符串拆分为组件
pub fn parse_path(path: &str) -> Vec<PathComponent> {
    let mut components = Vec::new();

    if path.starts_with('/') {
        components.push(PathComponent::Root);
    }

    for part in path.split('/').filter(|s| !s.is_empty()) {
        let component = match part {
            "." => PathComponent::Current,
            ".." => PathComponent::Parent,
            name => PathComponent::Normal(String::from(name)),
        };
        components.push(component);
    }

    components
}

/// 规范化路径：折叠 "."、".." 和重复的分隔符
///
/// 绝对路径不会越过 "/"；相对路径保留开头的 ".."。
pub fn normalize_path(path: &str) -> String {
    let mut stack: Vec<String> = Vec::new();
    let mut is_absolute = false;

    for component in parse_path(path) {
        match component {
            PathComponent::Root => is_absolute = true,
            PathComponent::Current => {}
            PathComponent::Parent => match stack.last() {
                Some(last) if last != ".." => {
                    stack.pop();
                }
                _ if is_absolute => {}
                _ => stack.push(String::from("..")),
            },
            PathComponent::Normal(name) => stack.push(name),
        }
    }

    if stack.is_empty() {
        if is_absolute {
            String::from("/")
        } else {
            String::from(".")
        }
    } else if is_absolute {
        String::from("/") + &stack.join("/")
    } else {
        stack.join("/")
    }
}

/// 若 `prefix` 按完整组件覆盖 `path`，返回 `path` 在其下的相对部分
///
/// 两个参数都必须已规范化。`"/ram"` 覆盖 `"/ram"` 和 `"/ram/x"`，但不覆盖 `"/ramdisk"`。
pub fn strip_mount_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix == "/" {
        return Some(path.trim_start_matches('/'));
    }
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}
