//! 持久化适配层
//!
//! 把"纯状态变更"与"落盘"分开：store 先在内存中完成变更，
//! 再经由这里的写穿（write-through）步骤同步到持久化后端。
//! 后端以 trait 抽象，浏览器环境落 LocalStorage，
//! 单元测试注入内存实现即可覆盖持久化往返，无需浏览器。

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::rc::Rc;

use crate::web::LocalStorage;

/// 键值持久化后端
///
/// 持久化失败不是可恢复错误：内存状态始终是权威的，
/// 落盘失败只以 `false` 上报，由调用方降级为警告。
pub trait StateStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

/// 浏览器 LocalStorage 后端
pub struct BrowserStorage;

impl StateStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::get(key)
    }

    fn store(&self, key: &str, value: &str) -> bool {
        LocalStorage::set(key, value)
    }

    fn remove(&self, key: &str) -> bool {
        LocalStorage::delete(key)
    }
}

/// 面向 store 的 JSON 持久化句柄
///
/// 可自由克隆（内部 Rc），各 store 共享同一后端。
#[derive(Clone)]
pub struct StateStore {
    backend: Rc<dyn StateStorage>,
}

impl StateStore {
    /// 浏览器环境的默认后端
    pub fn browser() -> Self {
        Self::with_backend(Rc::new(BrowserStorage))
    }

    /// 注入自定义后端（测试用）
    pub fn with_backend(backend: Rc<dyn StateStorage>) -> Self {
        Self { backend }
    }

    /// 读取并反序列化一条持久化记录；损坏的记录按不存在处理
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.load(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn(&format!("discarding corrupt record `{}`: {}", key, err));
                None
            }
        }
    }

    /// 序列化并写入一条持久化记录（写穿步骤）
    ///
    /// 失败时仅警告：内存状态仍然正确，刷新后回到上次成功落盘的状态。
    pub fn store_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                if !self.backend.store(key, &raw) {
                    warn(&format!("failed to persist record `{}`", key));
                }
            }
            Err(err) => warn(&format!("failed to serialize record `{}`: {}", key, err)),
        }
    }

    /// 删除一条持久化记录
    pub fn remove(&self, key: &str) {
        self.backend.remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
fn warn(message: &str) {
    web_sys::console::warn_1(&format!("[storage] {}", message).into());
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(message: &str) {
    eprintln!("[storage] {}", message);
}
