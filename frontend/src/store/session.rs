//! 会话状态管理模块
//!
//! 持有当前已认证主体（用户信息 + 不透明 Bearer 令牌），
//! 向路由守卫暴露认证/管理员信号。会话与路由系统解耦：
//! 路由服务只消费注入的信号。
//!
//! 每次变更写穿到持久化记录；REST 网关对外发请求时
//! 直接读取该记录取令牌，不依赖任何 UI 状态。

use eshop_shared::{AuthResponse, Role, SESSION_STORAGE_KEY, UserInfo};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::persist::StateStore;

/// 当前已认证主体；空令牌即未认证
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// 不透明 Bearer 凭证；非空即视为已认证
    pub token: String,
}

impl Session {
    /// 认证判定：令牌非空
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// 角色仅在已认证时有意义
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role == Role::Admin
    }

    /// 登录/注册成功：整个会话被返回的主体覆盖
    pub fn from_auth(auth: AuthResponse) -> Self {
        Self {
            user_id: auth.id,
            name: auth.name,
            email: auth.email,
            role: auth.role,
            token: auth.token,
        }
    }

    /// 资料更新：合并返回的展示字段，令牌保持不动
    pub fn apply_profile(&mut self, profile: &UserInfo) {
        self.name = profile.name.clone();
        self.email = profile.email.clone();
        self.role = profile.role;
    }
}

/// 会话上下文
///
/// 登录态的唯一持有者；变更后写穿持久化，启动时回灌。
#[derive(Clone)]
pub struct SessionContext {
    session: RwSignal<Session>,
    storage: StateStore,
}

impl SessionContext {
    /// 创建上下文并从持久化记录回灌
    pub fn new(storage: StateStore) -> Self {
        let session: Session = storage.load_json(SESSION_STORAGE_KEY).unwrap_or_default();
        Self {
            session: RwSignal::new(session),
            storage,
        }
    }

    /// 响应式读取会话
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// 登录/注册成功后建立会话（失败时调用方不应触碰会话）
    pub fn establish(&self, auth: AuthResponse) {
        self.replace(Session::from_auth(auth));
    }

    /// 登出：回到空会话。纯本地操作，总是成功。
    pub fn logout(&self) {
        self.replace(Session::default());
    }

    /// 合并资料更新（令牌不变）
    pub fn update_user(&self, profile: &UserInfo) {
        self.session.update(|session| session.apply_profile(profile));
        self.persist();
    }

    /// 认证状态信号（注入路由服务用）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Session::is_authenticated))
    }

    /// 管理员状态信号（注入路由服务用）
    pub fn is_admin_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Session::is_admin))
    }

    fn replace(&self, next: Session) {
        self.session.set(next);
        self.persist();
    }

    fn persist(&self) {
        self.session
            .with_untracked(|session| self.storage.store_json(SESSION_STORAGE_KEY, session));
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

#[cfg(test)]
mod tests;
