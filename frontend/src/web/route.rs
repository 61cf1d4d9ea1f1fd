//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、每条路由的守卫属性，
//! 以及"给定会话状态，本次导航应当放行还是重定向"的纯函数判定。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 商品列表
    Products,
    /// 商品详情
    ProductDetail(String),
    /// 购物车（无需登录，购物车独立于会话存在）
    Cart,
    /// 登录页面
    Login,
    /// 注册页面
    Register,
    /// 结算（需要认证）
    Checkout,
    /// 个人资料（需要认证）
    Profile,
    /// 我的订单（需要认证）
    Orders,
    /// 订单详情（需要认证）
    OrderDetail(String),
    /// 管理端看板（需要管理员）
    AdminDashboard,
    /// 管理端商品管理（需要管理员）
    AdminProducts,
    /// 管理端订单管理（需要管理员）
    AdminOrders,
    /// 管理端用户管理（需要管理员）
    AdminUsers,
    /// 管理端分类管理（需要管理员）
    AdminCategories,
    /// 页面未找到
    NotFound,
}

/// 守卫判定结果
///
/// 由 [`AppRoute::check_access`] 产生，路由服务据此放行或重定向。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// 放行
    Admit,
    /// 未认证访问受保护路由：重定向到登录页
    RedirectToLogin,
    /// 非管理员访问管理端路由：重定向到首页
    RedirectToHome,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/" => Self::Home,
            "/products" => Self::Products,
            "/cart" => Self::Cart,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/checkout" => Self::Checkout,
            "/profile" => Self::Profile,
            "/orders" => Self::Orders,
            "/admin/dashboard" => Self::AdminDashboard,
            "/admin/products" => Self::AdminProducts,
            "/admin/orders" => Self::AdminOrders,
            "/admin/users" => Self::AdminUsers,
            "/admin/categories" => Self::AdminCategories,
            _ => {
                if let Some(id) = trimmed.strip_prefix("/products/") {
                    if !id.is_empty() && !id.contains('/') {
                        return Self::ProductDetail(id.to_string());
                    }
                }
                if let Some(id) = trimmed.strip_prefix("/orders/") {
                    if !id.is_empty() && !id.contains('/') {
                        return Self::OrderDetail(id.to_string());
                    }
                }
                Self::NotFound
            }
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Products => "/products".to_string(),
            Self::ProductDetail(id) => format!("/products/{}", id),
            Self::Cart => "/cart".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Checkout => "/checkout".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::Orders => "/orders".to_string(),
            Self::OrderDetail(id) => format!("/orders/{}", id),
            Self::AdminDashboard => "/admin/dashboard".to_string(),
            Self::AdminProducts => "/admin/products".to_string(),
            Self::AdminOrders => "/admin/orders".to_string(),
            Self::AdminUsers => "/admin/users".to_string(),
            Self::AdminCategories => "/admin/categories".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Checkout | Self::Profile | Self::Orders | Self::OrderDetail(_)
        ) || self.requires_admin()
    }

    /// 定义该路由是否仅限管理员
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Self::AdminDashboard
                | Self::AdminProducts
                | Self::AdminOrders
                | Self::AdminUsers
                | Self::AdminCategories
        )
    }

    /// 管理端路由不渲染商城的导航栏与页脚
    pub fn is_admin_area(&self) -> bool {
        self.requires_admin()
    }

    /// 定义已认证用户是否应该离开此路由（登录/注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取权限不足（非管理员）时的重定向目标
    pub fn admin_failure_redirect() -> Self {
        Self::Home
    }

    /// 获取认证成功后离开登录/注册页的目标
    pub fn auth_success_redirect() -> Self {
        Self::Home
    }

    /// 守卫判定：纯函数，不触碰任何状态
    ///
    /// 管理端路由先于普通保护路由判定——未认证用户访问管理端
    /// 同样回到首页，与未认证访问普通保护路由回登录页区分开。
    pub fn check_access(&self, is_authenticated: bool, is_admin: bool) -> RouteDecision {
        if self.requires_admin() {
            if is_authenticated && is_admin {
                RouteDecision::Admit
            } else {
                RouteDecision::RedirectToHome
            }
        } else if self.requires_auth() && !is_authenticated {
            RouteDecision::RedirectToLogin
        } else {
            RouteDecision::Admit
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/products"), AppRoute::Products);
        assert_eq!(AppRoute::from_path("/cart"), AppRoute::Cart);
        assert_eq!(
            AppRoute::from_path("/admin/dashboard"),
            AppRoute::AdminDashboard
        );
        assert_eq!(AppRoute::from_path("/no/such/page"), AppRoute::NotFound);
    }

    #[test]
    fn parses_dynamic_segments() {
        assert_eq!(
            AppRoute::from_path("/products/65f2a1b9"),
            AppRoute::ProductDetail("65f2a1b9".into())
        );
        assert_eq!(
            AppRoute::from_path("/orders/abc123/"),
            AppRoute::OrderDetail("abc123".into())
        );
        // 空 id 不是合法详情页
        assert_eq!(AppRoute::from_path("/products/"), AppRoute::Products);
    }

    #[test]
    fn path_round_trips() {
        for route in [
            AppRoute::Home,
            AppRoute::Products,
            AppRoute::ProductDetail("p1".into()),
            AppRoute::Cart,
            AppRoute::Checkout,
            AppRoute::Orders,
            AppRoute::OrderDetail("o1".into()),
            AppRoute::AdminUsers,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn unauthenticated_protected_route_redirects_to_login() {
        for route in [
            AppRoute::Checkout,
            AppRoute::Profile,
            AppRoute::Orders,
            AppRoute::OrderDetail("o1".into()),
        ] {
            assert_eq!(route.check_access(false, false), RouteDecision::RedirectToLogin);
        }
    }

    #[test]
    fn non_admin_on_admin_route_redirects_to_home() {
        assert_eq!(
            AppRoute::AdminDashboard.check_access(true, false),
            RouteDecision::RedirectToHome
        );
        // 未认证访问管理端同样回首页
        assert_eq!(
            AppRoute::AdminUsers.check_access(false, false),
            RouteDecision::RedirectToHome
        );
    }

    #[test]
    fn admin_is_admitted_to_admin_routes() {
        for route in [
            AppRoute::AdminDashboard,
            AppRoute::AdminProducts,
            AppRoute::AdminOrders,
            AppRoute::AdminUsers,
            AppRoute::AdminCategories,
        ] {
            assert_eq!(route.check_access(true, true), RouteDecision::Admit);
        }
    }

    #[test]
    fn public_routes_admit_anyone() {
        for route in [
            AppRoute::Home,
            AppRoute::Products,
            AppRoute::ProductDetail("p1".into()),
            AppRoute::Cart,
            AppRoute::Login,
        ] {
            assert_eq!(route.check_access(false, false), RouteDecision::Admit);
        }
    }

    #[test]
    fn authenticated_user_is_admitted_to_protected_routes() {
        assert_eq!(
            AppRoute::Checkout.check_access(true, false),
            RouteDecision::Admit
        );
        assert_eq!(
            AppRoute::Orders.check_access(true, false),
            RouteDecision::Admit
        );
    }
}
