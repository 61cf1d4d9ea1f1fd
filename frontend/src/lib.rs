//! E-Shop 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型，含守卫判定）
//! - `web::router`: 路由服务（核心引擎）
//! - `store::cart` / `store::session`: 购物车与会话状态管理
//! - `api`: REST 网关（统一注入 Bearer 令牌）
//! - `components`: UI 组件层

mod api;
mod components {
    pub mod admin;
    pub mod cart;
    pub mod checkout;
    pub mod footer;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod navbar;
    pub mod notification;
    pub mod order_detail;
    pub mod orders;
    mod product_card;
    pub mod product_detail;
    pub mod products;
    pub mod profile;
    pub mod register;
}
mod store {
    pub mod cart;
    pub mod persist;
    pub mod session;
}

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装（fetch / localStorage），
// 不引入 gloo-* 系列 crate，以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::{HttpClient, HttpError, HttpRequestBuilder};
    pub use storage::LocalStorage;
}

use components::admin::{
    AdminCategoriesPage, AdminDashboardPage, AdminOrdersPage, AdminProductsPage, AdminUsersPage,
};
use components::cart::CartPage;
use components::checkout::CheckoutPage;
use components::footer::Footer;
use components::home::HomePage;
use components::login::LoginPage;
use components::navbar::Navbar;
use components::notification::{NotificationContext, Toaster};
use components::order_detail::OrderDetailPage;
use components::orders::OrdersPage;
use components::product_detail::ProductDetailPage;
use components::products::ProductsPage;
use components::profile::ProfilePage;
use components::register::RegisterPage;
use store::cart::CartContext;
use store::persist::StateStore;
use store::session::SessionContext;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet, use_router};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Products => view! { <ProductsPage /> }.into_any(),
        AppRoute::ProductDetail(id) => view! { <ProductDetailPage id=id /> }.into_any(),
        AppRoute::Cart => view! { <CartPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Checkout => view! { <CheckoutPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::Orders => view! { <OrdersPage /> }.into_any(),
        AppRoute::OrderDetail(id) => view! { <OrderDetailPage id=id /> }.into_any(),
        AppRoute::AdminDashboard => view! { <AdminDashboardPage /> }.into_any(),
        AppRoute::AdminProducts => view! { <AdminProductsPage /> }.into_any(),
        AppRoute::AdminOrders => view! { <AdminOrdersPage /> }.into_any(),
        AppRoute::AdminUsers => view! { <AdminUsersPage /> }.into_any(),
        AppRoute::AdminCategories => view! { <AdminCategoriesPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// 应用骨架：商城区域带导航栏/页脚，管理端由 AdminShell 自带侧栏
#[component]
fn Shell() -> impl IntoView {
    let router = use_router();
    let in_admin_area = move || router.current_route().get().is_admin_area();

    view! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Show when=move || !in_admin_area()>
                <Navbar />
            </Show>
            <main class="flex-grow">
                <RouterOutlet matcher=route_matcher />
            </main>
            <Show when=move || !in_admin_area()>
                <Footer />
            </Show>
            <Toaster />
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 构建持久化句柄与两个 store 上下文（显式构造，而非全局单例）
    let storage = StateStore::browser();
    let session_ctx = SessionContext::new(storage.clone());
    let cart_ctx = CartContext::new(storage);
    provide_context(session_ctx.clone());
    provide_context(cart_ctx);
    provide_context(NotificationContext::new());

    // 2. 获取认证/管理员信号，注入路由服务（解耦！）
    let is_authenticated = session_ctx.is_authenticated_signal();
    let is_admin = session_ctx.is_admin_signal();

    view! {
        // 3. 路由器组件：注入会话信号实现守卫
        <Router is_authenticated=is_authenticated is_admin=is_admin>
            <Shell />
        </Router>
    }
}
