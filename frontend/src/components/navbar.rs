use crate::components::icons::*;
use crate::store::cart::use_cart;
use crate::store::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

/// 顶部导航栏：品牌、入口链接、购物车角标、用户菜单
#[component]
pub fn Navbar() -> impl IntoView {
    let router = use_router();
    let session_ctx = use_session();
    let cart_ctx = use_cart();

    let session = session_ctx.session();
    let cart = cart_ctx.cart();
    let cart_count = move || cart.with(|c| c.item_count());

    let is_active = move |route: &AppRoute| router.current_route().get() == *route;
    let nav_link = move |route: AppRoute, label: &'static str| {
        let active = {
            let route = route.clone();
            move || is_active(&route)
        };
        view! {
            <li>
                <a
                    class=move || if active() { "active font-medium" } else { "font-medium" }
                    on:click=move |_| router.navigate_to(route.clone())
                >
                    {label}
                </a>
            </li>
        }
    };

    let on_logout = {
        let session_ctx = session_ctx.clone();
        move |_| {
            session_ctx.logout();
            router.navigate_to(AppRoute::Home);
        }
    };

    view! {
        <div class="navbar bg-base-100 shadow-md sticky top-0 z-40 px-4">
            <div class="flex-1 gap-2">
                <a
                    class="btn btn-ghost text-xl font-bold text-primary"
                    on:click=move |_| router.navigate_to(AppRoute::Home)
                >
                    <ShoppingBag attr:class="h-6 w-6" />
                    "E-Shop"
                </a>
                <ul class="menu menu-horizontal px-1 hidden lg:flex">
                    {nav_link(AppRoute::Home, "Home")}
                    {nav_link(AppRoute::Products, "Products")}
                </ul>
            </div>

            <div class="flex-none gap-2">
                // 购物车入口 + 件数角标
                <button
                    class="btn btn-ghost btn-circle indicator"
                    on:click=move |_| router.navigate_to(AppRoute::Cart)
                >
                    <ShoppingCart attr:class="h-6 w-6" />
                    <Show when=move || { cart_count() > 0 }>
                        <span class="badge badge-sm badge-error indicator-item text-white">
                            {cart_count}
                        </span>
                    </Show>
                </button>

                <Show
                    when=move || session.with(|s| s.is_authenticated())
                    fallback=move || view! {
                        <a
                            class="btn btn-ghost"
                            on:click=move |_| router.navigate_to(AppRoute::Login)
                        >
                            "Login"
                        </a>
                        <a
                            class="btn btn-primary"
                            on:click=move |_| router.navigate_to(AppRoute::Register)
                        >
                            "Sign Up"
                        </a>
                    }
                >
                    <div class="dropdown dropdown-end">
                        <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                            <div class="avatar placeholder">
                                <div class="bg-primary text-primary-content rounded-full w-8">
                                    <span>
                                        {move || {
                                            session.with(|s| {
                                                s.name.chars().next().unwrap_or('?').to_uppercase().to_string()
                                            })
                                        }}
                                    </span>
                                </div>
                            </div>
                            <span class="hidden md:inline font-medium">
                                {move || session.with(|s| s.name.clone())}
                            </span>
                        </div>
                        <ul
                            tabindex="0"
                            class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-56"
                        >
                            <li class="menu-title">
                                <span>{move || session.with(|s| s.email.clone())}</span>
                            </li>
                            <li>
                                <a on:click=move |_| router.navigate_to(AppRoute::Profile)>
                                    <User attr:class="h-4 w-4" /> "Profile"
                                </a>
                            </li>
                            <li>
                                <a on:click=move |_| router.navigate_to(AppRoute::Orders)>
                                    <Package attr:class="h-4 w-4" /> "My Orders"
                                </a>
                            </li>
                            <Show when=move || session.with(|s| s.is_admin())>
                                <li>
                                    <a on:click=move |_| router.navigate_to(AppRoute::AdminDashboard)>
                                        <LayoutDashboard attr:class="h-4 w-4" /> "Admin Dashboard"
                                    </a>
                                </li>
                            </Show>
                            <li>
                                <a class="text-error" on:click=on_logout.clone()>
                                    <LogOut attr:class="h-4 w-4" /> "Logout"
                                </a>
                            </li>
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}
