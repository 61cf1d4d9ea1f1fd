use crate::components::icons::*;
use crate::store::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

/// 管理端骨架：左侧导航 + 内容区
#[component]
pub fn AdminShell(title: &'static str, children: Children) -> impl IntoView {
    let router = use_router();
    let session_ctx = use_session();

    let is_active = move |route: &AppRoute| router.current_route().get() == *route;
    let side_link = move |route: AppRoute, label: &'static str, icon: AnyView| {
        let active = {
            let route = route.clone();
            move || is_active(&route)
        };
        view! {
            <li>
                <a
                    class=move || if active() { "active" } else { "" }
                    on:click=move |_| router.navigate_to(route.clone())
                >
                    {icon}
                    {label}
                </a>
            </li>
        }
    };

    let on_logout = {
        let session_ctx = session_ctx.clone();
        move |_| {
            session_ctx.logout();
            // 登出后守卫会把管理端路由重定向回首页
            router.navigate_to(AppRoute::Home);
        }
    };

    view! {
        <div class="flex min-h-screen bg-base-200">
            <aside class="w-64 bg-base-100 shadow-xl flex flex-col">
                <div class="p-4 font-bold text-xl text-primary border-b border-base-200">
                    "E-Shop Admin"
                </div>
                <ul class="menu p-4 flex-1 gap-1">
                    {side_link(
                        AppRoute::AdminDashboard,
                        "Dashboard",
                        view! { <LayoutDashboard attr:class="h-4 w-4" /> }.into_any(),
                    )}
                    {side_link(
                        AppRoute::AdminProducts,
                        "Products",
                        view! { <Package attr:class="h-4 w-4" /> }.into_any(),
                    )}
                    {side_link(
                        AppRoute::AdminOrders,
                        "Orders",
                        view! { <ShoppingBag attr:class="h-4 w-4" /> }.into_any(),
                    )}
                    {side_link(
                        AppRoute::AdminUsers,
                        "Users",
                        view! { <Users attr:class="h-4 w-4" /> }.into_any(),
                    )}
                    {side_link(
                        AppRoute::AdminCategories,
                        "Categories",
                        view! { <Tag attr:class="h-4 w-4" /> }.into_any(),
                    )}
                </ul>
                <div class="p-4 border-t border-base-200 space-y-1">
                    <a
                        class="btn btn-ghost btn-sm w-full justify-start"
                        on:click=move |_| router.navigate_to(AppRoute::Home)
                    >
                        "Back to Store"
                    </a>
                    <a
                        class="btn btn-ghost btn-sm w-full justify-start text-error"
                        on:click=on_logout
                    >
                        <LogOut attr:class="h-4 w-4" />
                        "Logout"
                    </a>
                </div>
            </aside>
            <main class="flex-1 p-8 overflow-x-auto">
                <h1 class="text-2xl font-bold mb-6">{title}</h1>
                {children()}
            </main>
        </div>
    }
}
