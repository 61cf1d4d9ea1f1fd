use super::layout::AdminShell;
use crate::api::ApiGateway;
use crate::components::icons::*;
use crate::components::notification::use_notify;
use crate::components::orders::status_badge_class;
use eshop_shared::AdminStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 管理端看板：汇总数字、订单状态分布、最近订单与低库存商品
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let notify = use_notify();

    let (stats, set_stats) = signal(AdminStats::default());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match ApiGateway::new().get_stats().await {
            Ok(data) => set_stats.set(data),
            Err(e) => notify.error(format!("Failed to load stats: {}", e)),
        }
        set_loading.set(false);
    });

    view! {
        <AdminShell title="Dashboard">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-20">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <div class="space-y-8">
                    // 汇总数字
                    <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                        <div class="stat">
                            <div class="stat-figure text-info">
                                <Users attr:class="h-8 w-8" />
                            </div>
                            <div class="stat-title">"Total Users"</div>
                            <div class="stat-value text-info">
                                {move || stats.with(|s| s.total_users)}
                            </div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-success">
                                <Package attr:class="h-8 w-8" />
                            </div>
                            <div class="stat-title">"Total Products"</div>
                            <div class="stat-value text-success">
                                {move || stats.with(|s| s.total_products)}
                            </div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-secondary">
                                <ShoppingBag attr:class="h-8 w-8" />
                            </div>
                            <div class="stat-title">"Total Orders"</div>
                            <div class="stat-value text-secondary">
                                {move || stats.with(|s| s.total_orders)}
                            </div>
                        </div>
                        <div class="stat">
                            <div class="stat-figure text-warning">
                                <DollarSign attr:class="h-8 w-8" />
                            </div>
                            <div class="stat-title">"Total Revenue"</div>
                            <div class="stat-value text-warning text-2xl">
                                {move || stats.with(|s| format!("${:.2}", s.total_revenue))}
                            </div>
                        </div>
                    </div>

                    // 订单状态分布
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <div class="card bg-base-100 shadow p-4">
                            <span class="text-sm opacity-60">"Pending"</span>
                            <span class="text-2xl font-bold text-warning">
                                {move || stats.with(|s| s.pending_orders)}
                            </span>
                        </div>
                        <div class="card bg-base-100 shadow p-4">
                            <span class="text-sm opacity-60">"Processing"</span>
                            <span class="text-2xl font-bold text-info">
                                {move || stats.with(|s| s.processing_orders)}
                            </span>
                        </div>
                        <div class="card bg-base-100 shadow p-4">
                            <span class="text-sm opacity-60">"Shipped"</span>
                            <span class="text-2xl font-bold text-secondary">
                                {move || stats.with(|s| s.shipped_orders)}
                            </span>
                        </div>
                        <div class="card bg-base-100 shadow p-4">
                            <span class="text-sm opacity-60">"Delivered"</span>
                            <span class="text-2xl font-bold text-success">
                                {move || stats.with(|s| s.delivered_orders)}
                            </span>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 xl:grid-cols-2 gap-8">
                        // 最近订单
                        <div class="card bg-base-100 shadow-md">
                            <div class="card-body p-0">
                                <h3 class="card-title p-6 pb-2">"Recent Orders"</h3>
                                <div class="overflow-x-auto">
                                    <table class="table table-zebra w-full">
                                        <thead>
                                            <tr>
                                                <th>"Order"</th>
                                                <th>"Total"</th>
                                                <th>"Status"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            <For
                                                each=move || stats.with(|s| s.recent_orders.clone())
                                                key=|o| o.id.clone()
                                                children=move |order| {
                                                    view! {
                                                        <tr>
                                                            <td class="font-mono text-sm">
                                                                {format!("#{}", order.short_id())}
                                                            </td>
                                                            <td>{format!("${:.2}", order.total_price)}</td>
                                                            <td>
                                                                <span class=status_badge_class(order.status)>
                                                                    {order.status.to_string()}
                                                                </span>
                                                            </td>
                                                        </tr>
                                                    }
                                                }
                                            />
                                        </tbody>
                                    </table>
                                </div>
                            </div>
                        </div>

                        // 低库存商品
                        <div class="card bg-base-100 shadow-md">
                            <div class="card-body">
                                <h3 class="card-title">"Low Stock Products"</h3>
                                <Show
                                    when=move || stats.with(|s| !s.low_stock_products.is_empty())
                                    fallback=|| view! {
                                        <p class="opacity-50 py-4">"All products well stocked"</p>
                                    }
                                >
                                    <div class="space-y-2">
                                        <For
                                            each=move || stats.with(|s| s.low_stock_products.clone())
                                            key=|p| p.id.clone()
                                            children=move |product| {
                                                view! {
                                                    <div class="flex justify-between items-center p-2 rounded hover:bg-base-200">
                                                        <span class="font-medium">{product.name.clone()}</span>
                                                        <span class="badge badge-warning">
                                                            {format!("{} left", product.stock)}
                                                        </span>
                                                    </div>
                                                }
                                            }
                                        />
                                    </div>
                                </Show>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>
        </AdminShell>
    }
}
