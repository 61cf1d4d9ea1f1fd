use crate::api::ApiGateway;
use crate::components::notification::use_notify;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use eshop_shared::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 订单状态对应的徽章样式
pub(crate) fn status_badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge-warning",
        OrderStatus::Processing => "badge badge-info",
        OrderStatus::Shipped => "badge badge-secondary",
        OrderStatus::Delivered => "badge badge-success",
        OrderStatus::Cancelled => "badge badge-error",
    }
}

/// 历史订单列表
#[component]
pub fn OrdersPage() -> impl IntoView {
    let router = use_router();
    let notify = use_notify();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match ApiGateway::new().get_my_orders().await {
            Ok(list) => set_orders.set(list),
            Err(e) => notify.error(format!("Failed to load orders: {}", e)),
        }
        set_loading.set(false);
    });

    view! {
        <div class="max-w-5xl mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-8">"My Orders"</h1>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-20">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <Show
                    when=move || !orders.with(|o| o.is_empty())
                    fallback=move || view! {
                        <div class="text-center py-16 space-y-4">
                            <p class="opacity-60 text-lg">"No orders yet"</p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| router.navigate_to(AppRoute::Products)
                            >
                                "Start Shopping"
                            </button>
                        </div>
                    }
                >
                    <div class="space-y-4">
                        <For
                            each=move || orders.get()
                            key=|o| o.id.clone()
                            children=move |order| {
                                let detail = AppRoute::OrderDetail(order.id.clone());
                                let placed = order
                                    .created_at
                                    .map(|d| d.format("Placed on %b %d, %Y").to_string())
                                    .unwrap_or_default();
                                let item_summary: Vec<String> = order
                                    .order_items
                                    .iter()
                                    .take(3)
                                    .map(|i| format!("{} x {}", i.name, i.quantity))
                                    .collect();
                                let more = order.order_items.len().saturating_sub(3);
                                view! {
                                    <div class="card bg-base-100 shadow-md p-6">
                                        <div class="flex justify-between items-start">
                                            <div>
                                                <h3 class="font-semibold text-lg">
                                                    {format!("Order #{}", order.short_id())}
                                                </h3>
                                                <p class="text-sm opacity-60">{placed}</p>
                                            </div>
                                            <span class=status_badge_class(order.status)>
                                                {order.status.to_string()}
                                            </span>
                                        </div>
                                        <div class="divider my-2"></div>
                                        <div class="flex justify-between items-end">
                                            <div class="text-sm opacity-70 space-y-1">
                                                {item_summary
                                                    .into_iter()
                                                    .map(|s| view! { <p>{s}</p> })
                                                    .collect_view()}
                                                <Show when=move || { more > 0 }>
                                                    <p class="italic">{format!("+ {} more", more)}</p>
                                                </Show>
                                            </div>
                                            <div class="text-right">
                                                <p class="text-lg font-bold text-primary">
                                                    {format!("${:.2}", order.total_price)}
                                                </p>
                                                <button
                                                    class="btn btn-sm btn-outline mt-2"
                                                    on:click=move |_| router.navigate_to(detail.clone())
                                                >
                                                    "View Details"
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
