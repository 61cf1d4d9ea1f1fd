use crate::api::ApiGateway;
use crate::components::icons::*;
use crate::components::notification::use_notify;
use crate::components::orders::status_badge_class;
use eshop_shared::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 订单详情：物流进度、收货信息、行项目与价格
#[component]
pub fn OrderDetailPage(id: String) -> impl IntoView {
    let notify = use_notify();

    let (order, set_order) = signal(Option::<Order>::None);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match ApiGateway::new().get_order(&id).await {
            Ok(found) => set_order.set(Some(found)),
            Err(e) => notify.error(format!("Failed to load order: {}", e)),
        }
        set_loading.set(false);
    });

    view! {
        <div class="max-w-5xl mx-auto px-4 py-8">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-20">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                {move || {
                    order
                        .get()
                        .map(|o| {
                            let status = o.status;
                            let cancelled = status == OrderStatus::Cancelled;
                            let step = |reached: bool| {
                                if reached && !cancelled { "text-success" } else { "text-base-300" }
                            };
                            let bar = |reached: bool| {
                                if reached && !cancelled {
                                    "flex-1 h-1 bg-success"
                                } else {
                                    "flex-1 h-1 bg-base-300"
                                }
                            };
                            let placed = o
                                .created_at
                                .map(|d| d.format("%b %d, %Y").to_string())
                                .unwrap_or_default();
                            view! {
                                <div class="space-y-6">
                                    <div class="flex justify-between items-center">
                                        <div>
                                            <h1 class="text-3xl font-bold">
                                                {format!("Order #{}", o.short_id())}
                                            </h1>
                                            <p class="opacity-60">{placed}</p>
                                        </div>
                                        <span class=status_badge_class(status)>
                                            {status.to_string()}
                                        </span>
                                    </div>

                                    // 物流进度
                                    <div class="card bg-base-100 shadow-md p-6">
                                        <div class="flex items-center gap-2">
                                            <div class="flex flex-col items-center gap-1">
                                                <Package attr:class=format!("h-7 w-7 {}", step(true)) />
                                                <span class="text-xs">"Placed"</span>
                                            </div>
                                            <div class=bar(status.in_progress_or_later())></div>
                                            <div class="flex flex-col items-center gap-1">
                                                <RefreshCw attr:class=format!("h-7 w-7 {}", step(status.in_progress_or_later())) />
                                                <span class="text-xs">"Processing"</span>
                                            </div>
                                            <div class=bar(status.shipped_or_later())></div>
                                            <div class="flex flex-col items-center gap-1">
                                                <Truck attr:class=format!("h-7 w-7 {}", step(status.shipped_or_later())) />
                                                <span class="text-xs">"Shipped"</span>
                                            </div>
                                            <div class=bar(status == OrderStatus::Delivered)></div>
                                            <div class="flex flex-col items-center gap-1">
                                                <CheckCircle attr:class=format!("h-7 w-7 {}", step(status == OrderStatus::Delivered)) />
                                                <span class="text-xs">"Delivered"</span>
                                            </div>
                                        </div>
                                        <Show when=move || cancelled>
                                            <p class="text-error text-sm mt-4">"This order was cancelled."</p>
                                        </Show>
                                    </div>

                                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                                        // 行项目
                                        <div class="lg:col-span-2 card bg-base-100 shadow-md p-6">
                                            <h2 class="text-xl font-bold mb-4">"Items"</h2>
                                            <div class="divide-y divide-base-200">
                                                {o.order_items
                                                    .iter()
                                                    .map(|item| {
                                                        view! {
                                                            <div class="flex items-center gap-4 py-3">
                                                                <img
                                                                    src=item.image.clone()
                                                                    alt=item.name.clone()
                                                                    class="w-16 h-16 object-cover rounded"
                                                                />
                                                                <div class="flex-1">
                                                                    <p class="font-semibold">{item.name.clone()}</p>
                                                                    <p class="text-sm opacity-60">
                                                                        {format!("${:.2} x {}", item.price, item.quantity)}
                                                                    </p>
                                                                </div>
                                                                <p class="font-bold">
                                                                    {format!("${:.2}", item.line_total())}
                                                                </p>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>

                                        // 收货信息与金额
                                        <div class="space-y-6">
                                            <div class="card bg-base-100 shadow-md p-6">
                                                <h2 class="text-lg font-bold mb-2">"Shipping Address"</h2>
                                                <p class="text-sm opacity-80">{o.shipping_address.street.clone()}</p>
                                                <p class="text-sm opacity-80">
                                                    {format!(
                                                        "{}, {} {}",
                                                        o.shipping_address.city,
                                                        o.shipping_address.state,
                                                        o.shipping_address.zip_code,
                                                    )}
                                                </p>
                                                <p class="text-sm opacity-80">{o.shipping_address.country.clone()}</p>
                                                <p class="text-sm opacity-80">{o.shipping_address.phone.clone()}</p>
                                            </div>
                                            <div class="card bg-base-100 shadow-md p-6 space-y-2">
                                                <h2 class="text-lg font-bold">"Payment"</h2>
                                                <p class="text-sm opacity-80">{o.payment_method.to_string()}</p>
                                                <div class="divider my-1"></div>
                                                <div class="flex justify-between text-sm">
                                                    <span class="opacity-70">"Items"</span>
                                                    <span>{format!("${:.2}", o.items_price)}</span>
                                                </div>
                                                <div class="flex justify-between text-sm">
                                                    <span class="opacity-70">"Shipping"</span>
                                                    <span>{format!("${:.2}", o.shipping_price)}</span>
                                                </div>
                                                <div class="flex justify-between text-sm">
                                                    <span class="opacity-70">"Tax"</span>
                                                    <span>{format!("${:.2}", o.tax_price)}</span>
                                                </div>
                                                <div class="flex justify-between font-bold">
                                                    <span>"Total"</span>
                                                    <span class="text-primary">
                                                        {format!("${:.2}", o.total_price)}
                                                    </span>
                                                </div>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
