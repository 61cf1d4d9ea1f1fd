use super::layout::AdminShell;
use crate::api::ApiGateway;
use crate::components::notification::use_notify;
use crate::components::orders::status_badge_class;
use eshop_shared::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 管理端订单管理：全量列表 + 状态流转
#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let notify = use_notify();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (reload_tick, set_reload_tick) = signal(0u32);

    Effect::new(move |_| {
        reload_tick.track();
        spawn_local(async move {
            match ApiGateway::new().get_all_orders().await {
                Ok(list) => set_orders.set(list),
                Err(e) => notify.error(format!("Failed to load orders: {}", e)),
            }
        });
    });

    let on_status_change = move |id: String, status: OrderStatus| {
        spawn_local(async move {
            match ApiGateway::new().update_order_status(&id, status).await {
                Ok(_) => {
                    notify.success("Order status updated!");
                    set_reload_tick.update(|t| *t += 1);
                }
                Err(e) => notify.error(format!("Update failed: {}", e)),
            }
        });
    };

    view! {
        <AdminShell title="Orders">
            <div class="card bg-base-100 shadow-md overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Date"</th>
                            <th>"Items"</th>
                            <th>"Total"</th>
                            <th>"Status"</th>
                            <th>"Update"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || orders.get()
                            key=|o| (o.id.clone(), o.status)
                            children=move |order| {
                                let id = order.id.clone();
                                let current = order.status;
                                let placed = order
                                    .created_at
                                    .map(|d| d.format("%b %d, %Y").to_string())
                                    .unwrap_or_default();
                                view! {
                                    <tr>
                                        <td class="font-mono text-sm">{format!("#{}", order.short_id())}</td>
                                        <td>{placed}</td>
                                        <td>{order.order_items.len()}</td>
                                        <td>{format!("${:.2}", order.total_price)}</td>
                                        <td>
                                            <span class=status_badge_class(current)>
                                                {current.to_string()}
                                            </span>
                                        </td>
                                        <td>
                                            <select
                                                class="select select-bordered select-sm"
                                                on:change=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    if let Some(next) = OrderStatus::ALL
                                                        .into_iter()
                                                        .find(|s| s.as_str() == value)
                                                    {
                                                        if next != current {
                                                            on_status_change(id.clone(), next);
                                                        }
                                                    }
                                                }
                                            >
                                                {OrderStatus::ALL
                                                    .into_iter()
                                                    .map(|status| {
                                                        view! {
                                                            <option
                                                                value=status.as_str()
                                                                selected=status == current
                                                            >
                                                                {status.as_str()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </AdminShell>
    }
}
