use crate::components::icons::*;
use crate::store::cart::use_cart;
use crate::store::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use eshop_shared::pricing::OrderPricing;
use leptos::prelude::*;

/// 购物车页：数量增减、移除、清空、订单金额预览
///
/// 数量按钮把目标数量夹取到 [0, 快照库存]；减到 0 即移除。
/// 超过快照库存的行只给出警告，不强行修正（下单时后端校验）。
#[component]
pub fn CartPage() -> impl IntoView {
    let router = use_router();
    let cart_ctx = use_cart();
    let session = use_session().session();

    let cart = cart_ctx.cart();
    let pricing = move || cart.with(|c| OrderPricing::from_subtotal(c.subtotal()));

    let on_checkout = move |_| {
        if session.with_untracked(|s| s.is_authenticated()) {
            router.navigate_to(AppRoute::Checkout);
        } else {
            router.navigate_to(AppRoute::Login);
        }
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <Show
                when=move || !cart.with(|c| c.is_empty())
                fallback=move || view! {
                    <div class="text-center py-20 space-y-4">
                        <h1 class="text-3xl font-bold">"Your Cart is Empty"</h1>
                        <p class="opacity-70">"Add some products to get started!"</p>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| router.navigate_to(AppRoute::Products)
                        >
                            "Continue Shopping"
                        </button>
                    </div>
                }
            >
                <h1 class="text-3xl font-bold mb-8">"Shopping Cart"</h1>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    // 行项目
                    <div class="lg:col-span-2">
                        <div class="card bg-base-100 shadow-md divide-y divide-base-200">
                            <For
                                each=move || cart.get().lines
                                key=|line| (line.product_id.clone(), line.quantity)
                                children={
                                    let cart_ctx = cart_ctx.clone();
                                    move |line| {
                                        let id = line.product_id.clone();
                                        let stock = line.stock;
                                        let quantity = line.quantity;
                                        let dec_ctx = cart_ctx.clone();
                                        let inc_ctx = cart_ctx.clone();
                                        let del_ctx = cart_ctx.clone();
                                        let dec_id = id.clone();
                                        let inc_id = id.clone();
                                        let del_id = id.clone();
                                        let detail = AppRoute::ProductDetail(id.clone());
                                        let exceeds = line.exceeds_stock();
                                        view! {
                                            <div class="flex items-center gap-4 p-5">
                                                <img
                                                    src=line.image.clone()
                                                    alt=line.name.clone()
                                                    class="w-20 h-20 object-cover rounded"
                                                />
                                                <div class="flex-1">
                                                    <a
                                                        class="font-semibold hover:text-primary cursor-pointer"
                                                        on:click=move |_| router.navigate_to(detail.clone())
                                                    >
                                                        {line.name.clone()}
                                                    </a>
                                                    <p class="text-sm opacity-70">
                                                        {format!("${:.2}", line.price)}
                                                    </p>
                                                    <Show when=move || exceeds>
                                                        <p class="text-warning text-xs">
                                                            {format!("Only {} in stock when added", stock)}
                                                        </p>
                                                    </Show>
                                                </div>
                                                <div class="join">
                                                    <button
                                                        class="btn btn-sm join-item"
                                                        on:click=move |_| {
                                                            dec_ctx.update_quantity(
                                                                &dec_id,
                                                                quantity.saturating_sub(1),
                                                            );
                                                        }
                                                    >
                                                        <Minus attr:class="h-3 w-3" />
                                                    </button>
                                                    <span class="btn btn-sm join-item no-animation w-12">
                                                        {quantity}
                                                    </span>
                                                    <button
                                                        class="btn btn-sm join-item"
                                                        disabled=move || quantity >= stock
                                                        on:click=move |_| {
                                                            inc_ctx.update_quantity(&inc_id, quantity + 1);
                                                        }
                                                    >
                                                        <Plus attr:class="h-3 w-3" />
                                                    </button>
                                                </div>
                                                <div class="font-semibold w-20 text-right">
                                                    {format!("${:.2}", line.line_total())}
                                                </div>
                                                <button
                                                    class="btn btn-ghost btn-sm text-error"
                                                    on:click=move |_| del_ctx.remove_from_cart(&del_id)
                                                >
                                                    <Trash2 attr:class="h-4 w-4" />
                                                </button>
                                            </div>
                                        }
                                    }
                                }
                            />
                        </div>
                        <button
                            class="btn btn-ghost text-error mt-4"
                            on:click={
                                let cart_ctx = cart_ctx.clone();
                                move |_| cart_ctx.clear_cart()
                            }
                        >
                            "Clear Cart"
                        </button>
                    </div>

                    // 订单金额预览
                    <div class="lg:col-span-1">
                        <div class="card bg-base-100 shadow-md p-6 sticky top-24 space-y-3">
                            <h2 class="text-xl font-bold">"Order Summary"</h2>
                            <div class="flex justify-between">
                                <span class="opacity-70">"Subtotal"</span>
                                <span class="font-semibold">
                                    {move || format!("${:.2}", pricing().subtotal)}
                                </span>
                            </div>
                            <div class="flex justify-between">
                                <span class="opacity-70">"Shipping"</span>
                                <span class="font-semibold">
                                    {move || format!("${:.2}", pricing().shipping)}
                                </span>
                            </div>
                            <div class="flex justify-between">
                                <span class="opacity-70">"Tax (10%)"</span>
                                <span class="font-semibold">
                                    {move || format!("${:.2}", pricing().tax)}
                                </span>
                            </div>
                            <div class="divider my-1"></div>
                            <div class="flex justify-between text-lg font-bold">
                                <span>"Total"</span>
                                <span class="text-primary">
                                    {move || format!("${:.2}", pricing().total)}
                                </span>
                            </div>
                            <Show when=move || pricing().amount_to_free_shipping().is_some()>
                                <p class="text-sm opacity-70">
                                    {move || {
                                        pricing()
                                            .amount_to_free_shipping()
                                            .map(|gap| {
                                                format!("Add ${:.2} more for free shipping!", gap)
                                            })
                                            .unwrap_or_default()
                                    }}
                                </p>
                            </Show>
                            <button class="btn btn-primary w-full" on:click=on_checkout.clone()>
                                "Proceed to Checkout"
                            </button>
                            <button
                                class="btn btn-ghost btn-sm w-full"
                                on:click=move |_| router.navigate_to(AppRoute::Products)
                            >
                                "Continue Shopping"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
