use crate::api::ApiGateway;
use crate::components::icons::*;
use crate::components::notification::use_notify;
use crate::store::cart::use_cart;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use eshop_shared::PaymentMethod;
use eshop_shared::pricing::OrderPricing;
use leptos::prelude::*;
use leptos::task::spawn_local;

mod form_state;

use form_state::FormState;

/// 结算页：收货信息 + 支付方式 + 订单预览
///
/// 只有后端确认下单成功才清空购物车；失败时购物车与表单
/// 原样保留，用户修正后可直接重试。
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let router = use_router();
    let cart_ctx = use_cart();
    let notify = use_notify();

    let cart = cart_ctx.cart();
    let form = FormState::new();
    let (submitting, set_submitting) = signal(false);

    // 空购物车没有可结算的内容，回到购物车页
    Effect::new(move |_| {
        if cart.with(|c| c.is_empty()) && !submitting.get_untracked() {
            router.navigate_to(AppRoute::Cart);
        }
    });

    let pricing = move || cart.with(|c| OrderPricing::from_subtotal(c.subtotal()));

    let submit_ctx = cart_ctx.clone();
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if !form.is_complete() {
            notify.error("Please fill in all shipping fields");
            return;
        }
        let snapshot = submit_ctx.snapshot();
        if snapshot.is_empty() {
            return;
        }
        let request = form.to_request(&snapshot);
        let cart_ctx = submit_ctx.clone();
        set_submitting.set(true);
        spawn_local(async move {
            match ApiGateway::new().create_order(&request).await {
                Ok(order) => {
                    notify.success("Order placed successfully!");
                    // 确认成功后才清空
                    cart_ctx.clear_cart();
                    router.navigate_to(AppRoute::OrderDetail(order.id));
                }
                Err(e) => {
                    // 购物车与表单保持原样，可直接重试
                    notify.error(format!("Failed to place order: {}", e));
                    set_submitting.set(false);
                }
            }
        });
    };

    let text_field = move |label: &'static str, value: RwSignal<String>, wide: bool| {
        view! {
            <div class=if wide { "form-control md:col-span-2" } else { "form-control" }>
                <label class="label"><span class="label-text">{label}</span></label>
                <input
                    type="text"
                    class="input input-bordered"
                    required
                    prop:value=value
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-8">"Checkout"</h1>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2">
                    <form class="card bg-base-100 shadow-md p-6" on:submit=on_submit>
                        <h2 class="text-xl font-bold mb-4">"Shipping Information"</h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {text_field("Street Address", form.street, true)}
                            {text_field("City", form.city, false)}
                            {text_field("State", form.state, false)}
                            {text_field("Zip Code", form.zip_code, false)}
                            {text_field("Country", form.country, false)}
                            {text_field("Phone Number", form.phone, true)}
                        </div>

                        <h2 class="text-xl font-bold mb-4 mt-8">"Payment Method"</h2>
                        <div class="space-y-2">
                            <For
                                each=|| PaymentMethod::ALL
                                key=|m| m.as_str()
                                children=move |method| {
                                    view! {
                                        <label class="flex items-center gap-3 p-3 border border-base-300 rounded-lg cursor-pointer hover:bg-base-200">
                                            <input
                                                type="radio"
                                                name="payment-method"
                                                class="radio radio-primary radio-sm"
                                                checked=move || form.payment_method.get() == method
                                                on:change=move |_| form.payment_method.set(method)
                                            />
                                            <span>{method.as_str()}</span>
                                        </label>
                                    }
                                }
                            />
                        </div>

                        <div class="alert alert-info mt-6">
                            <Mail attr:class="h-5 w-5" />
                            <span>
                                "You'll receive order confirmation and status updates via email"
                            </span>
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary w-full mt-6"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() {
                                view! {
                                    <span class="loading loading-spinner"></span>
                                    " Processing..."
                                }
                                .into_any()
                            } else {
                                "Place Order".into_any()
                            }}
                        </button>
                    </form>
                </div>

                // 订单预览
                <div class="lg:col-span-1">
                    <div class="card bg-base-100 shadow-md p-6 sticky top-24 space-y-3">
                        <h2 class="text-xl font-bold">"Order Summary"</h2>
                        <div class="space-y-2">
                            <For
                                each=move || cart.get().lines
                                key=|line| line.product_id.clone()
                                children=move |line| {
                                    view! {
                                        <div class="flex justify-between text-sm">
                                            <span class="opacity-70">
                                                {format!("{} x {}", line.name, line.quantity)}
                                            </span>
                                            <span class="font-semibold">
                                                {format!("${:.2}", line.line_total())}
                                            </span>
                                        </div>
                                    }
                                }
                            />
                        </div>
                        <div class="divider my-1"></div>
                        <div class="flex justify-between">
                            <span class="opacity-70">"Subtotal"</span>
                            <span class="font-semibold">{move || format!("${:.2}", pricing().subtotal)}</span>
                        </div>
                        <div class="flex justify-between">
                            <span class="opacity-70">"Shipping"</span>
                            <span class="font-semibold">{move || format!("${:.2}", pricing().shipping)}</span>
                        </div>
                        <div class="flex justify-between">
                            <span class="opacity-70">"Tax (10%)"</span>
                            <span class="font-semibold">{move || format!("${:.2}", pricing().tax)}</span>
                        </div>
                        <div class="flex justify-between text-lg font-bold">
                            <span>"Total"</span>
                            <span class="text-primary">{move || format!("${:.2}", pricing().total)}</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
