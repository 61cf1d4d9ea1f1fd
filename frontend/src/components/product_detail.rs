use crate::api::ApiGateway;
use crate::components::icons::*;
use crate::components::notification::use_notify;
use crate::store::cart::use_cart;
use crate::store::session::use_session;
use eshop_shared::{CreateReviewRequest, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 商品详情：加购（数量由界面夹取到 [1, stock]）、评价列表与提交
#[component]
pub fn ProductDetailPage(id: String) -> impl IntoView {
    let cart = use_cart();
    let notify = use_notify();
    let session = use_session().session();

    let (product, set_product) = signal(Option::<Product>::None);
    let (loading, set_loading) = signal(true);
    let (quantity, set_quantity) = signal(1u32);
    let (rating, set_rating) = signal(5u8);
    let (comment, set_comment) = signal(String::new());
    let (reload_tick, set_reload_tick) = signal(0u32);

    let product_id = id.clone();
    Effect::new(move |_| {
        reload_tick.track();
        let id = product_id.clone();
        set_loading.set(true);
        spawn_local(async move {
            match ApiGateway::new().get_product(&id).await {
                Ok(found) => set_product.set(Some(found)),
                Err(e) => notify.error(format!("Product not found: {}", e)),
            }
            set_loading.set(false);
        });
    });

    let on_add_to_cart = move |_| {
        let Some(current) = product.get_untracked() else {
            return;
        };
        if current.stock == 0 {
            notify.error("Product out of stock");
            return;
        }
        // 界面层负责夹取数量；store 本身不做上界约束
        let qty = quantity.get_untracked().clamp(1, current.stock);
        cart.add_to_cart(&current, qty);
        notify.success("Added to cart!");
    };

    let review_product_id = id.clone();
    let on_submit_review = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if !session.with_untracked(|s| s.is_authenticated()) {
            notify.error("Please login to submit a review");
            return;
        }
        let id = review_product_id.clone();
        let request = CreateReviewRequest {
            rating: rating.get_untracked(),
            comment: comment.get_untracked(),
        };
        spawn_local(async move {
            match ApiGateway::new().add_review(&id, &request).await {
                Ok(()) => {
                    notify.success("Review submitted!");
                    set_rating.set(5);
                    set_comment.set(String::new());
                    set_reload_tick.update(|t| *t += 1);
                }
                Err(e) => notify.error(format!("Failed to submit review: {}", e)),
            }
        });
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-20">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                {move || {
                    product
                        .get()
                        .map(|p| {
                            let stock = p.stock;
                            let max_qty = stock.max(1);
                            let image = p.primary_image().to_string();
                            let reviews = p.reviews.clone();
                            view! {
                                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10">
                                    <figure class="card bg-base-100 shadow-md overflow-hidden">
                                        <img src=image alt=p.name.clone() class="w-full object-cover" />
                                    </figure>
                                    <div class="space-y-4">
                                        <h1 class="text-3xl font-bold">{p.name.clone()}</h1>
                                        <div class="flex items-center gap-2">
                                            <Star attr:class="h-5 w-5 text-warning" />
                                            <span class="opacity-70">
                                                {format!("{:.1} · {} reviews", p.ratings, p.num_reviews)}
                                            </span>
                                        </div>
                                        <div class="flex items-baseline gap-3">
                                            <span class="text-3xl font-bold text-primary">
                                                {format!("${:.2}", p.price)}
                                            </span>
                                            <Show when=move || { p.original_price > p.price }>
                                                <span class="opacity-50 line-through">
                                                    {format!("${:.2}", p.original_price)}
                                                </span>
                                            </Show>
                                        </div>
                                        <p class="opacity-80">{p.description.clone()}</p>
                                        <div class={if stock > 0 {
                                            "badge badge-success badge-outline"
                                        } else {
                                            "badge badge-error badge-outline"
                                        }}>
                                            {if stock > 0 {
                                                format!("In Stock ({})", stock)
                                            } else {
                                                "Out of Stock".to_string()
                                            }}
                                        </div>

                                        <div class="flex items-center gap-4 pt-2">
                                            <input
                                                type="number"
                                                min="1"
                                                max=max_qty
                                                class="input input-bordered w-24"
                                                prop:value=move || quantity.get().to_string()
                                                on:input=move |ev| {
                                                    let parsed = event_target_value(&ev)
                                                        .parse::<u32>()
                                                        .unwrap_or(1);
                                                    set_quantity.set(parsed.clamp(1, max_qty));
                                                }
                                            />
                                            <button
                                                class="btn btn-primary gap-2"
                                                disabled=move || stock == 0
                                                on:click=on_add_to_cart.clone()
                                            >
                                                <ShoppingCart attr:class="h-5 w-5" />
                                                "Add to Cart"
                                            </button>
                                        </div>
                                    </div>
                                </div>

                                // 评价区
                                <div class="mt-12 grid grid-cols-1 lg:grid-cols-2 gap-10">
                                    <div>
                                        <h2 class="text-xl font-bold mb-4">"Reviews"</h2>
                                        <Show
                                            when={
                                                let has = !reviews.is_empty();
                                                move || has
                                            }
                                            fallback=|| view! {
                                                <p class="opacity-50">"No reviews yet"</p>
                                            }
                                        >
                                            <div class="space-y-4">
                                                <For
                                                    each={
                                                        let reviews = reviews.clone();
                                                        move || reviews.clone()
                                                    }
                                                    key=|r| r.id.clone()
                                                    children=move |review| {
                                                        view! {
                                                            <div class="card bg-base-100 shadow-sm p-4">
                                                                <div class="flex justify-between items-center">
                                                                    <span class="font-semibold">{review.name.clone()}</span>
                                                                    <span class="flex items-center gap-1 text-sm">
                                                                        <Star attr:class="h-4 w-4 text-warning" />
                                                                        {review.rating}
                                                                    </span>
                                                                </div>
                                                                <p class="mt-2 text-sm opacity-80">{review.comment.clone()}</p>
                                                            </div>
                                                        }
                                                    }
                                                />
                                            </div>
                                        </Show>
                                    </div>

                                    <div>
                                        <h2 class="text-xl font-bold mb-4">"Write a Review"</h2>
                                        <form
                                            class="card bg-base-100 shadow-md p-6 space-y-4"
                                            on:submit=on_submit_review.clone()
                                        >
                                            <div class="form-control">
                                                <label class="label"><span class="label-text">"Rating"</span></label>
                                                <select
                                                    class="select select-bordered"
                                                    on:change=move |ev| {
                                                        set_rating.set(
                                                            event_target_value(&ev).parse().unwrap_or(5),
                                                        );
                                                    }
                                                >
                                                    <option value="5" selected=move || rating.get() == 5>"5 - Excellent"</option>
                                                    <option value="4" selected=move || rating.get() == 4>"4 - Good"</option>
                                                    <option value="3" selected=move || rating.get() == 3>"3 - Average"</option>
                                                    <option value="2" selected=move || rating.get() == 2>"2 - Poor"</option>
                                                    <option value="1" selected=move || rating.get() == 1>"1 - Terrible"</option>
                                                </select>
                                            </div>
                                            <div class="form-control">
                                                <label class="label"><span class="label-text">"Comment"</span></label>
                                                <textarea
                                                    class="textarea textarea-bordered"
                                                    rows="3"
                                                    required
                                                    prop:value=comment
                                                    on:input=move |ev| set_comment.set(event_target_value(&ev))
                                                ></textarea>
                                            </div>
                                            <button type="submit" class="btn btn-primary">"Submit Review"</button>
                                        </form>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
