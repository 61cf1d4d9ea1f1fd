use crate::components::icons::*;
use crate::components::notification::use_notify;
use crate::store::cart::use_cart;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use eshop_shared::Product;
use leptos::prelude::*;

/// 商品卡片：列表/首页共用；加购按钮不跳转详情
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let router = use_router();
    let cart = use_cart();
    let notify = use_notify();

    let detail = AppRoute::ProductDetail(product.id.clone());
    let image = product.primary_image().to_string();
    let on_sale = product.on_sale();
    let stock = product.stock;
    let rating_label = format!("{:.1} ({})", product.ratings, product.num_reviews);
    let price_label = format!("${:.2}", product.price);
    let original_price_label = format!("${:.2}", product.original_price);

    let add_product = product.clone();
    let on_add = move |ev: leptos::web_sys::MouseEvent| {
        ev.stop_propagation();
        cart.add_to_cart(&add_product, 1);
        notify.success("Added to cart!");
    };

    view! {
        <div
            class="card bg-base-100 shadow-md hover:shadow-xl transition-shadow cursor-pointer"
            on:click=move |_| router.navigate_to(detail.clone())
        >
            <figure class="relative h-56 overflow-hidden">
                <img src=image alt=product.name.clone() class="w-full h-full object-cover" />
                <Show when=move || on_sale>
                    <span class="badge badge-error absolute top-2 left-2 text-white">"Sale"</span>
                </Show>
            </figure>
            <div class="card-body p-4">
                <h3 class="card-title text-base truncate">{product.name.clone()}</h3>
                <p class="text-sm opacity-70 line-clamp-2">{product.description.clone()}</p>
                <div class="flex items-center gap-1 text-sm">
                    <Star attr:class="h-4 w-4 text-warning" />
                    <span class="opacity-70">{rating_label}</span>
                </div>
                <div class="card-actions items-center justify-between mt-1">
                    <div>
                        <span class="text-lg font-bold text-primary">{price_label}</span>
                        <Show when=move || on_sale>
                            <span class="ml-2 text-sm opacity-50 line-through">
                                {original_price_label.clone()}
                            </span>
                        </Show>
                    </div>
                    <button class="btn btn-primary btn-sm btn-circle" on:click=on_add.clone()>
                        <ShoppingCart attr:class="h-4 w-4" />
                    </button>
                </div>
                <Show when=move || { stock > 0 && stock < 10 }>
                    <p class="text-warning text-xs">{format!("Only {} left!", stock)}</p>
                </Show>
                <Show when=move || stock == 0>
                    <p class="text-error text-xs">"Out of stock"</p>
                </Show>
            </div>
        </div>
    }
}
