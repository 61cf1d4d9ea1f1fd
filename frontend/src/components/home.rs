use crate::api::ApiGateway;
use crate::components::product_card::ProductCard;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use eshop_shared::{Category, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 首页：主视觉 + 精选商品 + 分类速览
#[component]
pub fn HomePage() -> impl IntoView {
    let router = use_router();

    let (featured, set_featured) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (loading, set_loading) = signal(true);

    // 初始加载（失败静默：首页各区块独立降级为空态）
    spawn_local(async move {
        let api = ApiGateway::new();
        if let Ok(products) = api.get_featured_products().await {
            set_featured.set(products);
        }
        if let Ok(list) = api.get_categories().await {
            set_categories.set(list);
        }
        set_loading.set(false);
    });

    view! {
        <div>
            // Hero
            <div class="hero min-h-[50vh] bg-gradient-to-r from-primary to-secondary text-primary-content">
                <div class="hero-content text-center">
                    <div class="max-w-lg">
                        <h1 class="text-5xl font-bold">"Shop the Latest"</h1>
                        <p class="py-6 opacity-90">
                            "Discover quality products at great prices. Free shipping on orders over $50."
                        </p>
                        <button
                            class="btn btn-neutral"
                            on:click=move |_| router.navigate_to(AppRoute::Products)
                        >
                            "Browse Products"
                        </button>
                    </div>
                </div>
            </div>

            <div class="max-w-7xl mx-auto px-4 py-10 space-y-12">
                // 精选商品
                <section>
                    <h2 class="text-2xl font-bold mb-6">"Featured Products"</h2>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! {
                            <div class="flex justify-center py-12">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }
                    >
                        <Show
                            when=move || !featured.with(|f| f.is_empty())
                            fallback=|| view! {
                                <p class="text-center opacity-50 py-8">"No featured products yet"</p>
                            }
                        >
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                                <For
                                    each=move || featured.get().into_iter().take(8)
                                    key=|p| p.id.clone()
                                    children=move |product| view! { <ProductCard product=product /> }
                                />
                            </div>
                        </Show>
                    </Show>
                </section>

                // 分类速览
                <section>
                    <h2 class="text-2xl font-bold mb-6">"Shop by Category"</h2>
                    <Show
                        when=move || !categories.with(|c| c.is_empty())
                        fallback=|| view! {
                            <p class="text-center opacity-50">"No categories available yet"</p>
                        }
                    >
                        <div class="grid grid-cols-2 sm:grid-cols-4 gap-4">
                            <For
                                each=move || categories.get().into_iter().take(8)
                                key=|c| c.id.clone()
                                children=move |category| {
                                    view! {
                                        <button
                                            class="card bg-base-100 shadow hover:shadow-lg transition-shadow p-6 text-center"
                                            on:click=move |_| router.navigate_to(AppRoute::Products)
                                        >
                                            <span class="font-semibold">{category.name.clone()}</span>
                                            <span class="text-xs opacity-60 line-clamp-1">
                                                {category.description.clone()}
                                            </span>
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </section>
            </div>
        </div>
    }
}
