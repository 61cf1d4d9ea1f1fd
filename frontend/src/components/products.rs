use crate::api::ApiGateway;
use crate::components::icons::*;
use crate::components::notification::use_notify;
use crate::components::product_card::ProductCard;
use eshop_shared::{Category, Product, ProductQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 商品列表：关键字/分类/价格筛选 + 分页
#[component]
pub fn ProductsPage() -> impl IntoView {
    let notify = use_notify();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (loading, set_loading) = signal(true);
    let (page, set_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);

    let (keyword, set_keyword) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (min_price, set_min_price) = signal(String::new());
    let (max_price, set_max_price) = signal(String::new());
    // 关键字/价格在点击搜索时才生效；分类与页码变化即时生效
    let (search_tick, set_search_tick) = signal(0u32);

    spawn_local(async move {
        if let Ok(list) = ApiGateway::new().get_categories().await {
            set_categories.set(list);
        }
    });

    // 构造查询：只把非空筛选拼进去
    let build_query = move || ProductQuery {
        keyword: Some(keyword.get_untracked()),
        category: Some(category.get()),
        min_price: min_price.get_untracked().parse().ok(),
        max_price: max_price.get_untracked().parse().ok(),
        page: page.get(),
    };

    // 页码、分类或搜索动作变化时重新拉取
    Effect::new(move |_| {
        search_tick.track();
        let query = build_query();
        set_loading.set(true);
        spawn_local(async move {
            match ApiGateway::new().get_products(&query).await {
                Ok(response) => {
                    set_products.set(response.products);
                    set_total_pages.set(response.pages.max(1));
                }
                Err(e) => notify.error(format!("Failed to load products: {}", e)),
            }
            set_loading.set(false);
        });
    });

    let on_search = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_page.set(1);
        set_search_tick.update(|t| *t += 1);
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-8">"Products"</h1>

            <div class="flex flex-col lg:flex-row gap-8">
                // 筛选侧栏
                <aside class="lg:w-64 flex-shrink-0">
                    <div class="card bg-base-100 shadow-md p-6 sticky top-24 space-y-4">
                        <h2 class="font-semibold text-lg">"Filters"</h2>

                        <form on:submit=on_search class="form-control">
                            <label class="label"><span class="label-text">"Search"</span></label>
                            <div class="join w-full">
                                <input
                                    type="text"
                                    placeholder="Search products..."
                                    class="input input-bordered join-item w-full"
                                    prop:value=keyword
                                    on:input=move |ev| set_keyword.set(event_target_value(&ev))
                                />
                                <button type="submit" class="btn join-item">
                                    <Search attr:class="h-4 w-4" />
                                </button>
                            </div>
                        </form>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Category"</span></label>
                            <select
                                class="select select-bordered"
                                on:change=move |ev| {
                                    set_page.set(1);
                                    set_category.set(event_target_value(&ev));
                                }
                            >
                                <option value="" selected=move || category.get().is_empty()>
                                    "All Categories"
                                </option>
                                <For
                                    each=move || categories.get()
                                    key=|c| c.id.clone()
                                    children=move |cat| {
                                        let name = cat.name.clone();
                                        let value = cat.name.clone();
                                        let is_selected = {
                                            let value = value.clone();
                                            move || category.get() == value
                                        };
                                        view! {
                                            <option value=value selected=is_selected>{name}</option>
                                        }
                                    }
                                />
                            </select>
                        </div>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Price Range"</span></label>
                            <div class="flex gap-2">
                                <input
                                    type="number"
                                    placeholder="Min"
                                    class="input input-bordered w-1/2"
                                    prop:value=min_price
                                    on:input=move |ev| set_min_price.set(event_target_value(&ev))
                                />
                                <input
                                    type="number"
                                    placeholder="Max"
                                    class="input input-bordered w-1/2"
                                    prop:value=max_price
                                    on:input=move |ev| set_max_price.set(event_target_value(&ev))
                                />
                            </div>
                            <button
                                class="btn btn-primary btn-sm mt-3"
                                on:click=move |_| {
                                    set_page.set(1);
                                    set_search_tick.update(|t| *t += 1);
                                }
                            >
                                "Apply"
                            </button>
                        </div>
                    </div>
                </aside>

                // 商品栅格
                <div class="flex-1">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! {
                            <div class="flex justify-center py-20">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }
                    >
                        <Show
                            when=move || !products.with(|p| p.is_empty())
                            fallback=|| view! {
                                <p class="text-center opacity-50 py-20">"No products found"</p>
                            }
                        >
                            <div class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-3 gap-6">
                                <For
                                    each=move || products.get()
                                    key=|p| p.id.clone()
                                    children=move |product| view! { <ProductCard product=product /> }
                                />
                            </div>
                        </Show>
                    </Show>

                    // 分页
                    <Show when=move || { total_pages.get() > 1 }>
                        <div class="join flex justify-center mt-8">
                            <button
                                class="join-item btn"
                                disabled=move || page.get() <= 1
                                on:click=move |_| set_page.update(|p| *p -= 1)
                            >
                                "«"
                            </button>
                            <button class="join-item btn btn-ghost no-animation">
                                {move || format!("Page {} of {}", page.get(), total_pages.get())}
                            </button>
                            <button
                                class="join-item btn"
                                disabled=move || page.get() >= total_pages.get()
                                on:click=move |_| set_page.update(|p| *p += 1)
                            >
                                "»"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
