use super::layout::AdminShell;
use crate::api::ApiGateway;
use crate::components::icons::*;
use crate::components::notification::use_notify;
use eshop_shared::{Category, Product, ProductImage, ProductQuery, SaveProductRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 商品表单状态（新建与编辑共用）
#[derive(Clone, Copy)]
struct ProductForm {
    /// 正在编辑的商品 id；None 表示新建
    editing: RwSignal<Option<String>>,
    open: RwSignal<bool>,
    name: RwSignal<String>,
    description: RwSignal<String>,
    price: RwSignal<String>,
    original_price: RwSignal<String>,
    category: RwSignal<String>,
    brand: RwSignal<String>,
    stock: RwSignal<String>,
    image_url: RwSignal<String>,
    featured: RwSignal<bool>,
}

impl ProductForm {
    fn new() -> Self {
        Self {
            editing: RwSignal::new(None),
            open: RwSignal::new(false),
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            original_price: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            brand: RwSignal::new(String::new()),
            stock: RwSignal::new(String::new()),
            image_url: RwSignal::new(String::new()),
            featured: RwSignal::new(false),
        }
    }

    fn open_create(&self, default_category: &str) {
        self.editing.set(None);
        self.name.set(String::new());
        self.description.set(String::new());
        self.price.set(String::new());
        self.original_price.set(String::new());
        self.category.set(default_category.to_string());
        self.brand.set(String::new());
        self.stock.set(String::new());
        self.image_url.set(String::new());
        self.featured.set(false);
        self.open.set(true);
    }

    fn open_edit(&self, product: &Product) {
        self.editing.set(Some(product.id.clone()));
        self.name.set(product.name.clone());
        self.description.set(product.description.clone());
        self.price.set(product.price.to_string());
        self.original_price.set(product.original_price.to_string());
        self.category.set(product.category.clone());
        self.brand.set(product.brand.clone());
        self.stock.set(product.stock.to_string());
        self.image_url.set(
            product
                .images
                .first()
                .map(|i| i.url.clone())
                .unwrap_or_default(),
        );
        self.featured.set(product.featured);
        self.open.set(true);
    }

    fn to_request(&self) -> SaveProductRequest {
        SaveProductRequest {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked().parse().unwrap_or(0.0),
            original_price: self.original_price.get_untracked().parse().unwrap_or(0.0),
            category: self.category.get_untracked(),
            brand: self.brand.get_untracked(),
            stock: self.stock.get_untracked().parse().unwrap_or(0),
            images: vec![ProductImage {
                url: self.image_url.get_untracked(),
            }],
            featured: self.featured.get_untracked(),
        }
    }
}

/// 管理端商品管理：列表 + 新建/编辑对话框 + 删除
#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let notify = use_notify();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (reload_tick, set_reload_tick) = signal(0u32);
    let form = ProductForm::new();

    Effect::new(move |_| {
        reload_tick.track();
        spawn_local(async move {
            match ApiGateway::new().get_products(&ProductQuery::page(1)).await {
                Ok(response) => set_products.set(response.products),
                Err(e) => notify.error(format!("Failed to load products: {}", e)),
            }
        });
    });

    spawn_local(async move {
        if let Ok(list) = ApiGateway::new().get_categories().await {
            set_categories.set(list);
        }
    });

    let on_save = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = form.to_request();
        let editing = form.editing.get_untracked();
        spawn_local(async move {
            let api = ApiGateway::new();
            let result = match &editing {
                Some(id) => api.update_product(id, &request).await.map(|_| ()),
                None => api.create_product(&request).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    notify.success(if editing.is_some() {
                        "Product updated successfully!"
                    } else {
                        "Product created successfully!"
                    });
                    form.open.set(false);
                    set_reload_tick.update(|t| *t += 1);
                }
                Err(e) => notify.error(format!("Operation failed: {}", e)),
            }
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            match ApiGateway::new().delete_product(&id).await {
                Ok(()) => {
                    notify.success("Product deleted successfully!");
                    set_reload_tick.update(|t| *t += 1);
                }
                Err(e) => notify.error(format!("Delete failed: {}", e)),
            }
        });
    };

    view! {
        <AdminShell title="Products">
            <div class="flex justify-end mb-4">
                <button
                    class="btn btn-primary gap-2"
                    on:click=move |_| {
                        let default_category = categories
                            .with_untracked(|c| c.first().map(|c| c.name.clone()))
                            .unwrap_or_default();
                        form.open_create(&default_category);
                    }
                >
                    <Plus attr:class="h-4 w-4" />
                    "Add Product"
                </button>
            </div>

            <div class="card bg-base-100 shadow-md overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th>"Category"</th>
                            <th>"Price"</th>
                            <th>"Stock"</th>
                            <th>"Featured"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || products.get()
                            key=|p| p.id.clone()
                            children=move |product| {
                                let edit_product = product.clone();
                                let delete_id = product.id.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <div class="flex items-center gap-3">
                                                <img
                                                    src=product.primary_image().to_string()
                                                    alt=product.name.clone()
                                                    class="w-10 h-10 object-cover rounded"
                                                />
                                                <span class="font-medium">{product.name.clone()}</span>
                                            </div>
                                        </td>
                                        <td>{product.category.clone()}</td>
                                        <td>{format!("${:.2}", product.price)}</td>
                                        <td>
                                            <span class=if product.stock < 10 {
                                                "badge badge-warning"
                                            } else {
                                                "badge badge-ghost"
                                            }>
                                                {product.stock}
                                            </span>
                                        </td>
                                        <td>{if product.featured { "Yes" } else { "No" }}</td>
                                        <td class="flex gap-1">
                                            <button
                                                class="btn btn-ghost btn-sm"
                                                on:click=move |_| form.open_edit(&edit_product)
                                            >
                                                <Pencil attr:class="h-4 w-4" />
                                            </button>
                                            <button
                                                class="btn btn-ghost btn-sm text-error"
                                                on:click=move |_| on_delete(delete_id.clone())
                                            >
                                                <Trash2 attr:class="h-4 w-4" />
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            // 新建/编辑对话框
            <Show when=move || form.open.get()>
                <div class="modal modal-open">
                    <div class="modal-box max-w-2xl">
                        <h3 class="font-bold text-lg mb-4">
                            {move || if form.editing.get().is_some() {
                                "Edit Product"
                            } else {
                                "Add Product"
                            }}
                        </h3>
                        <form class="space-y-3" on:submit=on_save>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Name"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    required
                                    prop:value=form.name
                                    on:input=move |ev| form.name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Description"</span></label>
                                <textarea
                                    class="textarea textarea-bordered"
                                    rows="3"
                                    required
                                    prop:value=form.description
                                    on:input=move |ev| form.description.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <div class="grid grid-cols-2 gap-3">
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Price"</span></label>
                                    <input
                                        type="number"
                                        step="0.01"
                                        class="input input-bordered"
                                        required
                                        prop:value=form.price
                                        on:input=move |ev| form.price.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Original Price"</span></label>
                                    <input
                                        type="number"
                                        step="0.01"
                                        class="input input-bordered"
                                        prop:value=form.original_price
                                        on:input=move |ev| form.original_price.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Category"</span></label>
                                    <select
                                        class="select select-bordered"
                                        required
                                        on:change=move |ev| form.category.set(event_target_value(&ev))
                                    >
                                        <For
                                            each=move || categories.get()
                                            key=|c| c.id.clone()
                                            children=move |cat| {
                                                let value = cat.name.clone();
                                                let selected = {
                                                    let value = value.clone();
                                                    move || form.category.get() == value
                                                };
                                                view! {
                                                    <option value=cat.name.clone() selected=selected>
                                                        {cat.name.clone()}
                                                    </option>
                                                }
                                            }
                                        />
                                    </select>
                                </div>
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Brand"</span></label>
                                    <input
                                        type="text"
                                        class="input input-bordered"
                                        prop:value=form.brand
                                        on:input=move |ev| form.brand.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Stock"</span></label>
                                    <input
                                        type="number"
                                        class="input input-bordered"
                                        required
                                        prop:value=form.stock
                                        on:input=move |ev| form.stock.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label"><span class="label-text">"Image URL"</span></label>
                                    <input
                                        type="url"
                                        class="input input-bordered"
                                        required
                                        prop:value=form.image_url
                                        on:input=move |ev| form.image_url.set(event_target_value(&ev))
                                    />
                                </div>
                            </div>
                            <label class="label cursor-pointer justify-start gap-3">
                                <input
                                    type="checkbox"
                                    class="checkbox checkbox-primary"
                                    prop:checked=form.featured
                                    on:change=move |_| form.featured.update(|f| *f = !*f)
                                />
                                <span class="label-text">"Featured product"</span>
                            </label>
                            <div class="modal-action">
                                <button
                                    type="button"
                                    class="btn btn-ghost"
                                    on:click=move |_| form.open.set(false)
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn-primary">
                                    {move || if form.editing.get().is_some() { "Update" } else { "Create" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </AdminShell>
    }
}
