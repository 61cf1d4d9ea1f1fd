use super::layout::AdminShell;
use crate::api::ApiGateway;
use crate::components::icons::*;
use crate::components::notification::use_notify;
use eshop_shared::{Category, SaveCategoryRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 管理端分类管理：列表（含下架）+ 新建/编辑 + 删除
#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let notify = use_notify();

    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (reload_tick, set_reload_tick) = signal(0u32);

    // 表单状态
    let editing = RwSignal::new(Option::<String>::None);
    let open = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let active = RwSignal::new(true);

    Effect::new(move |_| {
        reload_tick.track();
        spawn_local(async move {
            match ApiGateway::new().get_all_categories().await {
                Ok(list) => set_categories.set(list),
                Err(e) => notify.error(format!("Failed to load categories: {}", e)),
            }
        });
    });

    let open_create = move |_| {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
        active.set(true);
        open.set(true);
    };

    let open_edit = move |category: &Category| {
        editing.set(Some(category.id.clone()));
        name.set(category.name.clone());
        description.set(category.description.clone());
        active.set(category.active);
        open.set(true);
    };

    let on_save = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = SaveCategoryRequest {
            name: name.get_untracked(),
            description: description.get_untracked(),
            active: active.get_untracked(),
        };
        let target = editing.get_untracked();
        spawn_local(async move {
            let api = ApiGateway::new();
            let result = match &target {
                Some(id) => api.update_category(id, &request).await.map(|_| ()),
                None => api.create_category(&request).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    notify.success(if target.is_some() {
                        "Category updated successfully!"
                    } else {
                        "Category created successfully!"
                    });
                    open.set(false);
                    set_reload_tick.update(|t| *t += 1);
                }
                Err(e) => notify.error(format!("Operation failed: {}", e)),
            }
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            match ApiGateway::new().delete_category(&id).await {
                Ok(()) => {
                    notify.success("Category deleted successfully!");
                    set_reload_tick.update(|t| *t += 1);
                }
                Err(e) => notify.error(format!("Delete failed: {}", e)),
            }
        });
    };

    view! {
        <AdminShell title="Categories">
            <div class="flex justify-end mb-4">
                <button class="btn btn-primary gap-2" on:click=open_create>
                    <Plus attr:class="h-4 w-4" />
                    "Add Category"
                </button>
            </div>

            <div class="card bg-base-100 shadow-md overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Description"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || categories.get()
                            key=|c| c.id.clone()
                            children=move |category| {
                                let edit_category = category.clone();
                                let delete_id = category.id.clone();
                                view! {
                                    <tr>
                                        <td class="font-medium">{category.name.clone()}</td>
                                        <td class="max-w-md truncate opacity-70">
                                            {category.description.clone()}
                                        </td>
                                        <td>
                                            <span class=if category.active {
                                                "badge badge-success badge-outline"
                                            } else {
                                                "badge badge-ghost"
                                            }>
                                                {if category.active { "Active" } else { "Inactive" }}
                                            </span>
                                        </td>
                                        <td class="flex gap-1">
                                            <button
                                                class="btn btn-ghost btn-sm"
                                                on:click=move |_| open_edit(&edit_category)
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

            <Show when=move || open.get()>
                <div class="modal modal-open">
                    <div class="modal-box">
                        <h3 class="font-bold text-lg mb-4">
                            {move || if editing.get().is_some() {
                                "Edit Category"
                            } else {
                                "Add Category"
                            }}
                        </h3>
                        <form class="space-y-3" on:submit=on_save>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Name"</span></label>
                                <input
                                    type="text"
                                    class="input input-bordered"
                                    required
                                    prop:value=name
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">"Description"</span></label>
                                <textarea
                                    class="textarea textarea-bordered"
                                    rows="3"
                                    prop:value=description
                                    on:input=move |ev| description.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <label class="label cursor-pointer justify-start gap-3">
                                <input
                                    type="checkbox"
                                    class="toggle toggle-primary"
                                    prop:checked=active
                                    on:change=move |_| active.update(|a| *a = !*a)
                                />
                                <span class="label-text">"Active"</span>
                            </label>
                            <div class="modal-action">
                                <button
                                    type="button"
                                    class="btn btn-ghost"
                                    on:click=move |_| open.set(false)
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn-primary">
                                    {move || if editing.get().is_some() { "Update" } else { "Create" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </AdminShell>
    }
}
