use super::layout::AdminShell;
use crate::api::ApiGateway;
use crate::components::icons::*;
use crate::components::notification::use_notify;
use eshop_shared::{Role, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 管理端用户管理：角色流转与删除
///
/// 删除按钮对当前角色为管理员的行禁用。这只是界面层的防呆，
/// 不是权限保证——真正的校验在后端。
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let notify = use_notify();

    let (users, set_users) = signal(Vec::<UserInfo>::new());
    let (reload_tick, set_reload_tick) = signal(0u32);

    Effect::new(move |_| {
        reload_tick.track();
        spawn_local(async move {
            match ApiGateway::new().get_users().await {
                Ok(list) => set_users.set(list),
                Err(e) => notify.error(format!("Failed to load users: {}", e)),
            }
        });
    });

    let on_role_change = move |id: String, role: Role| {
        spawn_local(async move {
            match ApiGateway::new().update_user_role(&id, role).await {
                Ok(_) => {
                    notify.success("User role updated!");
                    set_reload_tick.update(|t| *t += 1);
                }
                Err(e) => notify.error(format!("Update failed: {}", e)),
            }
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            match ApiGateway::new().delete_user(&id).await {
                Ok(()) => {
                    notify.success("User deleted successfully!");
                    set_reload_tick.update(|t| *t += 1);
                }
                Err(e) => notify.error(format!("Delete failed: {}", e)),
            }
        });
    };

    view! {
        <AdminShell title="Users">
            <div class="card bg-base-100 shadow-md overflow-x-auto">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.get()
                            key=|u| (u.id.clone(), u.role)
                            children=move |user| {
                                let role_id = user.id.clone();
                                let delete_id = user.id.clone();
                                let is_admin = user.role == Role::Admin;
                                view! {
                                    <tr>
                                        <td class="font-medium">{user.name.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>
                                            <select
                                                class=if is_admin {
                                                    "select select-bordered select-sm text-secondary"
                                                } else {
                                                    "select select-bordered select-sm"
                                                }
                                                on:change=move |ev| {
                                                    let next = if event_target_value(&ev) == "admin" {
                                                        Role::Admin
                                                    } else {
                                                        Role::User
                                                    };
                                                    on_role_change(role_id.clone(), next);
                                                }
                                            >
                                                <option value="user" selected=!is_admin>"User"</option>
                                                <option value="admin" selected=is_admin>"Admin"</option>
                                            </select>
                                        </td>
                                        <td>
                                            <button
                                                class="btn btn-ghost btn-sm text-error"
                                                disabled=is_admin
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
        </AdminShell>
    }
}
