use crate::api::ApiGateway;
use crate::components::notification::use_notify;
use crate::store::session::use_session;
use eshop_shared::UpdateProfileRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 个人资料页：更新姓名/邮箱，可选修改密码
///
/// 成功后把返回的资料合并进会话——令牌保持不动。
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session_ctx = use_session();
    let notify = use_notify();

    let session = session_ctx.session();
    let (name, set_name) = signal(session.with_untracked(|s| s.name.clone()));
    let (email, set_email) = signal(session.with_untracked(|s| s.email.clone()));
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_password = password.get_untracked();
        if !new_password.is_empty() && new_password != confirm.get_untracked() {
            notify.error("Passwords do not match");
            return;
        }

        let request = UpdateProfileRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: (!new_password.is_empty()).then_some(new_password),
        };
        let session_ctx = session_ctx.clone();
        set_saving.set(true);
        spawn_local(async move {
            match ApiGateway::new().update_profile(&request).await {
                Ok(profile) => {
                    session_ctx.update_user(&profile);
                    notify.success("Profile updated successfully!");
                    set_password.set(String::new());
                    set_confirm.set(String::new());
                }
                Err(e) => notify.error(format!("Failed to update profile: {}", e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-8">"My Profile"</h1>

            <form class="card bg-base-100 shadow-md p-6 space-y-4" on:submit=on_submit>
                <div class="form-control">
                    <label class="label"><span class="label-text">"Name"</span></label>
                    <input
                        type="text"
                        class="input input-bordered"
                        required
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">"Email"</span></label>
                    <input
                        type="email"
                        class="input input-bordered"
                        required
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>

                <div class="divider">"Change Password"</div>

                <div class="form-control">
                    <label class="label"><span class="label-text">"New Password"</span></label>
                    <input
                        type="password"
                        class="input input-bordered"
                        placeholder="Leave blank to keep current password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">"Confirm New Password"</span></label>
                    <input
                        type="password"
                        class="input input-bordered"
                        prop:value=confirm
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    />
                </div>

                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
            </form>
        </div>
    }
}
