use crate::api::ApiGateway;
use crate::components::notification::use_notify;
use crate::store::session::use_session;
use eshop_shared::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 注册页：成功后直接建立会话（与登录同一条路径）
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session_ctx = use_session();
    let notify = use_notify();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().is_empty() || email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }
        if password.get() != confirm.get() {
            set_error_msg.set(Some("Passwords do not match".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let session_ctx = session_ctx.clone();
        let request = RegisterRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            match ApiGateway::new().register(&request).await {
                Ok(auth) => {
                    session_ctx.establish(auth);
                    notify.success("Account created!");
                }
                Err(e) => {
                    set_error_msg.set(Some(format!("Registration failed: {}", e)));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[70vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Create Account"</h1>
                    <p class="text-base-content/70">"Join us and start shopping"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label"><span class="label-text">"Name"</span></label>
                            <input
                                type="text"
                                placeholder="Jane Doe"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Email"</span></label>
                            <input
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Password"</span></label>
                            <input
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">"Confirm Password"</span></label>
                            <input
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                prop:value=confirm
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating..." }.into_any()
                                } else {
                                    "Sign Up".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
