//! 全局通知（toast）模块
//!
//! 各页面共享一个通知上下文：成功/失败都以非阻塞提示呈现，
//! 3 秒后自动消失，不打断任何表单输入。

use leptos::prelude::*;

/// 通知上下文：消息内容 + 是否出错
#[derive(Clone, Copy)]
pub struct NotificationContext {
    message: RwSignal<Option<(String, bool)>>,
}

impl NotificationContext {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    /// 成功提示
    pub fn success(&self, text: impl Into<String>) {
        self.message.set(Some((text.into(), false)));
    }

    /// 失败提示（标明失败的操作，不丢弃用户输入）
    pub fn error(&self, text: impl Into<String>) {
        self.message.set(Some((text.into(), true)));
    }
}

impl Default for NotificationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取通知上下文
pub fn use_notify() -> NotificationContext {
    use_context::<NotificationContext>().expect("NotificationContext should be provided")
}

/// 通知渲染组件，挂在应用骨架的最外层
#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_notify();
    let message = ctx.message;

    // 3秒后清除通知
    Effect::new(move |_| {
        if message.get().is_some() {
            set_timeout(
                move || message.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let (_, is_err) = message.get().unwrap();
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || message.get().unwrap().0}</span>
                </div>
            </div>
        </Show>
    }
}
