use leptos::prelude::*;

/// 页脚
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center p-6 bg-base-100 text-base-content border-t border-base-300">
            <aside>
                <p class="font-semibold">"E-Shop"</p>
                <p class="text-sm opacity-70">"Quality products, delivered to your door."</p>
                <p class="text-xs opacity-50">"© 2025 E-Shop. All rights reserved."</p>
            </aside>
        </footer>
    }
}
