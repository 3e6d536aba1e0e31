//! Submit button with an inline loading spinner.

use leptos::prelude::*;

/// Disabled and showing a spinner while `loading` is true.
#[component]
pub fn SubmitButton(#[prop(into)] loading: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <button
            class="login-button"
            class=("login-button--loading", move || loading.get())
            type="submit"
            disabled=move || loading.get()
            aria-busy=move || if loading.get() { "true" } else { "false" }
        >
            <Show when=move || loading.get()>
                <span class="spinner" aria-hidden="true"></span>
            </Show>
            {children()}
        </button>
    }
}
