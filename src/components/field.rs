//! Labeled single-line text input with helper text.

use leptos::prelude::*;

/// Text field bound to a form value.
///
/// `name` doubles as the element id so the label targets it. The input is
/// autofocused and hints one-time-code autofill.
#[component]
pub fn Field(
    #[prop(into)] name: Signal<&'static str>,
    #[prop(into)] title: Signal<&'static str>,
    #[prop(into)] description: Signal<&'static str>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] disabled: Signal<bool>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="login-field">
            <label class="login-field__label" for=move || name.get()>
                {move || title.get()}
            </label>
            <input
                class="login-input"
                id=move || name.get()
                name=move || name.get()
                type="text"
                autocomplete="one-time-code"
                autofocus=true
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <p class="login-field__description">{move || description.get()}</p>
        </div>
    }
}
