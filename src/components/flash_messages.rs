//! Renders flash notifications for one scope.

use leptos::prelude::*;

use crate::state::flash::FlashState;

/// List of flash messages from the shared store. `key` selects the scope;
/// omitted means the global scope.
#[component]
pub fn FlashMessages(#[prop(optional, into)] key: Option<String>) -> impl IntoView {
    let Some(flashes) = use_context::<RwSignal<FlashState>>() else {
        return ().into_any();
    };

    let messages = move || flashes.with(|state| state.for_key(key.as_deref()));

    view! {
        <div class="flash-list">
            {move || {
                messages()
                    .into_iter()
                    .map(|msg| {
                        let class = format!("flash flash--{}", msg.kind.css_modifier());
                        view! {
                            <div class=class role="alert">
                                {msg.title.map(|t| view! { <strong class="flash__title">{t}</strong> })}
                                <span class="flash__message">{msg.message}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
    .into_any()
}
