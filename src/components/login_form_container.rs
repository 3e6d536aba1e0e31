//! Card wrapper shared by the login screens.

use leptos::prelude::*;

use crate::components::flash_messages::FlashMessages;
use crate::config::ClientConfig;

/// Titled login card holding the flash list, a form, and a link back to the
/// login start. The login start is served outside this router, so the link
/// is a plain external anchor.
#[component]
pub fn LoginFormContainer(
    title: &'static str,
    on_submit: Callback<leptos::ev::SubmitEvent>,
    children: Children,
) -> impl IntoView {
    let login_path = use_context::<ClientConfig>().unwrap_or_default().login_path;

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{title}</h1>
                <FlashMessages/>
                <form class="login-form" on:submit=move |ev| on_submit.run(ev)>
                    {children()}
                </form>
                <div class="login-card__footer">
                    <a href=login_path class="login-link" rel="external">
                        "Return to Login"
                    </a>
                </div>
            </div>
        </div>
    }
}
