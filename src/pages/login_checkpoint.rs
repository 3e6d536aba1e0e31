//! Two-factor checkpoint screen reached after the password step.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login step navigates here with the pending session token in history
//! state. Without it there is nothing to verify, so the screen renders
//! nothing and replaces itself with the login start. With it, the user enters
//! either a device code or a recovery code. Both exits, back to the login start
//! and on to the authenticated app, are full page loads because neither screen
//! lives in this router.
//!
//! The history state only exists in the browser, so the token is read after
//! mount. SSR and the first hydrated render both produce an empty screen.

#[cfg(test)]
#[path = "login_checkpoint_test.rs"]
mod login_checkpoint_test;

use leptos::prelude::*;

use crate::components::field::Field;
use crate::components::login_form_container::LoginFormContainer;
use crate::components::submit_button::SubmitButton;
use crate::config::ClientConfig;
use crate::net::api::{CheckpointVerifier, HttpCheckpointVerifier};
use crate::state::checkpoint::{CheckpointForm, CheckpointRequest, NavigationState, SubmitOutcome};
use crate::state::flash::{ErrorSink, FlashState};
use crate::util::history::current_navigation_state;
use crate::util::navigation::{LocationNavigator, Navigator};

/// Navigator for leaving the checkpoint screen.
pub fn exit_navigator() -> LocationNavigator {
    LocationNavigator
}

/// Token required to show the form, redirecting to `login_path` when absent.
pub fn require_token<N>(state: &NavigationState, navigator: &N, login_path: &str) -> Option<String>
where
    N: Navigator + ?Sized,
{
    if let Some(token) = state.required_token() {
        return Some(token.to_owned());
    }
    log::debug!("no checkpoint token in navigation state; redirecting to {login_path}");
    navigator.replace(login_path);
    None
}

/// Send one verification request and act on the result.
///
/// A completed login navigates to the server's intended URL (or
/// `default_redirect`). A failed call is logged and reported to `sink`
/// exactly once. An incomplete login does nothing; the caller re-arms the
/// form.
pub async fn submit_checkpoint<V, S, N>(
    request: CheckpointRequest,
    verifier: &V,
    sink: &S,
    navigator: &N,
    default_redirect: &str,
) -> SubmitOutcome
where
    V: CheckpointVerifier + ?Sized,
    S: ErrorSink + ?Sized,
    N: Navigator + ?Sized,
{
    match verifier.verify(&request).await {
        Ok(response) if response.complete => {
            let target = response.redirect_target(default_redirect).to_owned();
            log::info!("login checkpoint complete; redirecting to {target}");
            navigator.assign(&target);
            SubmitOutcome::Redirected(target)
        }
        Ok(_) => SubmitOutcome::Incomplete,
        Err(e) => {
            log::error!("login checkpoint failed: {e}");
            sink.report_error(&e);
            SubmitOutcome::Failed
        }
    }
}

/// Route entry for `/auth/login/checkpoint`.
#[component]
pub fn LoginCheckpointPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let token = RwSignal::new(None::<String>);

    let login_path = config.login_path;
    Effect::new(move || {
        if let Some(t) = require_token(&current_navigation_state(), &exit_navigator(), &login_path) {
            token.set(Some(t));
        }
    });

    move || token.get().map(|t| view! { <CheckpointPanel token=t/> })
}

/// The checkpoint form for a known session token.
#[component]
fn CheckpointPanel(token: String) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let flashes =
        use_context::<RwSignal<FlashState>>().unwrap_or_else(|| RwSignal::new(FlashState::default()));
    let form = RwSignal::new(CheckpointForm::new(token));

    let verifier = HttpCheckpointVerifier::new(&config);
    let default_redirect = config.default_redirect;

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let Some(request) = form.try_update(CheckpointForm::begin_submit).flatten() else {
                return;
            };
            let verifier = verifier.clone();
            let default_redirect = default_redirect.clone();
            leptos::task::spawn_local(async move {
                let outcome = submit_checkpoint(request, &verifier, &flashes, &exit_navigator(), &default_redirect).await;
                form.update(|f| f.finish(&outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&verifier, &default_redirect, flashes);
    });

    let on_input = Callback::new(move |value: String| form.update(|f| f.set_active_value(value)));
    let on_toggle = move |_| form.update(CheckpointForm::toggle_missing_device);

    let mode = Signal::derive(move || form.with(|f| f.mode));
    let submitting = Signal::derive(move || form.with(|f| f.submitting));

    view! {
        <LoginFormContainer title="Device Checkpoint" on_submit=on_submit>
            <Field
                name=Signal::derive(move || mode.get().field_name())
                title=Signal::derive(move || mode.get().title())
                description=Signal::derive(move || mode.get().description())
                value=Signal::derive(move || form.with(|f| f.active_value().to_owned()))
                disabled=submitting
                on_input=on_input
            />
            <SubmitButton loading=submitting>"Continue"</SubmitButton>
            <div class="login-card__toggle">
                <span class="login-link" role="button" on:click=on_toggle>
                    {move || mode.get().toggle_label()}
                </span>
            </div>
        </LoginFormContainer>
    }
}
