//! Navigation capabilities used by auth screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both exits from the checkpoint screen leave the client app: the login start
//! and the post-login shell are served outside this router, so a route change
//! would only reach the fallback page. Screens go through [`Navigator`] so the
//! decision logic can be tested without a browser.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

pub trait Navigator {
    /// Full browser navigation that replaces the current history entry.
    fn replace(&self, url: &str);
    /// Full browser navigation that adds a history entry.
    fn assign(&self, url: &str);
}

/// Navigator backed by `window.location`. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn replace(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().replace(url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }

    fn assign(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
        }
    }
}
