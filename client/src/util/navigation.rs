//! Full-page navigation away from the dashboard.
//!
//! TRADE-OFFS
//! ==========
//! Leaving for the marketing login is a top-level navigation, never a
//! client-side route change; outside the browser the request is only logged.

/// Performs top-level navigations to absolute URLs.
pub trait Navigator {
    fn navigate_external(&self, url: &str);
}

/// `window.location.href` navigator used by the running app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_external(&self, url: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                log::warn!("no window available for navigation to {url}");
                return;
            };
            if let Err(err) = window.location().set_href(url) {
                log::error!("navigation to {url} failed: {err:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("external navigation to {url} requested outside the browser");
        }
    }
}
