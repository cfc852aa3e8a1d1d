//! Thin wrappers over `web_sys` for the few browser calls the UI needs.
//!
//! Every helper no-ops (or returns `None`) without the `hydrate` feature so
//! SSR and unit tests never touch `window`.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Read the `content` attribute of `<meta name="{name}">` in the document.
pub fn read_meta(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{name}\"]");
        let element = document.query_selector(&selector).ok().flatten()?;
        element.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Perform a full page reload of the current location.
pub fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().reload() {
                log::warn!("page reload failed: {err:?}");
            }
        }
    }
}
