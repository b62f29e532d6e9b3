//! Console theme preference.
//!
//! `Layout` reads the stored choice once on mount and stores it in
//! `UiState::dark_mode`; its theme button calls [`toggle`]. The theme is the
//! `data-theme` attribute on `<html>`, which `style/main.css` keys its color
//! tokens on. Server renders always start light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "campaign_console_dark";

/// Value written to the `data-theme` attribute.
#[must_use]
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the user previously enabled dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }

        match window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(mq)) => mq.matches(),
            _ => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if el.set_attribute("data-theme", theme_name(enabled)).is_err() {
                log::warn!("could not set data-theme");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("theme {} (no document)", theme_name(enabled));
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }).is_err() {
                    log::warn!("could not persist theme preference");
                }
            }
        }
    }
    next
}
