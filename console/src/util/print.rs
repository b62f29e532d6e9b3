//! Print-to-PDF export for a single marked page region.
//!
//! This is not a PDF pipeline: it opens the browser's native print dialog and
//! relies on `@media print` rules that hide everything outside the element
//! with id [`PRINT_AREA_ID`].

#[cfg(test)]
#[path = "print_test.rs"]
mod print_test;

/// Id of the element that stays visible when printing.
pub const PRINT_AREA_ID: &str = "print-area";

/// Class for controls inside the print area that must not be printed.
pub const NO_PRINT_CLASS: &str = "no-print";

/// Stylesheet scoping print output to the print area.
#[must_use]
pub fn print_stylesheet() -> String {
    format!(
        "@media print {{\n  \
           body * {{ visibility: hidden; }}\n  \
           #{PRINT_AREA_ID}, #{PRINT_AREA_ID} * {{ visibility: visible; }}\n  \
           #{PRINT_AREA_ID} {{ position: absolute; left: 0; top: 0; width: 100%; }}\n  \
           .{NO_PRINT_CLASS} {{ display: none; }}\n\
         }}\n"
    )
}

/// Open the host print dialog. No-op outside the browser.
pub fn print_page() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.print() {
            log::warn!("print dialog failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("print requested outside the browser");
    }
}
