//! Wall-clock access for message and conversation timestamps.
//!
//! Timestamps are display strings only; nothing orders or compares them.
//! Native builds (tests) return an empty string rather than faking a clock.

/// Current time as an ISO-8601 string, or `""` off-browser.
pub fn now_iso() -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// The date portion (`YYYY-MM-DD`) of the current time, used to prefill the
/// intake form's date-found field. Empty off-browser.
pub fn today() -> String {
    let iso = now_iso();
    iso.get(..10).map(str::to_owned).unwrap_or_default()
}
