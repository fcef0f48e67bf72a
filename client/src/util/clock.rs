//! Wall-clock helpers for task ids and save timestamps.
//!
//! Browser builds read `Date.now()` and format with the JS locale API;
//! native builds (tests, SSR) use the `time` crate and render UTC.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Locale used for user-facing timestamps.
pub const DISPLAY_LOCALE: &str = "es-ES";

/// Current wall-clock time in milliseconds since the Unix epoch.
#[cfg(feature = "hydrate")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Current wall-clock time in milliseconds since the Unix epoch.
#[cfg(not(feature = "hydrate"))]
#[allow(clippy::cast_precision_loss)]
pub fn now_ms() -> f64 {
    (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as f64
}

/// Millisecond timestamp truncated to an integer, used as a task id.
#[allow(clippy::cast_possible_truncation)]
pub fn timestamp_id() -> i64 {
    now_ms().trunc() as i64
}

/// Render a millisecond timestamp for the "last saved" line.
#[cfg(feature = "hydrate")]
pub fn format_timestamp(ms: f64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
    date.to_locale_string(DISPLAY_LOCALE, &wasm_bindgen::JsValue::UNDEFINED).into()
}

/// Render a millisecond timestamp for the "last saved" line.
#[cfg(not(feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation)]
pub fn format_timestamp(ms: f64) -> String {
    let format = time::macros::format_description!("[day]/[month]/[year], [hour]:[minute]:[second]");
    let nanos = i128::from(ms.trunc() as i64) * 1_000_000;
    let at = match time::OffsetDateTime::from_unix_timestamp_nanos(nanos) {
        Ok(at) => at,
        Err(e) => {
            leptos::logging::warn!("timestamp {ms} is out of range: {e}");
            return String::new();
        }
    };
    match at.format(&format) {
        Ok(text) => text,
        Err(e) => {
            leptos::logging::warn!("failed to format timestamp {ms}: {e}");
            String::new()
        }
    }
}
