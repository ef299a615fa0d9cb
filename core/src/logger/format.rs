use std::time::Duration;

/// Renders an elapsed duration: integer milliseconds below one second,
/// seconds with two decimals from there up.
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed.as_millis() < 1000 {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

/// Local wall-clock time as `HH:MM:SS`.
pub(crate) fn local_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
