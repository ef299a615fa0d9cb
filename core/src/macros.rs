/// Logs values labeled with the names they were written with at the call
/// site: `smart_log!(logger, user_name, age)`.
///
/// Expands to a single façade call, with debuginfo collapsed to the
/// invocation line so the locator and resolver both see the caller's own
/// source line.
#[macro_export]
#[collapse_debuginfo(yes)]
macro_rules! smart_log {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        ($logger).log_invoked_as(
            "smart_log!",
            1,
            &[$(&$value as &dyn ::std::fmt::Debug),*],
        )
    };
}

/// Times a block and logs the elapsed duration under `label`, yielding
/// the block's value: `let data = measure!(logger, "load", { read() });`
#[macro_export]
macro_rules! measure {
    ($logger:expr, $label:expr, $block:block) => {{
        let __started = ::std::time::Instant::now();
        let __value = $block;
        ($logger).note_elapsed($label, __started.elapsed());
        __value
    }};
}
