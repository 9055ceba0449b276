/// Evaluates `$block` and logs how long it took at debug level.
#[macro_export]
macro_rules! timer_debug {
    ($label:literal, $block:expr) => {{
        let started_at = jiff::Timestamp::now();
        let result = $block;
        let elapsed = jiff::Timestamp::now().duration_since(started_at);

        tracing::debug!(?elapsed, "{} done", $label);

        result
    }};
}
