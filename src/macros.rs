/// Emits a `tracing` event at the given level when the `tracing` feature is
/// enabled, and expands to nothing otherwise.
///
/// ```ignore
/// graph_event!(trace, vertices = 3, "vertex added");
/// ```
macro_rules! graph_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    };
}
