//! Structured log helpers.
//!
//! Every Packet-Relay log line carries a `component` field so log pipelines
//! can split verifier and gateway output without parsing targets.

/// Helper to create structured log entries with consistent formatting.
#[macro_export]
macro_rules! log_event {
    (info, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (warn, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (error, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (debug, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log an administrator action with the acting caller attached.
#[macro_export]
macro_rules! log_admin_event {
    ($component:expr, $msg:expr, $caller:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = $component,
            caller = %$caller,
            $($($field)*,)?
            $msg
        )
    };
}
