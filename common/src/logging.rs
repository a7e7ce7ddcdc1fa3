//! Logging macros shared by every crate that talks to the terminal.
//!
//! All of them emit `tracing` events; the binary decides how they look.

/// Target used by [`success!`](crate::success) so formatters can tell it apart from plain info.
pub const SUCCESS_TARGET: &str = "clinic::success";

/// Target used for raw lines that should be printed without a status symbol.
pub const PRINT_TARGET: &str = "clinic::print";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::logging::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!($($arg)*)
    };
}
