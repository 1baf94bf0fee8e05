//! Logging macros that compile to nothing unless the `log` feature is on.
//!
//! Arguments are not evaluated when logging is disabled, so they must not have
//! side effects.

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        {
            log_crate::trace!(target: "bidimap", $($arg)*);
        }
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        {
            log_crate::debug!(target: "bidimap", $($arg)*);
        }
    };
}

pub(crate) use {debug, trace};
