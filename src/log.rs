//! Logging macros.
//!
//! They expand to nothing unless the `log` feature is enabled.
#![allow(unused_macros, unused_imports)]

/// Logs at `trace` level.
macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!($($tt)*);
    };
}

/// Logs at `debug` level.
macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!($($tt)*);
    };
}

pub(crate) use {debug, trace};
