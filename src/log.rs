//! Optional diagnostics.
//!
//! With the `tracing` feature the macros forward to `tracing`; without it
//! they expand to nothing and their arguments are not evaluated.

#[cfg(feature = "tracing")]
pub(crate) use tracing::trace;

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use trace;
