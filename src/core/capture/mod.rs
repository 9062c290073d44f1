//! Email-capture domain: the submission flow state machine and the
//! server endpoint it ultimately talks to.

#[cfg(feature = "ssr")]
pub mod api;
mod machine;

pub use machine::*;
