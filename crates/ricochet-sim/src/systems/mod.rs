//! Systems that operate on the live enemy set each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only
//! queries). They own no state; all enemy state lives in components.

pub mod cleanup;
pub mod contact;
pub mod seek;
pub mod snapshot;
