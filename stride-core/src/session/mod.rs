//! Raw session measurements and the summaries derived from them.
//!
//! A [`Session`] holds what was recorded; a [`Summary`] is the read-only
//! snapshot of distance, speed and calories computed from it.

mod session;
mod summary;

pub use session::Session;
pub use summary::Summary;
