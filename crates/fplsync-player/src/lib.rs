//! Player data types for fplsync.
//!
//! This crate provides the two shapes a player takes during a run:
//! - [`RawElement`]: a player as returned by the bootstrap-static endpoint
//! - [`PlayerRecord`]: a flattened row of the published table

#![cfg_attr(test, recursion_limit = "256")]
mod raw;
mod record;

pub use raw::{Bootstrap, RawElement, RawElementType, RawTeam};
pub use record::{COLUMNS, PRICE_SCALE, PlayerRecord, UNKNOWN_NAME, scale_price};
