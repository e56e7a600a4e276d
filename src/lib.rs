//! Decoder for a sports-data provider's private feed format: turns the
//! provider's delimited payloads into typed match entities (score, stats,
//! events timeline, pre-match odds, head-to-head history) and assembles
//! the six per-match payloads into one `Match` aggregate.

pub mod assemble;
pub mod codes;
pub mod error;
pub mod events;
pub mod feed;
pub mod fetch;
pub mod general;
pub mod header;
pub mod history;
pub mod model;
pub mod odds;
pub mod sections;
pub mod stats;
