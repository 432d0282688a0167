//! A single-venue, single-threaded, price-time-priority limit order book
//! and matching engine.
//!
//! Every operation goes through [`engine::matching::MatchingEngine`] and
//! reports outcomes through an [`engine::execution::ExecutionContext`]
//! passed in by the caller. The engine is not reentrant: callers must not
//! submit or cancel an order from inside a notification triggered by
//! another call.

pub mod engine;

pub use engine::prelude;
