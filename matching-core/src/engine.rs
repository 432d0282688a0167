pub mod book;
pub mod error;
pub mod execution;
pub mod matching;
pub mod order;
pub mod queue;
pub mod stp;
pub mod types;

pub mod prelude {
    pub use super::book::OrderBook;
    pub use super::error::EngineError;
    pub use super::execution::{ExecutionContext, FillRecord, Trader};
    pub use super::matching::MatchingEngine;
    pub use super::order::Order;
    pub use super::queue::OrderQueue;
    pub use super::types::{
        CancelReason, CancelRequest, OrderId, OrderStyle, Price, Quantity, SelfTradePolicy,
        SelfTradePreventionConfig, Side, Symbol, TraderId,
    };
}
