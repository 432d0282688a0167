use thiserror::Error;

/// Caller-facing mistakes the engine refuses outright. These are distinct
/// from the notification-carried outcomes in [`crate::engine::types::CancelReason`]
/// (cancel-miss, unfilled market order, self-trade) — those are normal
/// matching outcomes, not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// `submit`/`cancel` referenced a symbol with no registered book.
    #[error("no order book registered for symbol {0:?}")]
    UnknownSymbol(String),
    /// `register_symbol` was called twice for the same symbol.
    #[error("symbol {0:?} is already registered")]
    SymbolAlreadyRegistered(String),
}
