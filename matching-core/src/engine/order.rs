use crate::engine::types::{OrderId, OrderStyle, Price, Quantity, Side, Symbol, TraderId};

/// `Order` represents a single submission: immutable identity plus a
/// mutable remaining quantity that matching deducts from in place.
///
/// For `OrderStyle::Market` orders, `price` is informational only and is
/// never used as a resting price — market orders never rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub side: Side,
    pub style: OrderStyle,
    pub trader_id: TraderId,
    pub order_id: OrderId,
    pub symbol: Symbol,
    pub price: Price,
    pub quantity: Quantity,
}

impl Order {
    /// Builds a new limit order.
    pub fn limit(
        side: Side,
        trader_id: impl Into<TraderId>,
        order_id: OrderId,
        symbol: impl Into<Symbol>,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            side,
            style: OrderStyle::Limit,
            trader_id: trader_id.into(),
            order_id,
            symbol: symbol.into(),
            price,
            quantity,
        }
    }

    /// Builds a new market order. `price` is informational (used only for
    /// notifications and STP bookkeeping as matching walks the book).
    pub fn market(
        side: Side,
        trader_id: impl Into<TraderId>,
        order_id: OrderId,
        symbol: impl Into<Symbol>,
        price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            side,
            style: OrderStyle::Market,
            trader_id: trader_id.into(),
            order_id,
            symbol: symbol.into(),
            price,
            quantity,
        }
    }

    /// `true` once the order has no quantity left to match.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }
}
