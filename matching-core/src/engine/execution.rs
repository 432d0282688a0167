use std::collections::HashMap;

use crate::engine::types::{CancelReason, OrderId, OrderStyle, Price, Quantity, Side, Symbol, TraderId};

/// One fill against a resting or aggressor order, recorded in arrival
/// order of the partial fills (not indexed by the originating order —
/// a partially filled order contributes one entry per fill).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillRecord {
    pub order_id: OrderId,
    pub symbol: Symbol,
    pub price: Price,
    pub quantity: Quantity,
}

/// Per-trader lifecycle bookkeeping: append-only fill history plus the
/// set of order ids the trader currently has resting in the book.
///
/// The open-side lists mirror what is actually resting: an order id is
/// pushed on OPEN and removed on ALL_FILLED or CANCEL.
#[derive(Debug, Default)]
pub struct Trader {
    pub filled_buy: Vec<FillRecord>,
    pub filled_sell: Vec<FillRecord>,
    open_buy: Vec<OrderId>,
    open_sell: Vec<OrderId>,
}

impl Trader {
    fn record_fill(&mut self, side: Side, record: FillRecord) {
        match side {
            Side::Buy => self.filled_buy.push(record),
            Side::Sell => self.filled_sell.push(record),
        }
    }

    fn record_open(&mut self, side: Side, order_id: OrderId) {
        match side {
            Side::Buy => self.open_buy.push(order_id),
            Side::Sell => self.open_sell.push(order_id),
        }
    }

    fn forget_open(&mut self, side: Side, order_id: OrderId) {
        match side {
            Side::Buy => self.open_buy.retain(|&id| id != order_id),
            Side::Sell => self.open_sell.retain(|&id| id != order_id),
        }
    }

    /// Used for ALL_FILLED, which carries no side: the order could only
    /// have been resting on one side, so removing from both is safe.
    fn forget_open_either(&mut self, order_id: OrderId) {
        self.open_buy.retain(|&id| id != order_id);
        self.open_sell.retain(|&id| id != order_id);
    }

    pub fn open_orders(&self, side: Side) -> &[OrderId] {
        match side {
            Side::Buy => &self.open_buy,
            Side::Sell => &self.open_sell,
        }
    }
}

/// Registry of traders and the fan-out point for the engine's lifecycle
/// notifications. Unknown trader ids are dropped silently — delivery is
/// best-effort, the engine treats it as a side channel.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    traders: HashMap<TraderId, Trader>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_traders<I, T>(&mut self, trader_ids: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<TraderId>,
    {
        for id in trader_ids {
            self.traders.entry(id.into()).or_default();
        }
    }

    pub fn trader(&self, trader_id: &str) -> Option<&Trader> {
        self.traders.get(trader_id)
    }

    pub fn notify_fill(
        &mut self,
        side: Side,
        _style: OrderStyle,
        trader_id: &str,
        order_id: OrderId,
        symbol: &str,
        price: Price,
        quantity: Quantity,
    ) {
        tracing::trace!(trader_id, order_id, price, quantity, "fill");
        if let Some(trader) = self.traders.get_mut(trader_id) {
            trader.record_fill(
                side,
                FillRecord {
                    order_id,
                    symbol: symbol.to_string(),
                    price,
                    quantity,
                },
            );
        }
    }

    pub fn notify_all_filled(&mut self, trader_id: &str, order_id: OrderId) {
        tracing::trace!(trader_id, order_id, "all_filled");
        if let Some(trader) = self.traders.get_mut(trader_id) {
            trader.forget_open_either(order_id);
        }
    }

    pub fn notify_open(
        &mut self,
        side: Side,
        trader_id: &str,
        order_id: OrderId,
        _symbol: &str,
        price: Price,
        quantity: Quantity,
    ) {
        tracing::trace!(trader_id, order_id, price, quantity, "open");
        if let Some(trader) = self.traders.get_mut(trader_id) {
            trader.record_open(side, order_id);
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn notify_cancel(
        &mut self,
        side: Side,
        _style: OrderStyle,
        trader_id: &str,
        order_id: OrderId,
        _symbol: &str,
        _price: Price,
        _quantity: Quantity,
        reason: CancelReason,
    ) {
        tracing::debug!(trader_id, order_id, ?reason, "cancel");
        if let Some(trader) = self.traders.get_mut(trader_id) {
            trader.forget_open(side, order_id);
        }
    }

    pub fn notify_cancel_reject(&mut self, trader_id: &str, order_id: OrderId) {
        tracing::debug!(trader_id, order_id, "cancel_reject");
        // Unknown or already-gone orders don't require any bookkeeping update.
    }
}
