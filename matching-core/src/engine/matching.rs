//! The matching engine: per-symbol order books, the order-id counter, and
//! the limit/market matching loops that tie them to self-trade prevention
//! and the execution context.

use std::collections::HashMap;

use crate::engine::book::OrderBook;
use crate::engine::error::EngineError;
use crate::engine::execution::ExecutionContext;
use crate::engine::order::Order;
use crate::engine::queue::OrderQueue;
use crate::engine::stp;
use crate::engine::types::{
    CancelReason, CancelRequest, OrderId, Price, Quantity, SelfTradePreventionConfig, Side, Symbol,
    TraderId,
};

/// Owns every symbol's order book and serializes access to the shared
/// order-id counter and self-trade policy.
///
/// Not reentrant: a caller must not submit or cancel an order from inside
/// a notification callback triggered by another submit/cancel. Orders for
/// unregistered symbols are rejected rather than auto-creating a book.
pub struct MatchingEngine {
    books: HashMap<Symbol, OrderBook>,
    next_order_id: OrderId,
    stp: SelfTradePreventionConfig,
}

impl MatchingEngine {
    pub fn new(stp: SelfTradePreventionConfig) -> Self {
        Self {
            books: HashMap::new(),
            next_order_id: 0,
            stp,
        }
    }

    /// Registers a fresh, empty order book for `symbol`.
    pub fn register_symbol(&mut self, symbol: impl Into<Symbol>) -> Result<(), EngineError> {
        let symbol = symbol.into();
        if self.books.contains_key(&symbol) {
            return Err(EngineError::SymbolAlreadyRegistered(symbol));
        }
        self.books.insert(symbol, OrderBook::new());
        Ok(())
    }

    /// Registers every symbol not already known; symbols already
    /// registered are left untouched rather than rejected.
    pub fn add_symbols<I, S>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        for symbol in symbols {
            self.books.entry(symbol.into()).or_insert_with(OrderBook::new);
        }
    }

    pub fn order_book(&self, symbol: &str) -> Option<&OrderBook> {
        self.books.get(symbol)
    }

    /// Submits a limit order: matches against the opposite side first,
    /// then rests whatever quantity remains. Orders with a zero price or
    /// zero quantity are silently dropped — the returned id is the
    /// counter's current value, with no order actually allocated.
    pub fn submit_limit(
        &mut self,
        context: &mut ExecutionContext,
        side: Side,
        trader_id: impl Into<TraderId>,
        symbol: impl Into<Symbol>,
        price: Price,
        quantity: Quantity,
    ) -> Result<OrderId, EngineError> {
        if price == 0 || quantity == 0 {
            return Ok(self.next_order_id);
        }

        let symbol = symbol.into();
        let book = self
            .books
            .get_mut(&symbol)
            .ok_or_else(|| EngineError::UnknownSymbol(symbol.clone()))?;

        let order_id = self.next_order_id;
        self.next_order_id += 1;
        let mut order = Order::limit(side, trader_id.into(), order_id, symbol, price, quantity);
        tracing::debug!(
            order_id,
            trader_id = %order.trader_id,
            symbol = %order.symbol,
            price,
            quantity,
            side = ?side,
            "submit limit order"
        );

        match_limit_order(book, context, self.stp, &mut order);

        if !order.is_filled() {
            let (side, trader_id, order_id, symbol, price, quantity) = (
                order.side,
                order.trader_id.clone(),
                order.order_id,
                order.symbol.clone(),
                order.price,
                order.quantity,
            );
            book.insert(order);
            context.notify_open(side, &trader_id, order_id, &symbol, price, quantity);
        }

        Ok(order_id)
    }

    /// Submits a market order: matches against the opposite side at
    /// whatever prices are resting there, with no limit of its own.
    /// Any quantity left unmatched is cancelled rather than rested.
    pub fn submit_market(
        &mut self,
        context: &mut ExecutionContext,
        side: Side,
        trader_id: impl Into<TraderId>,
        symbol: impl Into<Symbol>,
        quantity: Quantity,
    ) -> Result<OrderId, EngineError> {
        if quantity == 0 {
            return Ok(self.next_order_id);
        }

        let symbol = symbol.into();
        let book = self
            .books
            .get_mut(&symbol)
            .ok_or_else(|| EngineError::UnknownSymbol(symbol.clone()))?;

        let order_id = self.next_order_id;
        self.next_order_id += 1;
        let trader_id = trader_id.into();
        let mut order = Order::market(side, trader_id, order_id, symbol, 0, quantity);
        tracing::debug!(
            order_id,
            trader_id = %order.trader_id,
            symbol = %order.symbol,
            quantity,
            side = ?side,
            "submit market order"
        );

        match_market_order(book, context, self.stp, &mut order);

        if !order.is_filled() {
            context.notify_cancel(
                order.side,
                order.style,
                &order.trader_id,
                order.order_id,
                &order.symbol,
                order.price,
                order.quantity,
                CancelReason::NoOrderToMatchMarketOrder,
            );
        }

        Ok(order_id)
    }

    /// Cancels a resting order. Emits CANCEL on success, CANCEL_REJECT if
    /// no matching resting order was found for that trader.
    pub fn cancel(
        &mut self,
        context: &mut ExecutionContext,
        request: CancelRequest,
    ) -> Result<(), EngineError> {
        let book = self
            .books
            .get_mut(&request.symbol)
            .ok_or_else(|| EngineError::UnknownSymbol(request.symbol.clone()))?;

        match book.remove_order(request.order_id, &request.trader_id) {
            Some(order) => context.notify_cancel(
                order.side,
                order.style,
                &order.trader_id,
                order.order_id,
                &order.symbol,
                order.price,
                order.quantity,
                CancelReason::CancelRequest,
            ),
            None => context.notify_cancel_reject(&request.trader_id, request.order_id),
        }
        Ok(())
    }
}

/// Matches `aggressor` against resting orders priced at or better than its
/// limit, walking price levels best-first until either the aggressor is
/// filled, it is cancelled by self-trade prevention, or no resting level
/// crosses its limit anymore.
fn match_limit_order(
    book: &mut OrderBook,
    context: &mut ExecutionContext,
    stp: SelfTradePreventionConfig,
    aggressor: &mut Order,
) {
    let opposite = aggressor.side.opposite();
    let mut cancelled = false;

    while aggressor.quantity > 0 {
        let Some(best_price) = book.best(opposite) else {
            break;
        };
        let crosses = match aggressor.side {
            Side::Buy => aggressor.price >= best_price,
            Side::Sell => aggressor.price <= best_price,
        };
        if !crosses {
            break;
        }

        let (level_price, queue) = book
            .best_level_mut(opposite)
            .expect("book.best just confirmed a level exists");
        if drain_level(queue, context, stp, opposite, aggressor) {
            cancelled = true;
        }
        book.prune_if_empty(opposite, level_price);

        if cancelled {
            break;
        }
    }

    if aggressor.is_filled() && !cancelled {
        context.notify_all_filled(&aggressor.trader_id, aggressor.order_id);
    }
}

/// Matches `aggressor` against resting orders with no price limit of its
/// own — it takes whatever is resting, level by level, until filled,
/// cancelled by self-trade prevention, or the book runs dry.
fn match_market_order(
    book: &mut OrderBook,
    context: &mut ExecutionContext,
    stp: SelfTradePreventionConfig,
    aggressor: &mut Order,
) {
    let opposite = aggressor.side.opposite();
    let mut cancelled = false;

    while aggressor.quantity > 0 {
        let Some((level_price, queue)) = book.best_level_mut(opposite) else {
            break;
        };
        aggressor.price = level_price;
        if drain_level(queue, context, stp, opposite, aggressor) {
            cancelled = true;
        }
        book.prune_if_empty(opposite, level_price);

        if cancelled {
            break;
        }
    }

    if aggressor.is_filled() && !cancelled {
        context.notify_all_filled(&aggressor.trader_id, aggressor.order_id);
    }
}

/// Drains `queue` against `aggressor` until the aggressor is out of
/// quantity, the queue empties, or self-trade prevention cancels the
/// aggressor. Returns whether the aggressor was cancelled.
fn drain_level(
    queue: &mut OrderQueue,
    context: &mut ExecutionContext,
    stp: SelfTradePreventionConfig,
    book_side: Side,
    aggressor: &mut Order,
) -> bool {
    while aggressor.quantity > 0 && !queue.is_empty() {
        let self_trade = stp.enable
            && queue
                .front()
                .is_some_and(|head| head.trader_id == aggressor.trader_id);
        if self_trade {
            if stp::dispatch(stp.policy, context, book_side, queue, aggressor) {
                return true;
            }
            continue;
        }
        fill_one(queue, context, aggressor);
    }
    false
}

/// Executes a single fill between the queue's head and the aggressor,
/// notifying both sides. The resting price always wins: matching only
/// reaches here once the aggressor's limit has crossed it, so the
/// resting price already dominates the aggressor's for both sides.
fn fill_one(queue: &mut OrderQueue, context: &mut ExecutionContext, aggressor: &mut Order) {
    let head = queue.front().expect("caller checked non-empty");
    let matched = head.quantity.min(aggressor.quantity);
    let fill_price = head.price;
    let (head_side, head_style, head_trader, head_order_id, head_symbol) = (
        head.side,
        head.style,
        head.trader_id.clone(),
        head.order_id,
        head.symbol.clone(),
    );

    context.notify_fill(
        head_side,
        head_style,
        &head_trader,
        head_order_id,
        &head_symbol,
        fill_price,
        matched,
    );
    queue.fill_front(matched);
    if queue.front().is_some_and(Order::is_filled) {
        context.notify_all_filled(&head_trader, head_order_id);
        queue.pop_front();
    }

    context.notify_fill(
        aggressor.side,
        aggressor.style,
        &aggressor.trader_id,
        aggressor.order_id,
        &aggressor.symbol,
        fill_price,
        matched,
    );
    aggressor.quantity -= matched;
}
