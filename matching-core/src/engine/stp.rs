//! Self-trade prevention: what happens when an aggressor would cross
//! against a resting order from the same trader.

use crate::engine::execution::ExecutionContext;
use crate::engine::order::Order;
use crate::engine::queue::OrderQueue;
use crate::engine::types::{CancelReason, Side, SelfTradePolicy};

/// Dispatches the configured self-trade policy for a single collision
/// between `aggressor` and the resting head of `queue`.
///
/// `book_side` is the side `queue` rests on; it must differ from
/// `aggressor.side` — an aggressor can only collide with the opposite
/// book.
///
/// Returns `true` if the aggressor itself was cancelled (`CancelActive`,
/// `CancelBoth`) so the matching loop knows a zeroed-out quantity means
/// "cancelled", not "filled" — the two must not both emit a notification.
pub fn dispatch(
    policy: SelfTradePolicy,
    context: &mut ExecutionContext,
    book_side: Side,
    queue: &mut OrderQueue,
    aggressor: &mut Order,
) -> bool {
    debug_assert_ne!(
        book_side, aggressor.side,
        "self-trade dispatch requires the book side to differ from the aggressor side"
    );
    tracing::debug!(
        trader_id = %aggressor.trader_id,
        order_id = aggressor.order_id,
        ?policy,
        "self-trade detected"
    );
    match policy {
        SelfTradePolicy::CancelActive => {
            cancel_active(context, aggressor);
            true
        }
        SelfTradePolicy::CancelBoth => {
            cancel_both(context, book_side, queue, aggressor);
            true
        }
        SelfTradePolicy::CancelPassive => {
            cancel_passive(context, book_side, queue);
            false
        }
    }
}

/// Cancels the aggressor; the resting head is left untouched.
fn cancel_active(context: &mut ExecutionContext, aggressor: &mut Order) {
    context.notify_cancel(
        aggressor.side,
        aggressor.style,
        &aggressor.trader_id,
        aggressor.order_id,
        &aggressor.symbol,
        aggressor.price,
        aggressor.quantity,
        CancelReason::SelfTrade,
    );
    aggressor.quantity = 0;
}

/// Cancels the resting head and pops it; the aggressor keeps matching.
fn cancel_passive(context: &mut ExecutionContext, book_side: Side, queue: &mut OrderQueue) {
    let head = queue.front().expect("dispatch requires a non-empty queue");
    context.notify_cancel(
        book_side,
        head.style,
        &head.trader_id,
        head.order_id,
        &head.symbol,
        head.price,
        head.quantity,
        CancelReason::SelfTrade,
    );
    queue.pop_front();
}

/// Cancels both the aggressor and the resting head.
fn cancel_both(
    context: &mut ExecutionContext,
    book_side: Side,
    queue: &mut OrderQueue,
    aggressor: &mut Order,
) {
    cancel_active(context, aggressor);
    let head = queue.front().expect("dispatch requires a non-empty queue");
    context.notify_cancel(
        book_side,
        head.style,
        &head.trader_id,
        head.order_id,
        &head.symbol,
        head.price,
        head.quantity,
        CancelReason::SelfTrade,
    );
    queue.pop_front();
}
