use std::collections::BTreeMap;

use crate::engine::order::Order;
use crate::engine::queue::OrderQueue;
use crate::engine::types::{OrderId, OrderStyle, Price, Side, TraderId};

/// Per-symbol, two-sided price-level index.
///
/// The bid side is walked best-first from the highest price downward; the
/// ask side from the lowest price upward. Both sides are plain
/// `BTreeMap<Price, OrderQueue>` — the bid side just walks its natural
/// ascending order in reverse rather than carrying a reversed key type,
/// which keeps price comparisons ordinary integer comparisons everywhere
/// else in the engine.
///
/// Invariant: a queue is never left empty in the map — every operation
/// that can drain a queue prunes it before returning.
#[derive(Debug, Default)]
pub struct OrderBook {
    bid: BTreeMap<Price, OrderQueue>,
    ask: BTreeMap<Price, OrderQueue>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn side_map(&self, side: Side) -> &BTreeMap<Price, OrderQueue> {
        match side {
            Side::Buy => &self.bid,
            Side::Sell => &self.ask,
        }
    }

    fn side_map_mut(&mut self, side: Side) -> &mut BTreeMap<Price, OrderQueue> {
        match side {
            Side::Buy => &mut self.bid,
            Side::Sell => &mut self.ask,
        }
    }

    /// Best resting price on `side`, or `None` if that side is empty.
    pub fn best(&self, side: Side) -> Option<Price> {
        match side {
            Side::Buy => self.bid.keys().next_back().copied(),
            Side::Sell => self.ask.keys().next().copied(),
        }
    }

    /// Inserts a limit order. Market orders are rejected silently — they
    /// never rest.
    pub fn insert(&mut self, order: Order) {
        if order.style == OrderStyle::Market {
            return;
        }
        let side = order.side;
        let price = order.price;
        let queue = self.side_map_mut(side).entry(price).or_default();
        if queue.contains_trader(&order.trader_id) {
            queue.update(order);
        } else {
            queue.push(order);
        }
    }

    /// The best (highest priority) level on `side`, ready for the matching
    /// loop to walk. Returns `None` if the side has no resting orders.
    pub fn best_level_mut(&mut self, side: Side) -> Option<(Price, &mut OrderQueue)> {
        match side {
            Side::Buy => self.bid.iter_mut().next_back().map(|(p, q)| (*p, q)),
            Side::Sell => self.ask.iter_mut().next().map(|(p, q)| (*p, q)),
        }
    }

    /// Removes the level at `price` on `side` if its queue has drained to
    /// empty. A no-op if the level still holds resting orders.
    pub fn prune_if_empty(&mut self, side: Side, price: Price) {
        let map = self.side_map_mut(side);
        if map.get(&price).is_some_and(OrderQueue::is_empty) {
            map.remove(&price);
        }
    }

    /// Scans both sides for `(order_id, trader_id)` and removes it,
    /// pruning an emptied level. Linear in levels x queue length —
    /// acceptable because cancellation is not the engine's hot path.
    pub fn remove_order(&mut self, order_id: OrderId, trader_id: &TraderId) -> Option<Order> {
        for side in [Side::Buy, Side::Sell] {
            let map = self.side_map_mut(side);
            let mut hit_price = None;
            let mut removed = None;
            for (&price, queue) in map.iter_mut() {
                if let Some(order) = queue.take_by(order_id, trader_id) {
                    hit_price = Some(price);
                    removed = Some(order);
                    break;
                }
            }
            if let Some(order) = removed {
                self.prune_if_empty(side, hit_price.expect("removed implies hit_price set"));
                return Some(order);
            }
        }
        None
    }

    pub fn num_levels(&self, side: Side) -> usize {
        self.side_map(side).len()
    }

    pub fn clear(&mut self, side: Side) {
        self.side_map_mut(side).clear();
    }

    pub fn is_empty(&self, side: Side) -> bool {
        self.side_map(side).is_empty()
    }
}
