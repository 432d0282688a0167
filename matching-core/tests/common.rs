use matching_core::prelude::*;

pub const SYMBOL: &str = "BTC-USD";

/// A fresh engine with one registered symbol and self-trade prevention
/// disabled.
pub fn engine() -> MatchingEngine {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut engine = MatchingEngine::new(SelfTradePreventionConfig::default());
    engine.register_symbol(SYMBOL).expect("fresh symbol");
    engine
}

/// A fresh engine with self-trade prevention enabled under `policy`.
pub fn engine_with_stp(policy: SelfTradePolicy) -> MatchingEngine {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut engine = MatchingEngine::new(SelfTradePreventionConfig {
        enable: true,
        policy,
    });
    engine.register_symbol(SYMBOL).expect("fresh symbol");
    engine
}

pub fn context(traders: &[&str]) -> ExecutionContext {
    let mut context = ExecutionContext::new();
    context.add_traders(traders.iter().copied());
    context
}

pub fn fills_for(trader: &Trader, side: Side) -> &[FillRecord] {
    match side {
        Side::Buy => &trader.filled_buy,
        Side::Sell => &trader.filled_sell,
    }
}

pub fn total_filled(trader: &Trader, side: Side) -> u64 {
    fills_for(trader, side).iter().map(|fill| fill.quantity).sum()
}
