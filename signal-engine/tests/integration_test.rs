//! Integration tests for signal-engine

use signal_engine::backtest::BacktestEngine;
use signal_engine::config::{AccountConfig, BacktestConfig, Timeframe};
use signal_engine::data::Candle;
use signal_engine::indicators::{IndicatorEngine, IndicatorSeries, IndicatorSnapshot};
use signal_engine::lifecycle::{ChannelNotifier, TracingNotifier};
use signal_engine::session::LiveSession;
use signal_engine::strategy::{Direction, Outcome, SignalStatus, Strength};

/// Deterministic pseudo-random walk with enough swings to trigger signals
fn create_test_candles(count: usize, base_price: f64) -> Vec<Candle> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((state >> 33) as f64) / ((1u64 << 31) as f64) - 0.5
    };

    let mut price = base_price;
    let mut candles = Vec::with_capacity(count);
    for i in 0..count {
        let drift = (i as f64 / 40.0).sin() * 0.004;
        let open = price;
        let close = open * (1.0 + drift + next() * 0.02);
        let high = open.max(close) * (1.0 + next().abs() * 0.006);
        let low = open.min(close) * (1.0 - next().abs() * 0.006);
        let volume = 1000.0 * (1.0 + next().abs() * 2.0);
        candles.push(Candle::new(i as i64 * 900_000, open, high, low, close, volume));
        price = close;
    }
    candles
}

#[test]
fn test_short_history_neutral_defaults() {
    let candles = create_test_candles(29, 100.0);
    for len in 1..=29 {
        let window = &candles[..len];
        let last = window[len - 1];
        for tf in ["1m", "1h"] {
            let snapshot = IndicatorEngine::snapshot(window, &Timeframe::new(tf));
            assert_eq!(snapshot, IndicatorSnapshot::neutral(last.close, last.volume));
            assert_eq!(snapshot.stoch_rsi.k, 50.0);
            assert_eq!(snapshot.stoch_rsi.d, 50.0);
            assert_eq!(snapshot.bandwidth, 0.0);
            assert_eq!(snapshot.ema9, last.close);
        }
    }
}

#[test]
fn test_indicator_engine_deterministic() {
    let candles = create_test_candles(500, 250.0);
    let tf = Timeframe::new("15m");
    let first = IndicatorEngine::snapshot(&candles, &tf);
    let second = IndicatorEngine::snapshot(&candles, &tf);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(first.rsi.to_bits(), second.rsi.to_bits());
    assert_eq!(first.adx.to_bits(), second.adx.to_bits());
}

#[test]
fn test_live_and_backtest_see_same_indicators() {
    let candles = create_test_candles(260, 100.0);
    let tf = Timeframe::new("4h");
    let series = IndicatorSeries::compute(&candles, &tf).unwrap();
    for i in [35, 120, 199, 200, 259] {
        assert_eq!(series.snapshot_at(i), IndicatorEngine::snapshot(&candles[..=i], &tf));
    }
}

#[test]
fn test_backtest_idempotent() {
    let candles = create_test_candles(800, 100.0);
    let engine = BacktestEngine::new("BTC/USDT", Timeframe::new("1h"), AccountConfig::default());
    let config = BacktestConfig::new(5000.0, 2.0, Some(600));
    let first = engine.simulate(&candles, &config).unwrap();
    let second = engine.simulate(&candles, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_backtest_bar_through_target_and_stop_wins() {
    let mut candles = create_test_candles(1500, 100.0);
    let engine = BacktestEngine::new("BTC/USDT", Timeframe::new("1h"), AccountConfig::default());
    let config = BacktestConfig::default();

    let baseline = engine.simulate(&candles, &config).unwrap();
    let trade = baseline.trades.last().unwrap().clone();
    let opened_at: usize = trade.id.strip_prefix("bt-").unwrap().parse().unwrap();

    // the bar after entry spans both the stop and the target
    let next = &mut candles[opened_at + 1];
    next.high = trade.target_price.max(trade.stop_loss) * 1.1;
    next.low = trade.target_price.min(trade.stop_loss) * 0.9;
    let exit_time = next.time;

    let result = engine.simulate(&candles, &config).unwrap();
    let replayed = result.trades.iter().find(|t| t.id == trade.id).unwrap();
    assert_eq!(replayed.outcome, Some(Outcome::Win));
    assert_eq!(replayed.completed_at, Some(exit_time));
    assert!(replayed.pnl > 0.0);
}

#[test]
fn test_backtest_trades_and_confidence() {
    let candles = create_test_candles(1500, 100.0);
    for tf in ["5m", "1h"] {
        let engine = BacktestEngine::new("BTC/USDT", Timeframe::new(tf), AccountConfig::default());
        let result = engine.simulate(&candles, &BacktestConfig::default()).unwrap();

        assert!(!result.trades.is_empty(), "no trades on {}", tf);
        assert_eq!(result.metrics.total_trades, result.metrics.wins + result.metrics.losses);
        for trade in &result.trades {
            assert!((10..=99).contains(&trade.confidence));
            assert_eq!(trade.strength, Strength::from_score(trade.confidence));
            assert_eq!(trade.status, SignalStatus::Completed);
            match trade.signal_type {
                Direction::Buy => assert!(trade.stop_loss < trade.entry_price),
                Direction::Sell => assert!(trade.stop_loss > trade.entry_price),
            }
        }
        // equity curve is ordered in time
        for pair in result.equity_curve.windows(2) {
            assert!(pair[0].time <= pair[1].time);
        }
    }
}

#[test]
fn test_backtest_limit_clamps_to_history() {
    let candles = create_test_candles(400, 100.0);
    let engine = BacktestEngine::new("ETH/USDT", Timeframe::new("15m"), AccountConfig::default());
    let whole = engine.simulate(&candles, &BacktestConfig::default()).unwrap();
    let clamped = engine
        .simulate(&candles, &BacktestConfig::default().with_candle_limit(10_000))
        .unwrap();
    assert_eq!(whole, clamped);

    let limited = engine
        .simulate(&candles, &BacktestConfig::default().with_candle_limit(100))
        .unwrap();
    assert_eq!(limited.equity_curve[0].time, candles[300].time_secs());
}

#[test]
fn test_backtest_rejects_bad_input() {
    let engine = BacktestEngine::new("ETH/USDT", Timeframe::new("15m"), AccountConfig::default());
    assert!(engine
        .simulate(&create_test_candles(59, 100.0), &BacktestConfig::default())
        .is_none());
    assert!(engine
        .simulate(&create_test_candles(300, 100.0), &BacktestConfig::new(-1.0, 1.0, None))
        .is_none());
    assert!(engine
        .simulate(
            &create_test_candles(300, 100.0),
            &BacktestConfig::default().with_candle_limit(50)
        )
        .is_none());
}

#[test]
fn test_live_session_replay() {
    let candles = create_test_candles(1200, 100.0);
    let (notifier, mut notifications) = ChannelNotifier::channel();
    let mut session = LiveSession::new(
        "BTC/USDT",
        Timeframe::new("5m"),
        AccountConfig::default(),
        Box::new(notifier),
    );
    session.seed(candles[..200].to_vec());

    let mut accepted = 0;
    for candle in &candles[200..] {
        // forming update first, then the final values for the same open time
        let forming = Candle::new(candle.time, candle.open, candle.open, candle.open, candle.open, 0.0);
        if session.on_candle(forming).is_some() {
            accepted += 1;
        }
        assert!(session.on_candle(*candle).is_none(), "detection on a replaced candle");

        let active = session.signals().active();
        let (buys, sells) = active.fold((0, 0), |(b, s), sig| match sig.signal_type {
            Direction::Buy => (b + 1, s),
            Direction::Sell => (b, s + 1),
        });
        assert!(buys <= 1 && sells <= 1);

        let perf = session.performance();
        assert_eq!(perf.total_trades, perf.wins + perf.losses);
    }

    assert!(accepted > 0);
    let mut delivered = 0;
    while notifications.try_recv().is_ok() {
        delivered += 1;
    }
    assert_eq!(delivered, accepted);

    let completed = session.signals().completed().count() as u32;
    assert_eq!(completed, session.performance().total_trades);
    for signal in session.signals().completed() {
        assert!(signal.outcome.is_some());
        assert!(signal.completed_at.is_some());
    }
}

#[test]
fn test_session_rejects_stale_candles() {
    let candles = create_test_candles(100, 100.0);
    let mut session = LiveSession::new(
        "BTC/USDT",
        Timeframe::new("1h"),
        AccountConfig::default(),
        Box::new(TracingNotifier),
    );
    session.seed(candles.clone());
    assert!(session.on_candle(candles[10]).is_none());
    assert_eq!(session.history().len(), 100);
    assert_eq!(session.history().last(), candles.last());
}

#[test]
fn test_switch_pair_resets_state() {
    let candles = create_test_candles(600, 100.0);
    let mut session = LiveSession::new(
        "BTC/USDT",
        Timeframe::new("5m"),
        AccountConfig::default(),
        Box::new(TracingNotifier),
    );
    session.seed(candles[..100].to_vec());
    for candle in &candles[100..] {
        session.on_candle(*candle);
    }
    assert!(session.run_backtest(&BacktestConfig::default()).is_some());

    session.switch_pair("ETH/USDT", Timeframe::new("1h"));
    assert_eq!(session.symbol(), "ETH/USDT");
    assert!(session.history().is_empty());
    assert!(session.signals().signals().is_empty());
    assert_eq!(session.performance().total_trades, 0);
    assert!(session.price().is_none());
    assert!(session.run_backtest(&BacktestConfig::default()).is_none());
}
