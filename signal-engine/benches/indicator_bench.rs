use criterion::{black_box, criterion_group, criterion_main, Criterion};
use signal_engine::backtest::BacktestEngine;
use signal_engine::config::{AccountConfig, BacktestConfig, Timeframe};
use signal_engine::data::Candle;
use signal_engine::indicators::{IndicatorEngine, IndicatorSeries};

fn candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let close = 100.0 + (t * 0.05).sin() * 8.0 + (t * 0.31).cos() * 1.5;
            let open = close - (t * 0.7).sin() * 0.8;
            Candle::new(
                i as i64 * 60_000,
                open,
                open.max(close) + 0.4,
                open.min(close) - 0.4,
                close,
                1000.0 + (t * 0.13).sin().abs() * 500.0,
            )
        })
        .collect()
}

fn bench_snapshot(c: &mut Criterion) {
    let history = candles(2000);
    let tf = Timeframe::new("5m");
    c.bench_function("snapshot_2000", |b| {
        b.iter(|| IndicatorEngine::snapshot(black_box(&history), &tf))
    });
    c.bench_function("series_2000", |b| {
        b.iter(|| IndicatorSeries::compute(black_box(&history), &tf))
    });
}

fn bench_backtest(c: &mut Criterion) {
    let history = candles(2000);
    let engine = BacktestEngine::new("BTC/USDT", Timeframe::new("1h"), AccountConfig::default());
    let config = BacktestConfig::default();
    c.bench_function("backtest_2000", |b| {
        b.iter(|| engine.simulate(black_box(&history), &config))
    });
}

criterion_group!(benches, bench_snapshot, bench_backtest);
criterion_main!(benches);
