//! Signal lifecycle manager
//!
//! Owns the signals of one (symbol, timeframe) pair. New candidates are
//! accepted unless an ACTIVE signal with the same direction already exists;
//! every price tick marks active signals to market and closes those whose
//! target or stop was reached.

use crate::config::{AccountConfig, Timeframe};
use crate::lifecycle::{SignalNotification, SignalNotifier};
use crate::portfolio::PerformanceMetrics;
use crate::strategy::{Candidate, Direction, Outcome, Signal};
use tracing::{debug, info};
use uuid::Uuid;

pub struct SignalManager {
    account: AccountConfig,
    signals: Vec<Signal>,
    performance: PerformanceMetrics,
    notifier: Box<dyn SignalNotifier>,
}

impl SignalManager {
    pub fn new(account: AccountConfig, notifier: Box<dyn SignalNotifier>) -> Self {
        Self {
            account,
            signals: Vec::new(),
            performance: PerformanceMetrics::default(),
            notifier,
        }
    }

    /// All managed signals, oldest first
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn active(&self) -> impl Iterator<Item = &Signal> {
        self.signals.iter().filter(|s| s.is_active())
    }

    pub fn completed(&self) -> impl Iterator<Item = &Signal> {
        self.signals.iter().filter(|s| !s.is_active())
    }

    pub fn performance(&self) -> &PerformanceMetrics {
        &self.performance
    }

    pub fn get(&self, id: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.id == id)
    }

    /// An ACTIVE signal already holds this (symbol, timeframe, direction)
    pub fn has_active(&self, symbol: &str, timeframe: &Timeframe, direction: Direction) -> bool {
        self.active().any(|s| {
            s.symbol == symbol && &s.timeframe == timeframe && s.signal_type == direction
        })
    }

    /// Accept a classifier candidate as a new ACTIVE signal.
    ///
    /// Returns `None` when suppressed by an existing ACTIVE signal.
    pub fn accept(
        &mut self,
        symbol: &str,
        timeframe: &Timeframe,
        candidate: Candidate,
        now: i64,
    ) -> Option<&Signal> {
        if self.has_active(symbol, timeframe, candidate.direction) {
            debug!(
                "Suppressing {} {} on {} {}: active signal exists",
                candidate.strategy, candidate.direction, symbol, timeframe
            );
            return None;
        }

        let signal = Signal::from_candidate(
            Uuid::new_v4().to_string(),
            symbol,
            timeframe.clone(),
            candidate,
            now,
        );
        info!(
            "📊 {} {} {} via {} @ {:.4} (target {:.4}, stop {:.4}, confidence {})",
            signal.symbol,
            signal.timeframe,
            signal.signal_type,
            signal.strategy,
            signal.entry_price,
            signal.target_price,
            signal.stop_loss,
            signal.confidence
        );
        self.notifier.notify(SignalNotification::from(&signal));
        self.signals.push(signal);
        self.signals.last()
    }

    /// Mark active signals to `price` and close those that hit target or stop.
    ///
    /// Returns the ids of signals completed by this tick.
    pub fn on_tick(&mut self, price: f64, now: i64) -> Vec<String> {
        let risk_usd = self.account.risk_per_trade_usd();
        let mut completed = Vec::new();

        for signal in self.signals.iter_mut().filter(|s| s.is_active()) {
            signal.current_price = price;
            signal.pnl = signal.pnl_at(price);

            let Some(outcome) = signal.exit_at(price) else {
                continue;
            };
            if !signal.complete(outcome, now) {
                continue;
            }

            let amount = match outcome {
                Outcome::Win => risk_usd * signal.risk_analysis.risk_reward_ratio,
                Outcome::Loss => -risk_usd,
            };
            self.performance.record(outcome, amount);
            info!(
                "✅ {} {} closed as {:?} at {:.4} ({:+.2}%)",
                signal.symbol, signal.signal_type, outcome, price, signal.pnl
            );
            completed.push(signal.id.clone());
        }

        let unrealized: f64 = self
            .active()
            .map(|s| s.pnl / 100.0 * s.risk_analysis.recommended_position_size_usd)
            .sum();
        self.performance.set_unrealized(unrealized);
        completed
    }

    /// Drop a signal regardless of its status
    pub fn remove(&mut self, id: &str) -> Option<Signal> {
        let index = self.signals.iter().position(|s| s.id == id)?;
        Some(self.signals.remove(index))
    }

    /// Drop all signals and zero the performance totals
    pub fn reset(&mut self) {
        self.signals.clear();
        self.performance.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::IndicatorSnapshot;
    use crate::portfolio::{RiskAnalysis, RiskLevel};
    use crate::strategy::{SignalStatus, StrategyKind, Strength};

    fn candidate(direction: Direction, entry: f64, stop: f64, target: f64) -> Candidate {
        Candidate {
            direction,
            strategy: StrategyKind::TrendPullback,
            reasoning: "test".to_string(),
            entry_price: entry,
            stop_loss: stop,
            target_price: target,
            confidence: 70,
            strength: Strength::Medium,
            risk_analysis: RiskAnalysis {
                risk_reward_ratio: 2.0,
                stop_loss_percent: 2.0,
                recommended_position_size_usd: 5000.0,
                risk_per_trade_usd: 100.0,
                risk_level: RiskLevel::Moderate,
            },
            indicators: IndicatorSnapshot::neutral(entry, 1.0),
        }
    }

    fn manager() -> (SignalManager, tokio::sync::mpsc::UnboundedReceiver<SignalNotification>) {
        let (notifier, rx) = crate::lifecycle::ChannelNotifier::channel();
        (SignalManager::new(AccountConfig::default(), Box::new(notifier)), rx)
    }

    #[test]
    fn test_dedup_per_direction() {
        let (mut mgr, mut rx) = manager();
        let tf = Timeframe::new("15m");
        assert!(mgr.accept("ETH/USDT", &tf, candidate(Direction::Buy, 100.0, 98.0, 104.0), 1).is_some());
        assert!(mgr.accept("ETH/USDT", &tf, candidate(Direction::Buy, 101.0, 99.0, 105.0), 2).is_none());
        assert!(mgr.accept("ETH/USDT", &tf, candidate(Direction::Sell, 101.0, 103.0, 97.0), 3).is_some());
        assert_eq!(mgr.active().count(), 2);

        // one notification per accepted signal
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_win_then_no_double_count() {
        let (mut mgr, _rx) = manager();
        let tf = Timeframe::new("1h");
        let id = mgr
            .accept("BTC/USDT", &tf, candidate(Direction::Buy, 100.0, 98.0, 104.0), 0)
            .map(|s| s.id.clone())
            .unwrap();

        assert!(mgr.on_tick(102.0, 10).is_empty());
        assert!((mgr.get(&id).unwrap().pnl - 2.0).abs() < 1e-9);
        assert!((mgr.performance().unrealized_pnl - 100.0).abs() < 1e-6);

        assert_eq!(mgr.on_tick(104.5, 20), vec![id.clone()]);
        let signal = mgr.get(&id).unwrap();
        assert_eq!(signal.status, SignalStatus::Completed);
        assert_eq!(signal.outcome, Some(Outcome::Win));
        assert!((signal.pnl - 4.0).abs() < 1e-9);
        assert_eq!(signal.completed_at, Some(20));

        assert!(mgr.on_tick(90.0, 30).is_empty());
        let signal = mgr.get(&id).unwrap();
        assert_eq!(signal.outcome, Some(Outcome::Win));
        assert_eq!(signal.completed_at, Some(20));

        let perf = mgr.performance();
        assert_eq!((perf.wins, perf.losses, perf.total_trades), (1, 0, 1));
        assert_eq!(perf.realized_pnl, 200.0);
        assert_eq!(perf.unrealized_pnl, 0.0);
    }

    #[test]
    fn test_stop_hit_is_loss() {
        let (mut mgr, _rx) = manager();
        let tf = Timeframe::new("1h");
        mgr.accept("BTC/USDT", &tf, candidate(Direction::Buy, 100.0, 98.0, 104.0), 0);
        mgr.on_tick(97.0, 5);

        let signal = mgr.completed().next().unwrap();
        assert_eq!(signal.outcome, Some(Outcome::Loss));
        assert!((signal.pnl + 2.0).abs() < 1e-9);
        assert_eq!(mgr.performance().realized_pnl, -100.0);

        // completion frees the direction again
        assert!(mgr.accept("BTC/USDT", &tf, candidate(Direction::Buy, 97.0, 95.0, 101.0), 6).is_some());
    }

    #[test]
    fn test_sell_mirrors() {
        let (mut mgr, _rx) = manager();
        let tf = Timeframe::new("4h");
        mgr.accept("SOL/USDT", &tf, candidate(Direction::Sell, 100.0, 102.0, 96.0), 0);
        mgr.on_tick(99.0, 1);
        assert!((mgr.active().next().unwrap().pnl - 1.0).abs() < 1e-9);
        mgr.on_tick(95.5, 2);
        assert!((mgr.completed().next().unwrap().pnl - 4.0).abs() < 1e-9);
        assert_eq!(mgr.performance().wins, 1);
    }

    #[test]
    fn test_remove_and_reset() {
        let (mut mgr, _rx) = manager();
        let tf = Timeframe::new("1h");
        let id = mgr
            .accept("BTC/USDT", &tf, candidate(Direction::Buy, 100.0, 98.0, 104.0), 0)
            .map(|s| s.id.clone())
            .unwrap();
        assert!(mgr.remove(&id).is_some());
        assert!(mgr.remove(&id).is_none());
        assert!(!mgr.has_active("BTC/USDT", &tf, Direction::Buy));

        mgr.accept("BTC/USDT", &tf, candidate(Direction::Buy, 100.0, 98.0, 104.0), 1);
        mgr.on_tick(105.0, 2);
        mgr.reset();
        assert!(mgr.signals().is_empty());
        assert_eq!(mgr.performance(), &PerformanceMetrics::default());
    }
}
