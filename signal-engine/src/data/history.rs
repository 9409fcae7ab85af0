//! Bounded candle history with in-place updates

use crate::data::Candle;
use tracing::warn;

/// Default number of candles retained per pair
pub const CANDLE_HISTORY_LIMIT: usize = 2000;

/// Outcome of applying a streamed candle to the history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleUpdate {
    /// Same open time as the last candle: the forming candle was replaced
    Replaced,
    /// New open time: the previous last candle is now closed
    Appended,
    /// Open time older than the last candle: ignored
    Rejected,
}

/// Ordered candle history for one (symbol, timeframe) pair
#[derive(Debug, Clone)]
pub struct CandleHistory {
    candles: Vec<Candle>,
    limit: usize,
}

impl CandleHistory {
    /// Create new empty history with the default limit
    pub fn new() -> Self {
        Self::with_limit(CANDLE_HISTORY_LIMIT)
    }

    /// Create new empty history retaining at most `limit` candles
    pub fn with_limit(limit: usize) -> Self {
        Self {
            candles: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Replace the whole history with an initial load.
    ///
    /// Candles are sorted by time, repeated times keep the latest entry, and
    /// only the most recent `limit` candles are retained.
    pub fn seed(&mut self, mut candles: Vec<Candle>) {
        candles.sort_by_key(|c| c.time);
        let mut deduped: Vec<Candle> = Vec::with_capacity(candles.len());
        for candle in candles {
            match deduped.last_mut() {
                Some(last) if last.time == candle.time => *last = candle,
                _ => deduped.push(candle),
            }
        }
        if deduped.len() > self.limit {
            deduped.drain(..deduped.len() - self.limit);
        }
        self.candles = deduped;
    }

    /// Apply a streamed candle
    pub fn apply(&mut self, candle: Candle) -> CandleUpdate {
        match self.candles.last_mut() {
            Some(last) if candle.time == last.time => {
                *last = candle;
                CandleUpdate::Replaced
            }
            Some(last) if candle.time < last.time => {
                warn!(
                    "Ignoring out-of-order candle at {} (last is {})",
                    candle.time, last.time
                );
                CandleUpdate::Rejected
            }
            _ => {
                self.candles.push(candle);
                if self.candles.len() > self.limit {
                    self.candles.remove(0);
                }
                CandleUpdate::Appended
            }
        }
    }

    /// Get number of candles
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Get last candle
    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// Get first candle
    pub fn first(&self) -> Option<&Candle> {
        self.candles.first()
    }

    /// Get all candles
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// Drop all candles
    pub fn clear(&mut self) {
        self.candles.clear();
    }
}

impl Default for CandleHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(time: i64, close: f64) -> Candle {
        Candle::new(time, close, close + 1.0, close - 1.0, close, 100.0)
    }

    #[test]
    fn test_replace_then_append() {
        let mut history = CandleHistory::new();
        assert_eq!(history.apply(candle(1, 10.0)), CandleUpdate::Appended);
        assert_eq!(history.apply(candle(1, 11.0)), CandleUpdate::Replaced);
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|c| c.close), Some(11.0));

        assert_eq!(history.apply(candle(2, 12.0)), CandleUpdate::Appended);
        assert_eq!(history.len(), 2);
        assert_eq!(history.apply(candle(0, 9.0)), CandleUpdate::Rejected);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = CandleHistory::with_limit(3);
        for t in 0..5 {
            history.apply(candle(t, t as f64));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.first().map(|c| c.time), Some(2));
    }

    #[test]
    fn test_seed_sorts_and_dedups() {
        let mut history = CandleHistory::with_limit(10);
        history.seed(vec![candle(3, 3.0), candle(1, 1.0), candle(3, 30.0), candle(2, 2.0)]);
        let times: Vec<i64> = history.candles().iter().map(|c| c.time).collect();
        assert_eq!(times, vec![1, 2, 3]);
        assert_eq!(history.last().map(|c| c.close), Some(30.0));
    }
}
