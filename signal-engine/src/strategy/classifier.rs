//! Strategy classifier
//!
//! Two-stage pipeline over the closed candle: select the first strategy in
//! cascade order whose trigger matches, then confirm it. An unconfirmed match
//! discards the candle; later strategies are not consulted.

use crate::config::{AccountConfig, Timeframe};
use crate::data::Candle;
use crate::indicators::IndicatorSnapshot;
use crate::portfolio::RiskCalculator;
use crate::strategy::implementations::cascade;
use crate::strategy::{
    confidence_score, is_confirmed, Candidate, MarketContext, Strategy, StrategyKind, Strength,
    Trigger,
};
use tracing::debug;

pub struct StrategyClassifier {
    strategies: Vec<Box<dyn Strategy>>,
    risk: RiskCalculator,
}

impl StrategyClassifier {
    pub fn new(account: AccountConfig) -> Self {
        Self {
            strategies: cascade(),
            risk: RiskCalculator::new(account),
        }
    }

    /// First structural match in cascade order
    pub fn select(&self, ctx: &MarketContext<'_>) -> Option<(StrategyKind, Trigger)> {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.detect(ctx).map(|trigger| (strategy.kind(), trigger)))
    }

    /// Evaluate the closed `candle` (preceded by `previous`) into at most one
    /// candidate signal
    pub fn classify(
        &self,
        candle: &Candle,
        previous: &Candle,
        indicators: &IndicatorSnapshot,
        timeframe: &Timeframe,
    ) -> Option<Candidate> {
        let ctx = MarketContext::new(candle, previous, indicators, timeframe.class());
        let (kind, trigger) = self.select(&ctx)?;

        if !is_confirmed(kind, trigger.direction, indicators) {
            debug!(
                "Discarding unconfirmed {} {} at {}",
                kind, trigger.direction, candle.time
            );
            return None;
        }

        let confidence = confidence_score(kind, trigger.direction, &ctx);
        let entry = candle.close;
        let Some(plan) = self
            .risk
            .plan(kind, trigger.direction, entry, indicators.atr, ctx.class)
        else {
            debug!("Discarding {} {}: non-positive stop or target", kind, trigger.direction);
            return None;
        };

        Some(Candidate {
            direction: trigger.direction,
            strategy: kind,
            reasoning: trigger.reasoning.to_string(),
            entry_price: entry,
            stop_loss: plan.stop_loss,
            target_price: plan.target_price,
            confidence,
            strength: Strength::from_score(confidence),
            risk_analysis: plan.analysis,
            indicators: indicators.clone(),
        })
    }
}

impl Default for StrategyClassifier {
    fn default() -> Self {
        Self::new(AccountConfig::default())
    }
}
