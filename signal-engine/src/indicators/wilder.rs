//! Wilder smoothing shared by RSI, ATR and ADX

/// Wilder's running average: seeded with the mean of the first `period`
/// inputs, then `v += (x - v) / period`.
#[derive(Debug, Clone)]
pub struct WilderSmoother {
    period: usize,
    count: usize,
    sum: f64,
    value: Option<f64>,
}

impl WilderSmoother {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            count: 0,
            sum: 0.0,
            value: None,
        }
    }

    pub fn next(&mut self, input: f64) -> Option<f64> {
        let n = self.period as f64;
        self.value = match self.value {
            Some(v) => Some(v + (input - v) / n),
            None => {
                self.count += 1;
                self.sum += input;
                (self.count == self.period).then(|| self.sum / n)
            }
        };
        self.value
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }
}
