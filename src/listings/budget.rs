use crate::models::Property;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Largest step used by the home search widget.
pub const LARGEST_STEP_STANDARD: f64 = 250_000.0;
/// Largest step used by the projects listing page.
pub const LARGEST_STEP_WIDE: f64 = 5_000_000.0;
/// Bounded ranges emitted at most. Wider spreads double the step until they fit.
pub const MAX_RANGES: usize = 200;

/// Maps the observed price spread to a human-friendly step size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepSchedule {
    /// `(max_spread, step)` pairs, checked in order.
    pub brackets: Vec<(f64, f64)>,
    /// Step used when the spread exceeds every bracket.
    pub largest_step: f64,
}

impl StepSchedule {
    pub fn with_largest_step(largest_step: f64) -> Self {
        Self {
            largest_step,
            ..Self::default()
        }
    }

    pub fn step_for(&self, spread: f64) -> f64 {
        self.brackets
            .iter()
            .find(|(max_spread, _)| spread <= *max_spread)
            .map(|(_, step)| *step)
            .unwrap_or(self.largest_step)
    }

    /// Every step must be finite and positive, thresholds must not be NaN.
    pub fn validate(&self) -> Result<()> {
        for (max_spread, step) in &self.brackets {
            if max_spread.is_nan() {
                anyhow::bail!("bracket threshold must be a number");
            }
            if !usable_step(*step) {
                anyhow::bail!("bracket step must be finite and positive, got {}", step);
            }
        }
        if !usable_step(self.largest_step) {
            anyhow::bail!(
                "largest_step must be finite and positive, got {}",
                self.largest_step
            );
        }
        Ok(())
    }
}

fn usable_step(step: f64) -> bool {
    step.is_finite() && step > 0.0
}

impl Default for StepSchedule {
    fn default() -> Self {
        Self {
            brackets: vec![
                (50_000.0, 10_000.0),
                (200_000.0, 50_000.0),
                (500_000.0, 100_000.0),
            ],
            largest_step: LARGEST_STEP_STANDARD,
        }
    }
}

/// How range labels are rendered. The numeric bounds never depend on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelStyle {
    pub currency_symbol: String,
}

impl LabelStyle {
    fn thousands(&self, amount: f64) -> String {
        format!("{}{}K", self.currency_symbol, amount / 1000.0)
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            currency_symbol: "₮".to_string(),
        }
    }
}

/// One selectable budget bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetRange {
    pub label: String,
    /// Selection key: `"<min>_<max>"` or `"above_<min>"`.
    pub value: String,
    pub min: f64,
    /// `None` for the open-ended "Above" bucket.
    pub max: Option<f64>,
}

impl BudgetRange {
    pub fn bounded(min: f64, max: f64, style: &LabelStyle) -> Self {
        Self {
            label: format!("{} - {}", style.thousands(min), style.thousands(max)),
            value: format!("{}_{}", min, max),
            min,
            max: Some(max),
        }
    }

    pub fn above(min: f64, style: &LabelStyle) -> Self {
        Self {
            label: format!("Above {}", style.thousands(min)),
            value: format!("above_{}", min),
            min,
            max: None,
        }
    }

    pub fn is_open_ended(&self) -> bool {
        self.max.is_none()
    }

    /// Upper bound, `f64::INFINITY` when open-ended.
    pub fn upper(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }

    /// Inclusive on both ends: a boundary price belongs to both neighbours.
    pub fn contains(&self, price: f64) -> bool {
        match self.max {
            Some(max) => self.min <= price && price <= max,
            None => price >= self.min,
        }
    }
}

/// Looks up a range by its selection key.
pub fn find_range<'a>(ranges: &'a [BudgetRange], value: &str) -> Option<&'a BudgetRange> {
    ranges.iter().find(|r| r.value == value)
}

/// Derives stepped budget ranges spanning every usable price in `properties`.
///
/// Returns an empty list when no property carries a positive, parseable price.
pub fn compute_budget_ranges(
    properties: &[Property],
    schedule: &StepSchedule,
    style: &LabelStyle,
) -> Vec<BudgetRange> {
    let mut prices: Vec<f64> = properties
        .iter()
        .filter_map(Property::bucket_amount)
        .collect();

    if prices.is_empty() {
        debug!("no usable prices among {} properties", properties.len());
        return Vec::new();
    }

    prices.sort_by(f64::total_cmp);
    let min_price = prices[0];
    let max_price = prices[prices.len() - 1];

    let mut step = schedule.step_for(max_price - min_price);
    if !usable_step(step) {
        warn!("unusable budget step {}, skipping budget ranges", step);
        return Vec::new();
    }

    let snap = |step: f64| {
        (
            (min_price / step).floor() * step,
            (max_price / step).ceil() * step,
        )
    };
    let (mut start_price, mut end_price) = snap(step);
    while (end_price - start_price) / step > MAX_RANGES as f64 {
        step *= 2.0;
        if !usable_step(step) {
            break;
        }
        (start_price, end_price) = snap(step);
    }
    if !usable_step(step) || !start_price.is_finite() || !end_price.is_finite() {
        warn!(max_price, "price out of range, skipping budget ranges");
        return Vec::new();
    }

    // At least one bucket, even when every price sits on the same multiple of step.
    let count = ((end_price - start_price) / step).round().clamp(1.0, MAX_RANGES as f64) as usize;
    let mut ranges: Vec<BudgetRange> = (0..count)
        .map(|i| {
            let lower = start_price + i as f64 * step;
            BudgetRange::bounded(lower, lower + step, style)
        })
        .collect();

    if max_price >= end_price - step {
        ranges.push(BudgetRange::above(end_price - step, style));
    }

    debug!(
        min_price,
        max_price,
        step,
        count = ranges.len(),
        "computed budget ranges"
    );
    ranges
}
