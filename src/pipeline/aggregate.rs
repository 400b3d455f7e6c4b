use crate::types::forecast::ForecastSample;

pub const DEFAULT_SHORT_RANGE_COUNT: usize = 5;
/// Upstream samples are 3 hours apart, so 8 of them span roughly one day.
pub const DEFAULT_DAILY_STRIDE: usize = 8;

/// The first `count` samples, in order. Shorter inputs are returned whole.
pub fn short_range_view(series: &[ForecastSample], count: usize) -> Vec<ForecastSample> {
    series.iter().take(count).cloned().collect()
}

/// Every `stride`-th sample starting at index 0, in order.
///
/// A stride of 0 behaves like 1.
pub fn daily_view(series: &[ForecastSample], stride: usize) -> Vec<ForecastSample> {
    series.iter().step_by(stride.max(1)).cloned().collect()
}
