#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampleSummary {
    pub mean: f64,
    pub std_dev: f64,
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Bessel-corrected sample standard deviation (divisor `n - 1`).
///
/// A single observation has no sample variance; it is reported as exactly `0.0`
/// instead of dividing by zero.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    if values.len() == 1 {
        return Some(0.0);
    }
    let squared_dev_sum: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((squared_dev_sum / (values.len() - 1) as f64).sqrt())
}

pub fn summarize(values: &[f64]) -> Option<SampleSummary> {
    Some(SampleSummary {
        mean: mean(values)?,
        std_dev: sample_std_dev(values)?,
    })
}
