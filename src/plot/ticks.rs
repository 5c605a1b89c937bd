// src/plot/ticks.rs

const MANTISSAS: [f64; 3] = [1.0, 2.0, 5.0];
pub const DESIRED_TICKS: usize = 6;

/// Round tick positions inside [low, high], spaced by 1, 2 or 5 times a power of ten,
/// picking the spacing whose tick count lands closest to `desired`.
pub fn nice_ticks(low: f64, high: f64, desired: usize) -> Vec<f64> {
    let span = high - low;
    if !(span > 0.0) || !span.is_finite() || desired == 0 {
        return Vec::new();
    }

    let ideal = span / desired as f64;
    let exponent = ideal.log10().floor() as i32;
    let magnitude = 10f64.powi(exponent);

    let candidates = MANTISSAS.iter()
        .map(|m| m * magnitude)
        .chain(std::iter::once(10.0 * magnitude));
    let interval = candidates
        .map(|c| (c, (desired as f64 - span / c).abs()))
        .fold((f64::NAN, f64::INFINITY), |best, (c, err)| if err < best.1 { (c, err) } else { best })
        .0;

    let first = (low / interval).ceil() as i64;
    let last = (high / interval).floor() as i64;
    (first..=last).map(|k| k as f64 * interval).collect()
}
