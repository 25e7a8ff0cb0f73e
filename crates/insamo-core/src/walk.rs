//! Bounded random walk primitive.

use rand::Rng;

/// Rounds a value to two decimal places for transport stability.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Advances `current` by a uniform perturbation in `[-step_size, step_size]`,
/// clamped to `[min, max]` and rounded to two decimals.
///
/// The result is always within `[min, max]`. A non-positive `step_size`
/// returns the input unchanged apart from rounding.
pub fn bounded_step(
    rng: &mut impl Rng,
    current: f64,
    step_size: f64,
    min: f64,
    max: f64,
) -> f64 {
    debug_assert!(min <= max);

    if step_size <= 0.0 {
        return round2(current.clamp(min, max)).clamp(min, max);
    }

    let perturbation = rng.gen_range(-step_size..=step_size);
    round2((current + perturbation).clamp(min, max)).clamp(min, max)
}
