/// Price value
///
/// Plain binary float, so runs can be compared bit for bit.
pub type Price = f64;

/// Resting or traded size, in whole units
pub type Size = u64;

/// Round to the nearest integer with ties going up (`floor(x + 0.5)`).
///
/// Used for every size derived from `base_size`. Negative inputs clamp to 0
/// since sizes are unsigned.
pub fn round_half_up(value: f64) -> Size {
    let rounded = (value + 0.5).floor();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else {
        rounded as Size
    }
}
