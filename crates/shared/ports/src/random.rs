/// Port for uniform randomness
///
/// This allows the simulator to use different sources:
/// - A seeded generator for reproducible runs
/// - A scripted sequence of draws for deterministic tests
///
/// Implementations are instances, never globals, so each run can own one.
pub trait RandomSource: Send {
    /// Next uniform draw in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Get the source's name/identifier for debugging
    fn name(&self) -> &str {
        "RandomSource"
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
