use lobsim_ports::RandomSource;

/// Replays a fixed list of draws, wrapping around at the end
///
/// Lets tests pin exactly which branch, side and level each handler picks.
/// Values are clamped into `[0, 1)`. An empty script always yields 0.0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws
            .into()
            .into_iter()
            .map(|d| d.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { draws, position: 0 }
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.position % self.draws.len()];
        self.position += 1;
        value
    }

    fn name(&self) -> &str {
        "ScriptedSource"
    }
}
