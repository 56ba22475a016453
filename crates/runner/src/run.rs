//! Run output and the derived views the UI layer renders

use lobsim_core::MetricsSnapshot;
use lobsim_order_flow::EventKind;
use serde::{Deserialize, Serialize};

/// Full output of one simulation run
///
/// `snapshots[0]` is the book before any event; `snapshots[i]` follows
/// `events[i - 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRun {
    pub events: Vec<String>,
    pub snapshots: Vec<MetricsSnapshot>,
    /// Per-kind tally, recorded by the driver as events are applied
    #[serde(default)]
    pub counts: EventCounts,
}

/// How many events of each kind a run applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCounts {
    pub market_orders: usize,
    pub cancels: usize,
    pub limit_arrivals: usize,
}

impl EventCounts {
    pub fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::Market => self.market_orders += 1,
            EventKind::Cancel => self.cancels += 1,
            EventKind::Limit => self.limit_arrivals += 1,
        }
    }

    pub fn get(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::Market => self.market_orders,
            EventKind::Cancel => self.cancels,
            EventKind::Limit => self.limit_arrivals,
        }
    }
}

/// One charting point, rounded to 4 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub step: usize,
    pub spread: f64,
    pub imbalance: f64,
    pub microprice: f64,
}

/// Headline statistics for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub final_spread: f64,
    pub final_imbalance: f64,
    pub final_microprice: f64,
    pub events_simulated: usize,
    pub mean_spread: f64,
    pub min_spread: f64,
    pub max_spread: f64,
    pub market_orders: usize,
    pub cancels: usize,
    pub limit_arrivals: usize,
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

impl SimulationRun {
    /// Metrics after the last event
    pub fn final_snapshot(&self) -> Option<&MetricsSnapshot> {
        self.snapshots.last()
    }

    /// The last `n` event labels, oldest first
    pub fn recent_events(&self, n: usize) -> &[String] {
        let start = self.events.len().saturating_sub(n);
        &self.events[start..]
    }

    /// Count events of one kind
    pub fn count(&self, kind: EventKind) -> usize {
        self.counts.get(kind)
    }

    /// Time series for charting
    pub fn series(&self) -> Vec<SeriesPoint> {
        self.snapshots
            .iter()
            .enumerate()
            .map(|(step, snapshot)| SeriesPoint {
                step,
                spread: round4(snapshot.spread),
                imbalance: round4(snapshot.imbalance),
                microprice: round4(snapshot.microprice),
            })
            .collect()
    }

    /// Summary statistics, or `None` for a run with no snapshots
    pub fn summary(&self) -> Option<RunSummary> {
        let last = self.final_snapshot()?;

        let spreads = self.snapshots.iter().map(|s| s.spread);
        let mean_spread = spreads.clone().sum::<f64>() / self.snapshots.len() as f64;
        let min_spread = spreads.clone().fold(f64::INFINITY, f64::min);
        let max_spread = spreads.fold(f64::NEG_INFINITY, f64::max);

        Some(RunSummary {
            final_spread: last.spread,
            final_imbalance: last.imbalance,
            final_microprice: last.microprice,
            events_simulated: self.events.len(),
            mean_spread,
            min_spread,
            max_spread,
            market_orders: self.count(EventKind::Market),
            cancels: self.count(EventKind::Cancel),
            limit_arrivals: self.count(EventKind::Limit),
        })
    }
}
