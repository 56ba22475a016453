//! Simulation - the discrete-event loop
//!
//! One step:
//! 1. Draw `r` and classify it as market order, cancel or limit arrival
//! 2. Apply the matching handler to get a new book
//! 3. Replenish empty levels
//! 4. Snapshot metrics
//!
//! The driver is the only owner of the book; handlers hand back fresh copies.

use lobsim_core::{BookSide, BookState, MetricsSnapshot, Side, compute_snapshot, create_book};
use lobsim_matching::LevelSweepExecutor;
use lobsim_order_flow::{
    EventKind, OrderFlowEvent, apply_cancellation, apply_limit_arrival, replenish,
};
use lobsim_ports::{OrderExecutor, RandomSource};
use lobsim_random::Mulberry32;

use crate::config::SimulationParams;
use crate::error::Result;
use crate::run::{EventCounts, SimulationRun};

/// What a single step did
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// 1-based step number
    pub step: usize,
    pub event: OrderFlowEvent,
    /// Metrics after the event and replenishment
    pub snapshot: MetricsSnapshot,
}

/// Stepping simulation driver
///
/// Owns the book, the random source and the execution model for one run.
pub struct Simulation {
    params: SimulationParams,
    rng: Box<dyn RandomSource>,
    executor: Box<dyn OrderExecutor>,
    book: BookState,
    steps_taken: usize,
}

impl Simulation {
    /// Create a simulation with a fresh generator seeded from `params.seed`
    pub fn new(params: SimulationParams) -> Self {
        Self::with_executor(params, Box::new(LevelSweepExecutor::new()))
    }

    /// Create a simulation with a custom execution model
    pub fn with_executor(params: SimulationParams, executor: Box<dyn OrderExecutor>) -> Self {
        let rng = Mulberry32::from_seed_value(params.seed);
        Self::with_parts(params, Box::new(rng), executor)
    }

    /// Create a simulation from explicit parts
    pub fn with_parts(
        params: SimulationParams,
        rng: Box<dyn RandomSource>,
        executor: Box<dyn OrderExecutor>,
    ) -> Self {
        let book = create_book(
            params.mid,
            params.tick_size,
            params.levels,
            params.base_size,
        );

        Self {
            params,
            rng,
            executor,
            book,
            steps_taken: 0,
        }
    }

    /// Current book
    pub fn book(&self) -> &BookState {
        &self.book
    }

    /// Number of steps applied so far
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Metrics for the current book
    pub fn snapshot(&self) -> MetricsSnapshot {
        compute_snapshot(&self.book)
    }

    /// Apply one order-flow event
    pub fn step(&mut self) -> StepOutcome {
        let params = &self.params;
        let draw = self.rng.next_f64();

        let (event, book) =
            match EventKind::classify(draw, params.market_rate, params.cancel_rate) {
                EventKind::Market => {
                    let side = if self.rng.next_f64() < 0.5 {
                        Side::Buy
                    } else {
                        Side::Sell
                    };
                    let fill = self
                        .executor
                        .execute(&self.book, side, params.market_order_size);
                    let event = OrderFlowEvent::Market {
                        side,
                        filled_qty: fill.filled_qty,
                        avg_price: fill.avg_price,
                    };
                    (event, fill.next_book)
                }
                EventKind::Cancel => {
                    let result = apply_cancellation(&self.book, &mut self.rng, params.base_size);
                    let event = OrderFlowEvent::Cancel {
                        side: result.side,
                        index: result.index,
                    };
                    (event, result.next_book)
                }
                EventKind::Limit => {
                    let result = apply_limit_arrival(
                        &self.book,
                        &mut self.rng,
                        params.base_size,
                        params.limit_arrival_rate,
                    );
                    let event = OrderFlowEvent::Limit {
                        side: result.side,
                        index: result.index,
                    };
                    (event, result.next_book)
                }
            };

        self.steps_taken += 1;
        if !book.is_two_sided() {
            log::debug!(
                "step {}: {} left a one-sided book (bid size {}, ask size {})",
                self.steps_taken,
                event,
                book.total_size(BookSide::Bid),
                book.total_size(BookSide::Ask)
            );
        }
        self.book = replenish(book, params.base_size);

        let snapshot = compute_snapshot(&self.book);
        log::debug!(
            "step {}: {} (spread={:.4}, imbalance={:.4}, microprice={:.4})",
            self.steps_taken,
            event,
            snapshot.spread,
            snapshot.imbalance,
            snapshot.microprice
        );

        StepOutcome {
            step: self.steps_taken,
            event,
            snapshot,
        }
    }

    /// Run `steps` more steps, collecting labels and snapshots
    ///
    /// The returned run starts with the snapshot of the current book, so it
    /// always holds `steps + 1` snapshots and `steps` events.
    pub fn run(mut self, steps: usize) -> SimulationRun {
        log::info!(
            "Starting simulation: seed={} steps={} levels={} executor={} rng={}",
            self.params.seed,
            steps,
            self.params.levels,
            self.executor.name(),
            self.rng.name()
        );

        let mut events = Vec::with_capacity(steps);
        let mut snapshots = Vec::with_capacity(steps + 1);
        let mut counts = EventCounts::default();
        snapshots.push(self.snapshot());

        for _ in 0..steps {
            let outcome = self.step();
            counts.record(outcome.event.kind());
            events.push(outcome.event.label());
            snapshots.push(outcome.snapshot);
        }

        let run = SimulationRun {
            events,
            snapshots,
            counts,
        };
        if let Some(last) = run.final_snapshot() {
            log::info!(
                "Simulation complete: {} events, final spread={:.4} microprice={:.4}",
                run.events.len(),
                last.spread,
                last.microprice
            );
        }
        run
    }
}

/// Run a full simulation from a fresh book and generator
///
/// Performs no validation; see [`SimulationParams::validate`].
pub fn run_simulation(params: &SimulationParams, steps: usize) -> SimulationRun {
    Simulation::new(params.clone()).run(steps)
}

/// Validate `params`, then run
pub fn try_run_simulation(params: &SimulationParams, steps: usize) -> Result<SimulationRun> {
    params.validate()?;
    Ok(run_simulation(params, steps))
}
