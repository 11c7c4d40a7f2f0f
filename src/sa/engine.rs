//! Resumable annealing state machine.
//!
//! # Algorithm (one step)
//!
//! 1. Stop if the current state has zero conflicts, the iteration budget
//!    is spent, or the temperature is below [`MIN_TEMPERATURE`]
//! 2. Clone the current state and recolor one random vertex
//! 3. A conflict-free candidate is adopted as current and best; stop
//! 4. `delta = current - candidate` (positive = fewer conflicts)
//! 5. Improving candidates are always adopted; otherwise adopt with
//!    probability `exp(delta / T)` (Metropolis criterion)
//! 6. Cool geometrically, advance the iteration counter
//!
//! Because each call performs a single transition, a front-end can pace
//! the search (redraw, wait on a timer) between calls; [`run`] drives the
//! same transition to completion.
//!
//! [`run`]: AnnealingEngine::run
//!
//! # Reference
//!
//! Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

use super::config::{AnnealConfig, MIN_TEMPERATURE};
use super::runner::AnnealResult;
use super::types::{AnnealTrace, EngineStatus, MoveStats, StopReason};
use crate::coloring::ColoringState;
use crate::error::{ColoringError, ColoringResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Simulated annealing over k-colorings of one graph.
///
/// The engine owns its random source; two engines built from the same
/// initial state, config, and RNG state perform identical searches.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_coloring::coloring::ColoringState;
/// use u_coloring::graph::Graph;
/// use u_coloring::sa::{AnnealConfig, AnnealingEngine};
///
/// let graph = Arc::new(Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]));
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut initial = ColoringState::new(graph, 2).unwrap();
/// initial.randomize(&mut rng);
///
/// let mut engine = AnnealingEngine::new(initial, AnnealConfig::default(), rng).unwrap();
/// while !engine.step() {
///     // inspect engine.current(), engine.temperature(), engine.iteration()
/// }
/// assert!(engine.best().conflicts() <= engine.current().conflicts());
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingEngine<R = StdRng> {
    current: ColoringState,
    best: ColoringState,
    temperature: f64,
    iteration: usize,
    config: AnnealConfig,
    rng: R,
    stats: MoveStats,
    trace: AnnealTrace,
    status: EngineStatus,
}

impl AnnealingEngine<StdRng> {
    /// Creates an engine with a `StdRng` seeded from `config.seed`
    /// (a random seed when unset).
    pub fn with_seed(initial: ColoringState, config: AnnealConfig) -> ColoringResult<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::new(initial, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AnnealingEngine<R> {
    /// Creates an engine starting from `initial`.
    ///
    /// # Errors
    ///
    /// - [`ColoringError::InvalidConfig`] if `config` fails validation
    /// - [`ColoringError::NoAlternativeColor`] if `initial` has conflicts
    ///   but a budget below two colors, so no move could ever be made
    pub fn new(initial: ColoringState, config: AnnealConfig, rng: R) -> ColoringResult<Self> {
        config.validate()?;
        if initial.num_colors() < 2 && initial.conflicts() > 0 {
            return Err(ColoringError::NoAlternativeColor(initial.num_colors()));
        }

        let mut engine = Self {
            best: initial.clone(),
            current: initial,
            temperature: config.initial_temperature,
            iteration: 0,
            config,
            rng,
            stats: MoveStats::default(),
            trace: AnnealTrace::default(),
            status: EngineStatus::Running,
        };
        engine.record();
        Ok(engine)
    }

    /// Performs one transition. Returns `true` once the search has
    /// terminated; further calls are no-ops that keep returning `true`.
    pub fn step(&mut self) -> bool {
        if self.status.is_terminated() {
            return true;
        }
        if let Some(reason) = self.stop_condition() {
            self.terminate(reason);
            return true;
        }

        let mut candidate = self.current.clone();
        if let Err(err) = candidate.modify_one_vertex(&mut self.rng) {
            log::warn!("cannot generate a recolor move: {err}");
            self.terminate(StopReason::NoMove);
            return true;
        }
        self.stats.evaluated += 1;

        if candidate.is_proper() {
            self.stats.accepted += 1;
            self.stats.improving += 1;
            self.best = candidate.clone();
            self.current = candidate;
            self.record();
            self.terminate(StopReason::Solved);
            return true;
        }

        let delta = self.current.conflicts() as i64 - candidate.conflicts() as i64;

        if delta > 0 {
            self.stats.accepted += 1;
            self.stats.improving += 1;
            if candidate.conflicts() < self.best.conflicts() {
                self.best = candidate.clone();
            }
            self.current = candidate;
        } else if self.take_risk(delta) {
            log::trace!(
                "accepted non-improving move: {} -> {} conflicts at T={:.4}",
                self.current.conflicts(),
                candidate.conflicts(),
                self.temperature
            );
            self.stats.accepted += 1;
            self.current = candidate;
        }

        self.temperature *= self.config.cooling_rate;
        self.iteration += 1;
        self.record();
        false
    }

    /// Steps until termination. Returns the number of `step` calls made.
    pub fn run_to_end(&mut self) -> usize {
        let mut calls = 1;
        while !self.step() {
            calls += 1;
        }
        calls
    }

    /// Runs to completion and returns the best state found.
    pub fn run(mut self) -> AnnealResult {
        self.run_to_end();
        self.into_result()
    }

    /// Stops a running search with [`StopReason::Cancelled`].
    pub fn cancel(&mut self) {
        if !self.status.is_terminated() {
            self.terminate(StopReason::Cancelled);
        }
    }

    /// Consumes the engine, packaging the best state and statistics.
    pub fn into_result(self) -> AnnealResult {
        let stop_reason = self.stop_reason();
        AnnealResult {
            best_conflicts: self.best.conflicts(),
            best: self.best,
            iterations: self.iteration,
            final_temperature: self.temperature,
            stats: self.stats,
            stop_reason,
            trace: self.trace,
        }
    }

    /// The state the search is currently at.
    pub fn current(&self) -> &ColoringState {
        &self.current
    }

    /// The state with the fewest conflicts seen so far.
    pub fn best(&self) -> &ColoringState {
        &self.best
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Number of completed (cooled) moves.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    pub fn is_terminated(&self) -> bool {
        self.status.is_terminated()
    }

    /// Why the search stopped, or `None` while it is running.
    pub fn stop_reason(&self) -> Option<StopReason> {
        match self.status {
            EngineStatus::Running => None,
            EngineStatus::Terminated(reason) => Some(reason),
        }
    }

    pub fn stats(&self) -> MoveStats {
        self.stats
    }

    pub fn trace(&self) -> &AnnealTrace {
        &self.trace
    }

    fn stop_condition(&self) -> Option<StopReason> {
        if self.current.is_proper() {
            Some(StopReason::Solved)
        } else if self.iteration >= self.config.max_iterations {
            Some(StopReason::MaxIterations)
        } else if self.temperature < MIN_TEMPERATURE {
            Some(StopReason::Frozen)
        } else {
            None
        }
    }

    /// Metropolis criterion for a non-improving move (`delta <= 0`).
    fn take_risk(&mut self, delta: i64) -> bool {
        if self.temperature <= 0.0 {
            return false;
        }
        let probability = (delta as f64 / self.temperature).exp();
        probability > self.rng.random_range(0.0..1.0)
    }

    fn record(&mut self) {
        if !self.config.record_trace {
            return;
        }
        self.trace.temperatures.push(self.temperature);
        self.trace.conflicts.push(self.current.conflicts());
        self.trace.best_conflicts.push(self.best.conflicts());
    }

    fn terminate(&mut self, reason: StopReason) {
        self.status = EngineStatus::Terminated(reason);
        log::debug!(
            "annealing stopped ({reason:?}) at iteration {}: best {} conflicts, T={:.6}",
            self.iteration,
            self.best.conflicts(),
            self.temperature
        );
    }
}
