//! Batch entry points: run a search from a graph and a color budget.

use super::config::AnnealConfig;
use super::engine::AnnealingEngine;
use super::types::{AnnealTrace, MoveStats, StopReason};
use crate::coloring::ColoringState;
use crate::error::{ColoringError, ColoringResult};
use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The coloring with the fewest conflicts found.
    pub best: ColoringState,

    /// Conflicts of the best coloring. Zero means a proper coloring.
    pub best_conflicts: usize,

    /// Completed moves.
    pub iterations: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,

    /// Move counters.
    pub stats: MoveStats,

    /// Why the search stopped (`None` only if it never terminated).
    pub stop_reason: Option<StopReason>,

    /// Per-move history; empty unless tracing was enabled.
    pub trace: AnnealTrace,
}

impl AnnealResult {
    /// Returns `true` if the best coloring has no conflicts.
    pub fn is_proper(&self) -> bool {
        self.best_conflicts == 0
    }
}

/// Runs annealing searches from a random initial coloring.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Colors `graph` with `num_colors` colors.
    ///
    /// The initial coloring is drawn from the same seeded RNG the search
    /// then uses, so a fixed `config.seed` reproduces the whole run.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use u_coloring::graph::Graph;
    /// use u_coloring::sa::{AnnealConfig, AnnealRunner};
    ///
    /// let graph = Arc::new(Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]));
    /// let config = AnnealConfig::default().with_seed(42);
    /// let result = AnnealRunner::run(graph, 3, &config).unwrap();
    /// assert!(result.is_proper());
    /// ```
    pub fn run(
        graph: Arc<Graph>,
        num_colors: usize,
        config: &AnnealConfig,
    ) -> ColoringResult<AnnealResult> {
        Self::run_with_cancel(graph, num_colors, config, None)
    }

    /// Runs with an optional cancellation flag, checked before each step.
    pub fn run_with_cancel(
        graph: Arc<Graph>,
        num_colors: usize,
        config: &AnnealConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> ColoringResult<AnnealResult> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut initial = ColoringState::new(graph, num_colors)?;
        initial.randomize(&mut rng);
        let initial_conflicts = initial.conflicts();

        let mut engine = AnnealingEngine::new(initial, config.clone(), rng)?;
        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    engine.cancel();
                    break;
                }
            }
            if engine.step() {
                break;
            }
        }

        let result = engine.into_result();
        log::info!(
            "annealing (seed {seed}, k={num_colors}): {initial_conflicts} -> {} conflicts in {} iterations ({:?})",
            result.best_conflicts,
            result.iterations,
            result.stop_reason
        );
        Ok(result)
    }

    /// Runs `restarts` independent searches and keeps the best.
    ///
    /// Search `i` is seeded with `seed + i` and owns its own engine and
    /// RNG, so the outcome does not depend on scheduling. Ties go to the
    /// lowest index. With the `parallel` feature the searches run on the
    /// rayon thread pool.
    ///
    /// # Errors
    ///
    /// [`ColoringError::InvalidConfig`] if `restarts` is zero, plus any
    /// error of [`run`](Self::run).
    pub fn run_restarts(
        graph: Arc<Graph>,
        num_colors: usize,
        config: &AnnealConfig,
        restarts: usize,
    ) -> ColoringResult<AnnealResult> {
        if restarts == 0 {
            return Err(ColoringError::InvalidConfig("restarts must be positive".into()));
        }
        config.validate()?;

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let run_one = |i: usize| {
            let config = config.clone().with_seed(base_seed.wrapping_add(i as u64));
            Self::run(Arc::clone(&graph), num_colors, &config)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<AnnealResult> = (0..restarts)
            .into_par_iter()
            .map(run_one)
            .collect::<ColoringResult<_>>()?;

        #[cfg(not(feature = "parallel"))]
        let results: Vec<AnnealResult> = (0..restarts)
            .map(run_one)
            .collect::<ColoringResult<_>>()?;

        results
            .into_iter()
            .min_by_key(|r| r.best_conflicts)
            .ok_or_else(|| ColoringError::InvalidConfig("restarts must be positive".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate;

    fn cycle(n: usize) -> Arc<Graph> {
        let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        Arc::new(Graph::from_edges(n, &edges))
    }

    #[test]
    fn test_run_colors_even_cycle() {
        let config = AnnealConfig::default()
            .with_max_iterations(5000)
            .with_cooling_rate(0.999)
            .with_seed(42);
        let result = AnnealRunner::run(cycle(10), 2, &config).unwrap();
        assert!(result.is_proper(), "got {} conflicts", result.best_conflicts);
        assert_eq!(result.best.count_conflicts(), 0);
    }

    #[test]
    fn test_run_is_reproducible() {
        let graph = Arc::new(generate::gnp(25, 0.25, &mut StdRng::seed_from_u64(3)).unwrap());
        let config = AnnealConfig::default().with_max_iterations(800).with_seed(17);

        let a = AnnealRunner::run(graph.clone(), 3, &config).unwrap();
        let b = AnnealRunner::run(graph, 3, &config).unwrap();
        assert_eq!(a.best.colors(), b.best.colors());
        assert_eq!(a.iterations, b.iterations);
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_run_rejects_invalid_inputs() {
        let config = AnnealConfig::default();
        assert_eq!(
            AnnealRunner::run(cycle(4), 0, &config).unwrap_err(),
            ColoringError::InvalidColorCount(0)
        );
        assert!(matches!(
            AnnealRunner::run(cycle(4), 2, &config.clone().with_max_iterations(0)),
            Err(ColoringError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_cancel_flag_set_before_run() {
        // Odd cycle with two colors can never be solved.
        let config = AnnealConfig::default().with_seed(1);
        let cancel = Arc::new(AtomicBool::new(true));
        let result = AnnealRunner::run_with_cancel(cycle(7), 2, &config, Some(cancel)).unwrap();
        assert_eq!(result.stop_reason, Some(StopReason::Cancelled));
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_restarts_keep_best() {
        let graph = Arc::new(generate::gnp(30, 0.3, &mut StdRng::seed_from_u64(5)).unwrap());
        let config = AnnealConfig::default().with_max_iterations(300).with_seed(100);

        let best = AnnealRunner::run_restarts(graph.clone(), 3, &config, 4).unwrap();
        for i in 0..4u64 {
            let single =
                AnnealRunner::run(graph.clone(), 3, &config.clone().with_seed(100 + i)).unwrap();
            assert!(best.best_conflicts <= single.best_conflicts);
        }
    }

    #[test]
    fn test_restarts_zero_is_error() {
        let config = AnnealConfig::default();
        assert!(matches!(
            AnnealRunner::run_restarts(cycle(4), 2, &config, 0),
            Err(ColoringError::InvalidConfig(_))
        ));
    }
}
