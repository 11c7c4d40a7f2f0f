//! Engine status, statistics, and trace types.

/// Why an annealing search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The current coloring has zero conflicts.
    Solved,
    /// The iteration budget was used up.
    MaxIterations,
    /// The temperature dropped below [`MIN_TEMPERATURE`](super::MIN_TEMPERATURE).
    Frozen,
    /// Stopped through a cancellation flag.
    Cancelled,
    /// No recolor move could be generated.
    NoMove,
}

/// Lifecycle of an [`AnnealingEngine`](super::AnnealingEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Running,
    Terminated(StopReason),
}

impl EngineStatus {
    pub fn is_terminated(&self) -> bool {
        matches!(self, EngineStatus::Terminated(_))
    }
}

/// Move counters accumulated over a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveStats {
    /// Candidate states generated.
    pub evaluated: usize,
    /// Candidates adopted as the current state (including improvements).
    pub accepted: usize,
    /// Candidates with strictly fewer conflicts than the current state.
    pub improving: usize,
}

/// Per-step history for progress plots.
///
/// Empty unless [`AnnealConfig::record_trace`](super::AnnealConfig::record_trace)
/// is set. Entry 0 is the initial state, then one entry per completed move.
/// A step that finds a conflict-free coloring adds a final entry without
/// advancing the iteration counter, so a solved run holds `iterations + 2`
/// entries (or one, if the initial state was already proper).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealTrace {
    /// Temperature after each move.
    pub temperatures: Vec<f64>,
    /// Conflicts of the current state after each move.
    pub conflicts: Vec<usize>,
    /// Conflicts of the best state after each move. Non-increasing.
    pub best_conflicts: Vec<usize>,
}
