//! Simulated Annealing (SA) for graph k-coloring.
//!
//! The search minimizes the number of conflicting edges. Its neighbor move
//! recolors one random vertex, worsening moves are accepted with the
//! Metropolis probability `exp((current - candidate) / T)`, and the
//! temperature cools geometrically after every move.
//!
//! # Key Types
//!
//! - [`AnnealingEngine`]: resumable state machine with a single-step
//!   transition, for both batch and externally paced execution
//! - [`AnnealConfig`]: iteration budget, temperature, cooling rate, seed
//! - [`AnnealRunner`]: batch entry points (cancellation, restarts)
//! - [`AnnealResult`]: best coloring and run statistics
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Johnson, Aragon, McGeoch & Schevon (1991), "Optimization by Simulated
//!   Annealing: An Experimental Evaluation; Part II, Graph Coloring and
//!   Number Partitioning"

mod config;
mod engine;
mod runner;
mod types;

pub use config::{AnnealConfig, MIN_TEMPERATURE};
pub use engine::AnnealingEngine;
pub use runner::{AnnealResult, AnnealRunner};
pub use types::{AnnealTrace, EngineStatus, MoveStats, StopReason};
