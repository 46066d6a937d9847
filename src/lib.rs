//! Value iteration for finite Markov decision processes.
//!
//! The crate has one moving part: [`ValueIterationSolver`], which takes a
//! caller-supplied model of an MDP (anything implementing [`Mdp`]), runs a
//! fixed number of synchronous Bellman-update sweeps at construction time,
//! and then answers read-only queries against the resulting value table:
//! state values, Q-values, and a deterministic greedy policy.
//!
//! The model itself (which states exist, which actions are legal, where
//! transitions lead and with what probability, what the rewards are) is
//! entirely the caller's business. [`TabularMdp`] is provided as a plain
//! in-memory implementation of the contract for small hand-written models.

pub mod error;
pub mod mdp;
pub mod solver;

pub use error::{Result, SolverError};
pub use mdp::{Mdp, TabularMdp};
pub use solver::{ValueIterationSolver, DEFAULT_DISCOUNT, DEFAULT_ITERATIONS};
