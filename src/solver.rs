pub mod value_iteration;

pub use value_iteration::{ValueIterationSolver, DEFAULT_DISCOUNT, DEFAULT_ITERATIONS};
