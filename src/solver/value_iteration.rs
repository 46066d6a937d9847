//! Value iteration: bounded synchronous Bellman-update sweeps over a
//! caller-supplied MDP model, then read-only value/Q-value/policy queries.

use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{Result, SolverError};
use crate::mdp::Mdp;

/// Discount factor used by [`ValueIterationSolver::new`].
pub const DEFAULT_DISCOUNT: f64 = 0.9;

/// Sweep count used by [`ValueIterationSolver::new`].
pub const DEFAULT_ITERATIONS: usize = 100;

/// Solves a finite MDP by value iteration.
///
/// Construction runs a fixed number of synchronous sweeps: each sweep
/// computes a fresh value table from the previous one (never in place, so
/// no state ever observes a partial update from its own sweep) and swaps
/// it in at the sweep boundary. The iteration count is a hard bound, not a
/// convergence test; the solver never stops early. Afterwards, the value
/// table is frozen and all queries are read-only.
///
/// Rewards are projected onto states: the model's reward function is
/// always called with an empty action and successor, so a reward that
/// depends on either is flattened (see [`Mdp::reward`]).
///
/// # Examples
/// ```
/// use valiter::{TabularMdp, ValueIterationSolver};
///
/// // Stay at work for a small reward, or go home for a larger one.
/// let mut mdp = TabularMdp::new();
/// mdp.add_state("work", 1.0);
/// mdp.add_state("home", 2.0);
/// mdp.add_transition("work", "stay", vec![("work", 1.0)]);
/// mdp.add_transition("work", "leave", vec![("home", 1.0)]);
/// mdp.add_transition("home", "stay", vec![("home", 1.0)]);
///
/// let solver = ValueIterationSolver::new(mdp);
/// assert_eq!(solver.policy(&"work"), Some("leave"));
/// assert!(solver.value(&"home") > solver.value(&"work"));
/// ```
pub struct ValueIterationSolver<M: Mdp> {
    mdp: M,
    discount: f64,
    values: HashMap<M::State, f64>,
}

impl<M: Mdp> ValueIterationSolver<M> {
    /// Builds a solver with the default discount (0.9) and sweep count
    /// (100).
    pub fn new(mdp: M) -> Self {
        let mut solver = ValueIterationSolver {
            mdp,
            discount: DEFAULT_DISCOUNT,
            values: HashMap::new(),
        };
        solver.run(DEFAULT_ITERATIONS);
        solver
    }

    /// Builds a solver with an explicit discount factor and sweep count.
    ///
    /// Runs `iterations` sweeps immediately; with `iterations == 0` every
    /// state keeps the initial value 0.0.
    ///
    /// # Errors
    /// [`SolverError::InvalidDiscount`] if `discount` is outside (0, 1].
    pub fn with_params(mdp: M, discount: f64, iterations: usize) -> Result<Self> {
        if discount <= 0.0 || discount > 1.0 {
            return Err(SolverError::InvalidDiscount(discount));
        }
        let mut solver = ValueIterationSolver {
            mdp,
            discount,
            values: HashMap::new(),
        };
        solver.run(iterations);
        Ok(solver)
    }

    fn run(&mut self, iterations: usize) {
        for sweep in 0..iterations {
            self.sweep();
            trace!("sweep {} of {} complete", sweep + 1, iterations);
        }
        debug!(
            "value iteration done: {} sweeps over {} states",
            iterations,
            self.mdp.states().len()
        );
    }

    /// One synchronous sweep: every update reads the previous table and
    /// writes into the next one, which replaces it wholesale at the end.
    fn sweep(&mut self) {
        // Start from a copy so terminal states carry their entries forward
        // untouched.
        let mut next = self.values.clone();
        for state in self.mdp.states() {
            if self.mdp.is_terminal(&state) {
                continue;
            }
            let best = self.best_by(self.mdp.actions(&state), |action| {
                self.expected_value(&state, action)
            });
            let backed_up = self.reward(&state) + self.discount * best.map_or(0.0, |(_, v)| v);
            next.insert(state, backed_up);
        }
        self.values = next;
    }

    /// Probability-weighted value of the successors of (`state`, `action`)
    /// under the current table.
    fn expected_value(&self, state: &M::State, action: &M::Action) -> f64 {
        self.mdp
            .transitions(state, action)
            .iter()
            .map(|(next_state, prob)| prob * self.value(next_state))
            .sum()
    }

    /// First-seen-wins argmax: a later action displaces the running best
    /// only when its score is strictly greater, so enumeration order
    /// decides ties. `None` iff `actions` is empty.
    fn best_by<F>(&self, actions: Vec<M::Action>, mut score: F) -> Option<(M::Action, f64)>
    where
        F: FnMut(&M::Action) -> f64,
    {
        let mut best: Option<(M::Action, f64)> = None;
        for action in actions {
            let value = score(&action);
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((action, value)),
            }
        }
        best
    }

    /// State-only reward projection: the model's general reward signature
    /// is invoked with empty action and successor slots.
    fn reward(&self, state: &M::State) -> f64 {
        self.mdp.reward(state, None, None)
    }

    /// Value of `state` in the frozen table; 0.0 for a state the sweeps
    /// never wrote.
    pub fn value(&self, state: &M::State) -> f64 {
        *self.values.get(state).unwrap_or(&0.0)
    }

    /// Q-value of taking `action` in `state` against the frozen table:
    /// `reward(state) + discount * Σ p(s') * value(s')`.
    ///
    /// The action is not checked for legality; querying a pair the model
    /// has no transitions for yields the bare reward term.
    pub fn q_value(&self, state: &M::State, action: &M::Action) -> f64 {
        self.reward(state) + self.discount * self.expected_value(state, action)
    }

    /// The greedy action in `state` under the frozen table, or `None` if
    /// the state has no legal actions (terminal). Ties go to the action
    /// enumerated first by the model.
    pub fn best_action(&self, state: &M::State) -> Option<M::Action> {
        self.best_by(self.mdp.actions(state), |action| self.q_value(state, action))
            .map(|(action, _)| action)
    }

    /// The computed policy at `state`. Alias of [`best_action`](Self::best_action).
    pub fn policy(&self, state: &M::State) -> Option<M::Action> {
        self.best_action(state)
    }

    /// The action to take in `state`: the greedy policy, with no
    /// exploration. Alias of [`best_action`](Self::best_action).
    pub fn action(&self, state: &M::State) -> Option<M::Action> {
        self.best_action(state)
    }

    /// The discount factor the solver was built with.
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// The model the solver was built over.
    pub fn mdp(&self) -> &M {
        &self.mdp
    }
}
