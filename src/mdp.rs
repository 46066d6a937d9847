//! The model contract consumed by the solver, plus a table-backed
//! implementation for hand-written models.

use std::collections::HashMap;
use std::hash::Hash;

/// A finite Markov decision process, seen from the solver's side.
///
/// The solver treats the model as read-only ground truth: it never checks
/// that outcome probabilities sum to 1.0, that transitions lead to known
/// states, or that rewards are sensible. Those are the implementer's
/// contract. Two conventions it does rely on:
///
/// - a state is terminal exactly when [`actions`](Mdp::actions) returns an
///   empty vector (the default [`is_terminal`](Mdp::is_terminal) encodes
///   this; an override must agree with it);
/// - [`states`](Mdp::states) returns a stable order for the lifetime of
///   one model instance.
pub trait Mdp {
    /// Opaque state identifier, usable as a map key.
    type State: Clone + Eq + Hash;
    /// Opaque action identifier.
    type Action: Clone;

    /// Every state of the process.
    fn states(&self) -> Vec<Self::State>;

    /// Legal actions in `state`. Empty iff the state is terminal.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Ordered (next-state, probability) outcomes of taking `action` in
    /// `state`. Probabilities are non-negative and should sum to 1.0.
    fn transitions(&self, state: &Self::State, action: &Self::Action) -> Vec<(Self::State, f64)>;

    /// Reward for the transition `state --action--> next_state`.
    ///
    /// The signature is the general one, but the solver deliberately
    /// ignores the action and successor components: it always calls this
    /// with `None, None` and so assumes the reward depends on the
    /// originating state alone. A model whose rewards genuinely depend on
    /// the action taken or the state reached cannot be reproduced
    /// faithfully by this solver.
    fn reward(
        &self,
        state: &Self::State,
        action: Option<&Self::Action>,
        next_state: Option<&Self::State>,
    ) -> f64;

    /// Whether `state` is terminal.
    fn is_terminal(&self, state: &Self::State) -> bool {
        self.actions(state).is_empty()
    }
}

/// An in-memory MDP: states, actions, outcomes, and rewards held in plain
/// tables, populated incrementally.
///
/// States are reported in insertion order, and a state's actions in the
/// order their transitions were first added, which makes tie-breaking in
/// the solver reproducible. A state with no registered transitions is
/// terminal.
///
/// # Examples
/// ```
/// use valiter::{Mdp, TabularMdp};
///
/// let mut mdp = TabularMdp::new();
/// mdp.add_state("a", 0.0);
/// mdp.add_state("b", 10.0);
/// mdp.add_transition("a", "go", vec![("b", 1.0)]);
///
/// assert!(!mdp.is_terminal(&"a"));
/// assert!(mdp.is_terminal(&"b"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabularMdp<S, A> {
    states: Vec<S>,
    actions: HashMap<S, Vec<A>>,
    transitions: HashMap<(S, A), Vec<(S, f64)>>,
    rewards: HashMap<S, f64>,
}

impl<S, A> TabularMdp<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        TabularMdp {
            states: Vec::new(),
            actions: HashMap::new(),
            transitions: HashMap::new(),
            rewards: HashMap::new(),
        }
    }

    /// Registers a state and its reward. Re-adding a state overwrites the
    /// reward but keeps the original position in the enumeration order.
    pub fn add_state(&mut self, state: S, reward: f64) {
        if !self.states.contains(&state) {
            self.states.push(state.clone());
        }
        self.rewards.insert(state, reward);
    }

    /// Registers the outcome distribution of `action` in `state`. The
    /// first call for a given (state, action) pair also fixes the action's
    /// position in that state's enumeration order; later calls replace the
    /// outcomes.
    pub fn add_transition(&mut self, state: S, action: A, outcomes: Vec<(S, f64)>) {
        let known = self.actions.entry(state.clone()).or_default();
        if !known.contains(&action) {
            known.push(action.clone());
        }
        self.transitions.insert((state, action), outcomes);
    }
}

impl<S, A> Mdp for TabularMdp<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    type State = S;
    type Action = A;

    fn states(&self) -> Vec<S> {
        self.states.clone()
    }

    fn actions(&self, state: &S) -> Vec<A> {
        self.actions.get(state).cloned().unwrap_or_default()
    }

    fn transitions(&self, state: &S, action: &A) -> Vec<(S, f64)> {
        self.transitions
            .get(&(state.clone(), action.clone()))
            .cloned()
            .unwrap_or_default()
    }

    fn reward(&self, state: &S, _action: Option<&A>, _next_state: Option<&S>) -> f64 {
        *self.rewards.get(state).unwrap_or(&0.0)
    }
}
