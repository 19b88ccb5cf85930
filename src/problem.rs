//! The abstract problem contract every searchable state space implements.

use crate::error::Result;
use std::fmt::Debug;
use std::hash::Hash;

/// Cost of a step or of a whole path. Unsigned, so step costs can never be negative.
pub type Cost = u32;

/// A state space the search strategies in [`crate::solver`] can explore.
///
/// States must be immutable values: `result` always returns a new state and never
/// modifies the one it was given. They must also be hashable, since graph search
/// keeps an explored set of them.
///
/// # Examples
/// ```
/// use puzzle_search::problem::{Cost, Problem};
/// use puzzle_search::error::{Error, Result};
///
/// /// Count up from `start` to `target` by steps of one or two.
/// struct CountUp {
///     start: u32,
///     target: u32,
/// }
///
/// impl Problem for CountUp {
///     type State = u32;
///     type Action = u32;
///
///     fn initial_state(&self) -> u32 {
///         self.start
///     }
///
///     fn actions(&self, state: &u32) -> Vec<u32> {
///         [1, 2].into_iter().filter(|step| state + step <= self.target).collect()
///     }
///
///     fn result(&self, state: &u32, action: &u32) -> Result<u32> {
///         if !self.actions(state).contains(action) {
///             return Err(Error::InvalidAction {
///                 action: action.to_string(),
///                 state: state.to_string(),
///             });
///         }
///         Ok(state + action)
///     }
///
///     fn goal_test(&self, state: &u32) -> bool {
///         *state == self.target
///     }
/// }
///
/// let problem = CountUp { start: 0, target: 3 };
/// assert_eq!(problem.step_cost(&0, &1, &1), 1 as Cost);
/// assert_eq!(problem.heuristic(&0), 0);
/// assert!(problem.result(&3, &1).is_err());
/// ```
pub trait Problem {
    /// One configuration of the problem's world.
    type State: Clone + Eq + Hash + Debug;
    /// A label identifying one legal move from a state.
    type Action: Clone + Debug;

    /// The start configuration.
    fn initial_state(&self) -> Self::State;

    /// All legal actions from `state`. An empty vector marks a dead end.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Deterministic transition function.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::InvalidAction`] if `action` is not one of
    /// `self.actions(state)`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    /// Whether `state` satisfies the goal condition.
    fn goal_test(&self, state: &Self::State) -> bool;

    /// Cost of taking `action` from `state` to `next`. Unit cost unless overridden.
    fn step_cost(&self, _state: &Self::State, _action: &Self::Action, _next: &Self::State) -> Cost {
        1
    }

    /// Estimated cost from `state` to the nearest goal.
    ///
    /// Defaults to zero, which turns A* into uniform-cost search. Must never
    /// overestimate the true cost for A* to return optimal solutions.
    fn heuristic(&self, _state: &Self::State) -> Cost {
        0
    }
}
