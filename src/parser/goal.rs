use super::State;

/// Stop condition for [`Parser::parse_until`].
///
/// A goal is tested once when the call starts, then right after every state transition.
///
/// Implemented for:
///
/// - [`State`], reached when the parser is in exactly that state
/// - `[State; N]` and `[State]`, reached when the parser is in any of the states
/// - [`FromFn`], reached when the closure returns `true`
///
/// ```
/// use stepline::{Goal, State, parser::goal};
///
/// assert!(State::VersionDone.is_reached(State::VersionDone));
/// assert!([State::HeaderValueDone, State::HeadersDone].is_reached(State::HeadersDone));
/// assert!(goal::from_fn(|s| s.is_head_complete()).is_reached(State::Body));
/// ```
///
/// [`Parser::parse_until`]: super::Parser::parse_until
pub trait Goal {
    /// Returns `true` if parsing should stop at `state`.
    fn is_reached(&self, state: State) -> bool;
}

impl Goal for State {
    #[inline]
    fn is_reached(&self, state: State) -> bool {
        *self == state
    }
}

impl<const N: usize> Goal for [State; N] {
    #[inline]
    fn is_reached(&self, state: State) -> bool {
        self.contains(&state)
    }
}

impl Goal for [State] {
    #[inline]
    fn is_reached(&self, state: State) -> bool {
        self.contains(&state)
    }
}

impl<G: Goal + ?Sized> Goal for &G {
    #[inline]
    fn is_reached(&self, state: State) -> bool {
        G::is_reached(self, state)
    }
}

/// Create a [`Goal`] from a predicate closure.
#[inline]
pub fn from_fn<F: Fn(State) -> bool>(f: F) -> FromFn<F> {
    FromFn(f)
}

/// A [`Goal`] backed by a closure, see [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F: Fn(State) -> bool> Goal for FromFn<F> {
    #[inline]
    fn is_reached(&self, state: State) -> bool {
        (self.0)(state)
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
