//! Breadth-first puzzle solver.
//!
//! Explores the state graph level by level from the initial state, so the
//! first solved state dequeued is reached by a shortest move sequence.
//!
//! - FxHashSet of full states for deduplication (each state enqueued once)
//! - Parent links kept in a flat arena, so path reconstruction is a loop
//!   over indices and expanded states can be dropped
//! - Optional cap on distinct states for callers that need a bound

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::geometry::Move;
use crate::PuzzleState;

/// Search limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Stop discovering new states once this many are known; states already
    /// discovered are still checked. `None` searches until solved or exhausted.
    pub max_states: Option<usize>,
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome<P> {
    /// A shortest move sequence from the initial state to a solved one.
    /// Empty when the initial state is already solved.
    Solved(Vec<Move<P>>),
    /// Every reachable state was expanded without finding a solution.
    Exhausted,
    /// `max_states` was hit and none of the states discovered within it
    /// was solved.
    LimitReached,
}

impl<P> SolveOutcome<P> {
    pub fn moves(&self) -> Option<&[Move<P>]> {
        match self {
            SolveOutcome::Solved(moves) => Some(moves),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }
}

/// Counters describing the work a search did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Distinct states discovered, including the initial one.
    pub states_visited: usize,
    /// States taken off the frontier.
    pub states_expanded: usize,
    /// Largest frontier length seen.
    pub max_frontier: usize,
}

#[derive(Debug, Clone)]
pub struct SolveResult<P> {
    pub outcome: SolveOutcome<P>,
    pub stats: SearchStats,
}

/// How a discovered state was reached: the arena index of its parent and the
/// move applied to it. The root has neither.
struct Link<P> {
    parent: Option<usize>,
    via: Option<Move<P>>,
}

/// Walks parent links from `node` back to the root and returns the moves in
/// play order.
fn reconstruct_path<P: Copy>(links: &[Link<P>], mut node: usize) -> Vec<Move<P>> {
    let mut path = Vec::new();
    while let Link {
        parent: Some(parent),
        via: Some(mv),
    } = links[node]
    {
        path.push(mv);
        node = parent;
    }
    path.reverse();
    path
}

#[derive(Debug, Clone, Default)]
pub struct BreadthFirstSolver {
    config: SolverConfig,
}

impl BreadthFirstSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Finds a shortest move sequence from `initial` to a solved state.
    ///
    /// `initial` is never modified; every explored state is a duplicate.
    pub fn solve<S: PuzzleState>(&self, initial: &S) -> SolveResult<S::Position> {
        let mut stats = SearchStats::default();
        let mut visited: FxHashSet<S> = FxHashSet::default();
        let mut links: Vec<Link<S::Position>> = Vec::new();
        let mut frontier: VecDeque<(usize, S)> = VecDeque::new();

        visited.insert(initial.duplicate());
        links.push(Link {
            parent: None,
            via: None,
        });
        frontier.push_back((0, initial.duplicate()));
        stats.states_visited = 1;
        stats.max_frontier = 1;

        let mut limit_hit = false;

        while let Some((node, state)) = frontier.pop_front() {
            stats.states_expanded += 1;

            if state.is_solved() {
                return SolveResult {
                    outcome: SolveOutcome::Solved(reconstruct_path(&links, node)),
                    stats,
                };
            }
            // past the limit, only drain what was already discovered
            if limit_hit {
                continue;
            }

            for mv in state.legal_moves() {
                let mut next = state.duplicate();
                let applied = next.make_move(&mv);
                debug_assert!(
                    applied.is_ok(),
                    "make_move rejected a move from legal_moves"
                );
                if applied.is_err() || visited.contains(&next) {
                    continue;
                }

                if self
                    .config
                    .max_states
                    .is_some_and(|limit| visited.len() >= limit)
                {
                    limit_hit = true;
                    break;
                }

                visited.insert(next.duplicate());
                links.push(Link {
                    parent: Some(node),
                    via: Some(mv),
                });
                frontier.push_back((links.len() - 1, next));

                stats.states_visited = visited.len();
                stats.max_frontier = stats.max_frontier.max(frontier.len());
            }
        }

        let outcome = if limit_hit {
            SolveOutcome::LimitReached
        } else {
            SolveOutcome::Exhausted
        };
        SolveResult { outcome, stats }
    }
}

/// Solves `initial` with no search limits.
pub fn solve<S: PuzzleState>(initial: &S) -> SolveResult<S::Position> {
    BreadthFirstSolver::new().solve(initial)
}
