//! Serializable summary of a solve run.
//!
//! This is the hand-off for anything recording results: how the search ended,
//! the move count, and the moves themselves.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::geometry::{Move, Position};
use crate::solver::{SolveOutcome, SolveResult};
use crate::tower::TowerPuzzle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Solved,
    Exhausted,
    LimitReached,
}

impl<P> From<&SolveOutcome<P>> for OutcomeKind {
    fn from(outcome: &SolveOutcome<P>) -> Self {
        match outcome {
            SolveOutcome::Solved(_) => OutcomeKind::Solved,
            SolveOutcome::Exhausted => OutcomeKind::Exhausted,
            SolveOutcome::LimitReached => OutcomeKind::LimitReached,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    pub disk_count: usize,
    pub solved: bool,
    pub outcome: OutcomeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moves: Vec<Move<Position>>,
    pub states_visited: usize,
    pub states_expanded: usize,
    pub elapsed_ms: u64,
}

impl SolveReport {
    pub fn new(puzzle: &TowerPuzzle, result: &SolveResult<Position>, elapsed: Duration) -> Self {
        let moves = result.outcome.moves().map(<[_]>::to_vec);
        Self {
            disk_count: puzzle.disk_count(),
            solved: result.outcome.is_solved(),
            outcome: OutcomeKind::from(&result.outcome),
            move_count: moves.as_ref().map(Vec::len),
            moves: moves.unwrap_or_default(),
            states_visited: result.stats.states_visited,
            states_expanded: result.stats.states_expanded,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SearchStats;

    fn stats() -> SearchStats {
        SearchStats {
            states_visited: 12,
            states_expanded: 9,
            max_frontier: 4,
        }
    }

    #[test]
    fn test_solved_report_json() {
        let puzzle = TowerPuzzle::new(1).unwrap();
        let result = SolveResult {
            outcome: SolveOutcome::Solved(vec![Move::new(
                Position::new(1, 0),
                Position::new(1, 2),
            )]),
            stats: stats(),
        };
        let report = SolveReport::new(&puzzle, &result, Duration::from_millis(7));

        insta::assert_snapshot!(serde_json::to_string_pretty(&report).unwrap(), @r#"
        {
          "diskCount": 1,
          "solved": true,
          "outcome": "solved",
          "moveCount": 1,
          "moves": [
            {
              "from": {
                "row": 1,
                "col": 0
              },
              "to": {
                "row": 1,
                "col": 2
              }
            }
          ],
          "statesVisited": 12,
          "statesExpanded": 9,
          "elapsedMs": 7
        }
        "#);
    }

    #[test]
    fn test_unsolved_report_omits_moves() {
        let puzzle = TowerPuzzle::default();
        let result = SolveResult::<Position> {
            outcome: SolveOutcome::Exhausted,
            stats: stats(),
        };
        let report = SolveReport::new(&puzzle, &result, Duration::ZERO);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["solved"], false);
        assert_eq!(json["outcome"], "exhausted");
        assert!(json.get("moveCount").is_none());
        assert!(json.get("moves").is_none());

        let parsed: SolveReport = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_huge_elapsed_saturates() {
        let puzzle = TowerPuzzle::new(1).unwrap();
        let result = SolveResult::<Position> {
            outcome: SolveOutcome::LimitReached,
            stats: stats(),
        };
        let report = SolveReport::new(&puzzle, &result, Duration::MAX);
        assert_eq!(report.elapsed_ms, u64::MAX);
    }

    #[test]
    fn test_outcome_kind_names() {
        let kind = OutcomeKind::from(&SolveOutcome::<Position>::LimitReached);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"limit_reached\"");
    }
}
