use crate::grid::{CellState, Grid, Row, BOARD_WIDTH, MAX_ROUNDS};

use super::outcome::{LossKind, Verdict};

/// Classify a grid as a win, an infeasible sequence of guesses, or a loss
/// by running out of attempts.
///
/// Rows are scanned in adjacent pairs and the first win or inconsistency
/// ends the scan; rows after it are never looked at. Within a pair the
/// checks run in a fixed order:
///
/// 1. the later row is all Hit (win),
/// 2. a column that was Hit is no longer Hit,
/// 3. the Hit + Present total went down,
/// 4. a row with exactly one Present is repeated unchanged,
/// 5. a row with exactly two Present appears three times in a row.
pub fn classify(grid: &Grid) -> Verdict {
    let rows = grid.rows();

    if rows[0].is_win() {
        tracing::debug!("won in round 1");
        return Verdict::Win { round: 1 };
    }

    for index in 0..rows.len() - 1 {
        if let Some(verdict) = check_pair(rows, index) {
            tracing::debug!(round = verdict.round(), verdict = %verdict, "scan stopped");
            return verdict;
        }
    }

    tracing::debug!(rounds = rows.len(), "no win and no inconsistency");
    Verdict::Loss {
        round: MAX_ROUNDS,
        column: None,
        kind: LossKind::OutOfAttempts,
        description: String::new(),
    }
}

/// Check rows `index` and `index + 1`.
fn check_pair(rows: &[Row], index: usize) -> Option<Verdict> {
    let prev = &rows[index];
    let next = &rows[index + 1];
    let round = index + 2;

    if next.is_win() {
        return Some(Verdict::Win { round });
    }

    let mut column = 0;
    for col in 0..BOARD_WIDTH {
        column = col;
        if prev.get(col) == CellState::Hit && next.get(col) != CellState::Hit {
            return Some(infeasible(round, Some(col + 1), "Dropped a Hit".into()));
        }
    }

    // Reported column is wherever the hit scan stopped, not a column tied to
    // the count itself. Downstream callers match on it as is.
    let (before, after) = (prev.informative_count(), next.informative_count());
    if before > after {
        return Some(infeasible(
            round,
            Some(column + 1),
            format!("Total Hit/Present count went from {before} to {after}"),
        ));
    }

    let present = prev.count(CellState::Present);
    if present == 1 && prev == next {
        return Some(infeasible(
            round,
            None,
            "No new information revealed, exactly 1 Present and same as previous round".into(),
        ));
    }
    if present == 2 && prev == next && index > 0 && rows[index - 1] == *prev {
        return Some(infeasible(
            round,
            None,
            "No new information revealed, exactly 2 Present and same as previous 2 rounds".into(),
        ));
    }

    None
}

fn infeasible(round: usize, column: Option<usize>, description: String) -> Verdict {
    Verdict::Loss {
        round,
        column,
        kind: LossKind::InfeasibleGuess,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::new(rows.iter().map(|r| r.parse().unwrap()).collect()).unwrap()
    }

    fn out_of_attempts() -> Verdict {
        Verdict::Loss {
            round: 6,
            column: None,
            kind: LossKind::OutOfAttempts,
            description: String::new(),
        }
    }

    #[test]
    fn test_win_in_round_one() {
        assert_eq!(classify(&grid(&["GGGGG"])), Verdict::Win { round: 1 });
    }

    #[test]
    fn test_win_in_round_two() {
        assert_eq!(
            classify(&grid(&["BBBBB", "GGGGG"])),
            Verdict::Win { round: 2 }
        );
    }

    #[test]
    fn test_win_is_checked_before_consistency() {
        assert_eq!(
            classify(&grid(&["GYBBB", "GGGGG"])),
            Verdict::Win { round: 2 }
        );
    }

    #[test]
    fn test_violation_ends_scan_before_later_win() {
        let verdict = classify(&grid(&["BYBBB", "BYBBB", "GGGGG"]));
        assert_eq!(verdict.round(), 2);
        assert_eq!(verdict.loss_kind(), Some(LossKind::InfeasibleGuess));
    }

    #[test]
    fn test_scan_stops_at_first_win() {
        assert_eq!(
            classify(&grid(&["BBBBB", "GGGGG", "BBBBB", "BYBBB"])),
            Verdict::Win { round: 2 }
        );
    }

    #[test]
    fn test_dropped_hit() {
        assert_eq!(
            classify(&grid(&["GBBBB", "BBBBB"])),
            Verdict::Loss {
                round: 2,
                column: Some(1),
                kind: LossKind::InfeasibleGuess,
                description: "Dropped a Hit".into(),
            }
        );
    }

    #[test]
    fn test_dropped_hit_reports_leftmost_column() {
        let verdict = classify(&grid(&["BBBBB", "BBGBG", "BBYBY"]));
        assert_eq!(verdict.round(), 3);
        assert_eq!(verdict.column(), Some(3));
        assert_eq!(
            verdict.describe(),
            "Loss (Infeasible Guess): Round 3 Column 3 Dropped a Hit"
        );
    }

    #[test]
    fn test_dropped_hit_takes_priority_over_count() {
        let verdict = classify(&grid(&["GYBBB", "BBBBB"]));
        assert_eq!(verdict.column(), Some(1));
        assert_eq!(
            verdict.describe(),
            "Loss (Infeasible Guess): Round 2 Column 1 Dropped a Hit"
        );
    }

    #[test]
    fn test_decreasing_total_uses_last_scanned_column() {
        assert_eq!(
            classify(&grid(&["YYBBB", "YBBBB"])),
            Verdict::Loss {
                round: 2,
                column: Some(5),
                kind: LossKind::InfeasibleGuess,
                description: "Total Hit/Present count went from 2 to 1".into(),
            }
        );
    }

    #[test]
    fn test_hit_may_replace_present() {
        assert_eq!(
            classify(&grid(&["BYBBB", "BGBBB"])),
            out_of_attempts()
        );
    }

    #[test]
    fn test_single_present_repeated() {
        assert_eq!(
            classify(&grid(&["BYBBB", "BYBBB"])),
            Verdict::Loss {
                round: 2,
                column: None,
                kind: LossKind::InfeasibleGuess,
                description:
                    "No new information revealed, exactly 1 Present and same as previous round"
                        .into(),
            }
        );
    }

    #[test]
    fn test_single_present_repeated_with_hits() {
        let verdict = classify(&grid(&["BBBBB", "GYBBB", "GYBBB"]));
        assert_eq!(verdict.round(), 3);
        assert_eq!(verdict.loss_kind(), Some(LossKind::InfeasibleGuess));
    }

    #[test]
    fn test_double_present_repeated_once_is_tolerated() {
        assert_eq!(
            classify(&grid(&["BYYBB", "BYYBB"])),
            out_of_attempts()
        );
    }

    #[test]
    fn test_double_present_repeated_three_times() {
        assert_eq!(
            classify(&grid(&["BYYBB", "BYYBB", "BYYBB"])),
            Verdict::Loss {
                round: 3,
                column: None,
                kind: LossKind::InfeasibleGuess,
                description:
                    "No new information revealed, exactly 2 Present and same as previous 2 rounds"
                        .into(),
            }
        );
    }

    #[test]
    fn test_double_present_after_different_row_is_tolerated() {
        assert_eq!(
            classify(&grid(&["BBBBB", "BYYBB", "BYYBB"])),
            out_of_attempts()
        );
    }

    #[test]
    fn test_repeated_rows_with_other_present_counts_fall_through() {
        assert_eq!(
            classify(&grid(&["YYYBB", "YYYBB", "YYYBB"])),
            out_of_attempts()
        );
        assert_eq!(
            classify(&grid(&["BBBBB", "BBBBB", "BBBBB"])),
            out_of_attempts()
        );
    }

    #[test]
    fn test_six_consistent_rows_run_out() {
        let verdict = classify(&grid(&[
            "BBBBB", "BYBBB", "BYYBB", "GYYBB", "GGYYB", "GGGYY",
        ]));
        assert_eq!(verdict, out_of_attempts());
        assert_eq!(verdict.describe(), "Loss (Ran out of Guesses): Round 6");
    }

    #[test]
    fn test_single_non_winning_row_runs_out() {
        assert_eq!(classify(&grid(&["BYBBB"])), out_of_attempts());
    }

    #[test]
    fn test_consistent_pairs_are_never_infeasible() {
        let pairs = [
            ("BBBBB", "BBBBB"),
            ("BBBBB", "YBBBB"),
            ("YBBBB", "BYBBB"),
            ("GBBBB", "GYBBB"),
            ("GYBBB", "GBYBB"),
            ("YYBBB", "GYBBB"),
            ("GGYBB", "GGBYB"),
            ("YYYYB", "YYYYB"),
        ];
        for (prev, next) in pairs {
            let verdict = classify(&grid(&[prev, next]));
            assert_eq!(verdict, out_of_attempts(), "{prev} -> {next}");
        }
    }
}
