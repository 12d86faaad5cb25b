use super::domain::{DistrictRow, Priority, ScoredRow};

/// Weight of the first-chosen priority.
pub const FIRST_WEIGHT: f64 = 0.7;
/// Weight of the second-chosen priority.
pub const SECOND_WEIGHT: f64 = 0.3;

/// Attach a weighted composite score to every row.
///
/// The split is fixed and asymmetric in favor of the first choice. When both
/// priorities resolve to the same rank column the weights stack (1.0 total on
/// that column); that is intended behavior, not an error, and deduplicating
/// would change ranking outcomes.
pub fn compute_scores(
    rows: Vec<DistrictRow>,
    first: Priority,
    second: Priority,
) -> Vec<ScoredRow> {
    rows.into_iter()
        .map(|row| {
            let final_score = FIRST_WEIGHT * f64::from(first.rank_in(&row))
                + SECOND_WEIGHT * f64::from(second.rank_in(&row));
            ScoredRow { row, final_score }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::test_support::row;

    #[test]
    fn weights_sum_to_one() {
        assert!((FIRST_WEIGHT + SECOND_WEIGHT - 1.0).abs() < 1e-9);
    }

    #[test]
    fn score_is_exact_weighted_sum_of_the_two_ranks() {
        let rows = vec![row("Old Town", |r| {
            r.rank_by_price = 4;
            r.rank_by_crime = 9;
        })];

        let scored = compute_scores(rows, Priority::Cheapest, Priority::Safest);
        assert_eq!(scored.len(), 1);
        assert!((scored[0].final_score - (0.7 * 4.0 + 0.3 * 9.0)).abs() < 1e-9);
    }

    #[test]
    fn scoring_is_deterministic() {
        let rows: Vec<_> = (1..=5)
            .map(|rank| {
                row("Riverside", move |r| {
                    r.rank_by_area = rank;
                    r.rank_by_rooms = 13 - rank;
                })
            })
            .collect();

        let once = compute_scores(rows.clone(), Priority::BiggestArea, Priority::MostRooms);
        let twice = compute_scores(rows, Priority::BiggestArea, Priority::MostRooms);
        assert_eq!(once, twice);
    }

    #[test]
    fn duplicate_priority_stacks_both_weights_on_one_column() {
        let rows = vec![row("Harbor", |r| r.rank_by_heating_price = 6)];

        let scored = compute_scores(rows, Priority::CheapestHeating, Priority::CheapestHeating);
        assert!((scored[0].final_score - 6.0).abs() < 1e-9);
    }

    #[test]
    fn original_rank_columns_are_untouched() {
        let rows = vec![row("Meadow", |r| {
            r.rank_by_price = 2;
            r.rank_by_crime = 11;
        })];

        let scored = compute_scores(rows, Priority::Cheapest, Priority::Safest);
        assert_eq!(scored[0].row.rank_by_price, 2);
        assert_eq!(scored[0].row.rank_by_crime, 11);
    }
}
