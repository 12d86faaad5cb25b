use super::domain::{RankingError, ScoredRow};
use std::collections::BTreeMap;

/// Sum composite scores per district and pick the district with the lowest
/// total (rank 1 is best, so lower is better).
///
/// Totals are summed, not averaged: districts with more rows weigh heavier,
/// which is intentional given the bounded source ranking scale. Ties resolve
/// to the lexicographically-first district name, which the sorted grouping
/// makes deterministic.
///
/// Returns the winner together with all of its rows; downstream description
/// needs the per-row raw averages, not just the aggregate.
pub fn select_best_district(
    scored_rows: Vec<ScoredRow>,
) -> Result<(String, Vec<ScoredRow>), RankingError> {
    if scored_rows.is_empty() {
        return Err(RankingError::EmptyDataset);
    }

    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for scored in &scored_rows {
        *totals.entry(scored.row.district.as_str()).or_insert(0.0) += scored.final_score;
    }

    let mut winner: Option<(&str, f64)> = None;
    for (&district, &total) in &totals {
        match winner {
            Some((_, best)) if total >= best => {}
            _ => winner = Some((district, total)),
        }
    }

    // Non-empty input guarantees at least one group.
    let (district, _) = winner.ok_or(RankingError::EmptyDataset)?;
    let district = district.to_string();

    let rows = scored_rows
        .into_iter()
        .filter(|scored| scored.row.district == district)
        .collect();

    Ok((district, rows))
}
