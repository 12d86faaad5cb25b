use super::aggregate::select_best_district;
use super::descriptor::{generate_pros_cons, CcDistanceBand};
use super::domain::{DistrictRow, Priority, RankingError, ScoredRow};
use super::scoring::compute_scores;
use serde::Serialize;
use tracing::warn;

/// Outcome of one full ranking pass: the winning district, its scored rows,
/// and the derived presentation fields. Built fresh per request and owned by
/// the caller; nothing here is shared or cached across requests.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResult {
    pub district: String,
    pub rows: Vec<ScoredRow>,
    pub avg_cost: f64,
    pub avg_crime: i64,
    pub avg_area: f64,
    pub avg_heating_price: f64,
    pub cc_distance: CcDistanceBand,
    pub pros: Vec<&'static str>,
    pub cons: Vec<&'static str>,
}

/// Per-row count arrays for the winning district, serialized verbatim for
/// charting. Field names match the established chart wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub under_300: Vec<u32>,
    pub from_300_to_600: Vec<u32>,
    pub from_600_to_900: Vec<u32>,
    pub above_900: Vec<u32>,
    pub number_of_modern_builds: Vec<u32>,
    pub number_of_old_builds: Vec<u32>,
}

impl SelectionResult {
    pub fn cc_distance_label(&self) -> &'static str {
        self.cc_distance.label()
    }

    pub fn chart_data(&self) -> ChartData {
        ChartData {
            under_300: self.rows.iter().map(|s| s.row.under_300).collect(),
            from_300_to_600: self.rows.iter().map(|s| s.row.from_300_to_600).collect(),
            from_600_to_900: self.rows.iter().map(|s| s.row.from_600_to_900).collect(),
            above_900: self.rows.iter().map(|s| s.row.above_900).collect(),
            number_of_modern_builds: self.rows.iter().map(|s| s.row.modern_count).collect(),
            number_of_old_builds: self.rows.iter().map(|s| s.row.old_count).collect(),
        }
    }
}

/// Run the whole pipeline: score every row against the two priorities,
/// aggregate to the winning district, then derive its display fields.
///
/// Pure and idempotent for a given snapshot; errors if the snapshot is
/// empty. Priority validation happens earlier, at [`Priority::from_label`].
pub fn select(
    rows: Vec<DistrictRow>,
    first: Priority,
    second: Priority,
) -> Result<SelectionResult, RankingError> {
    let scored = compute_scores(rows, first, second);
    let (district, winning_rows) = select_best_district(scored)?;

    let avg_cost = mean(&winning_rows, |row| row.avg_price);
    let avg_crime = mean(&winning_rows, |row| row.avg_crime).round() as i64;
    let avg_area = mean(&winning_rows, |row| row.avg_area);
    let avg_heating_price = mean(&winning_rows, |row| row.avg_heating_price);

    let mean_cc_rank = mean(&winning_rows, |row| f64::from(row.rank_by_cc_distance));
    let cc_distance = CcDistanceBand::from_mean_rank(mean_cc_rank);

    // The first row stands in for the district. Rows of one district are
    // expected to carry identical rank columns; surface a mismatch instead
    // of silently describing an arbitrary row.
    let representative = &winning_rows[0].row;
    if !ranks_uniform(&winning_rows, representative) {
        warn!(
            district = %district,
            "winning district rows disagree on rank columns; pros/cons reflect the first row"
        );
    }
    let (pros, cons) = generate_pros_cons(representative);

    Ok(SelectionResult {
        district,
        rows: winning_rows,
        avg_cost,
        avg_crime,
        avg_area,
        avg_heating_price,
        cc_distance,
        pros,
        cons,
    })
}

fn mean<F>(rows: &[ScoredRow], value: F) -> f64
where
    F: Fn(&DistrictRow) -> f64,
{
    let sum: f64 = rows.iter().map(|scored| value(&scored.row)).sum();
    sum / rows.len() as f64
}

fn ranks_uniform(rows: &[ScoredRow], representative: &DistrictRow) -> bool {
    rows.iter().all(|scored| {
        Priority::ordered()
            .into_iter()
            .all(|priority| priority.rank_in(&scored.row) == priority.rank_in(representative))
    })
}
