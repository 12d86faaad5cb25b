use super::domain::{DistrictRow, Priority};
use serde::Serialize;

/// Rank at or below which a metric counts as a pro.
const PRO_THRESHOLD: u32 = 5;
/// Rank at or above which a metric counts as a con.
const CON_THRESHOLD: u32 = 7;

/// Categorical distance-to-center bucket derived from the mean
/// `rank_by_cc_distance` of a district's rows. The mean is fractional
/// whenever a district spans rows with differing distance ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CcDistanceBand {
    InCenter,
    VeryClose,
    Close,
    ModeratelyFar,
    Far,
    VeryFar,
    OutOfRange,
}

impl CcDistanceBand {
    /// Step function over six upper-inclusive bands plus the out-of-range
    /// fallback above 11. Every real input lands in exactly one band.
    pub fn from_mean_rank(mean_rank: f64) -> Self {
        if mean_rank <= 1.0 {
            Self::InCenter
        } else if mean_rank <= 3.0 {
            Self::VeryClose
        } else if mean_rank <= 5.0 {
            Self::Close
        } else if mean_rank <= 7.0 {
            Self::ModeratelyFar
        } else if mean_rank <= 9.0 {
            Self::Far
        } else if mean_rank <= 11.0 {
            Self::VeryFar
        } else {
            Self::OutOfRange
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InCenter => "In the center",
            Self::VeryClose => "Very close to the center",
            Self::Close => "Close to the center",
            Self::ModeratelyFar => "Moderately far from the center",
            Self::Far => "Far from the center",
            Self::VeryFar => "Very far from the center",
            Self::OutOfRange => "Out of range",
        }
    }
}

/// Derive pros and cons from one representative row of the winning district.
///
/// A metric ranked at or better than 5 is a pro, at or worse than 7 a con,
/// and rank 6 lands in neither list. Output order follows
/// [`Priority::ordered`], not magnitude.
pub fn generate_pros_cons(row: &DistrictRow) -> (Vec<&'static str>, Vec<&'static str>) {
    let mut pros = Vec::new();
    let mut cons = Vec::new();

    for priority in Priority::ordered() {
        let rank = priority.rank_in(row);
        if rank <= PRO_THRESHOLD {
            pros.push(priority.metric_label());
        } else if rank >= CON_THRESHOLD {
            cons.push(priority.metric_label());
        }
    }

    (pros, cons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::test_support::row;

    #[test]
    fn band_boundaries_are_upper_inclusive() {
        let cases = [
            (1.0, "In the center"),
            (1.01, "Very close to the center"),
            (3.0, "Very close to the center"),
            (3.01, "Close to the center"),
            (5.0, "Close to the center"),
            (5.01, "Moderately far from the center"),
            (7.0, "Moderately far from the center"),
            (7.01, "Far from the center"),
            (9.0, "Far from the center"),
            (9.01, "Very far from the center"),
            (11.0, "Very far from the center"),
            (11.01, "Out of range"),
        ];

        for (mean_rank, expected) in cases {
            assert_eq!(
                CcDistanceBand::from_mean_rank(mean_rank).label(),
                expected,
                "mean rank {mean_rank}"
            );
        }
    }

    #[test]
    fn fractional_means_and_extremes_are_covered() {
        assert_eq!(
            CcDistanceBand::from_mean_rank(2.5),
            CcDistanceBand::VeryClose
        );
        assert_eq!(
            CcDistanceBand::from_mean_rank(0.2),
            CcDistanceBand::InCenter
        );
        assert_eq!(
            CcDistanceBand::from_mean_rank(12.0),
            CcDistanceBand::OutOfRange
        );
    }

    #[test]
    fn each_metric_lands_in_at_most_one_list() {
        for rank in 1..=12 {
            let sample = row("Midtown", move |r| r.rank_by_area = rank);
            let (pros, cons) = generate_pros_cons(&sample);
            let in_pros = pros.contains(&"Flat area");
            let in_cons = cons.contains(&"Flat area");
            assert!(!(in_pros && in_cons), "rank {rank} appears in both lists");
            match rank {
                r if r <= 5 => assert!(in_pros, "rank {rank} should be a pro"),
                r if r >= 7 => assert!(in_cons, "rank {rank} should be a con"),
                _ => assert!(!in_pros && !in_cons, "rank 6 belongs to neither list"),
            }
        }
    }

    #[test]
    fn mixed_row_reports_expected_pros_and_cons() {
        let sample = row("Midtown", |r| {
            r.rank_by_price = 3;
            r.rank_by_crime = 8;
            r.rank_by_cc_distance = 6;
            r.rank_by_area = 6;
            r.rank_by_rooms = 6;
            r.rank_by_heating_price = 6;
        });

        let (pros, cons) = generate_pros_cons(&sample);
        assert_eq!(pros, vec!["Rent price"]);
        assert_eq!(cons, vec!["Safety"]);
    }

    #[test]
    fn listing_order_follows_metric_enumeration_not_magnitude() {
        let sample = row("Midtown", |r| {
            r.rank_by_price = 12;
            r.rank_by_crime = 7;
            r.rank_by_cc_distance = 1;
            r.rank_by_area = 5;
            r.rank_by_rooms = 6;
            r.rank_by_heating_price = 9;
        });

        let (pros, cons) = generate_pros_cons(&sample);
        assert_eq!(pros, vec!["Distance to city center", "Flat area"]);
        assert_eq!(cons, vec!["Rent price", "Safety", "Heating price"]);
    }
}
