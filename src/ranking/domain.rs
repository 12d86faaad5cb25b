use serde::{Deserialize, Serialize};

/// One source row for a district. Districts span several rows (one per
/// sub-record in the survey data), so `district` is a grouping key, not a
/// unique id.
///
/// The six rank columns arrive pre-ranked (1 = best, observed range 1..=12)
/// and directly comparable across districts; this crate never re-derives
/// them from the raw averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictRow {
    pub district: String,
    pub rank_by_price: u32,
    pub rank_by_crime: u32,
    pub rank_by_cc_distance: u32,
    pub rank_by_area: u32,
    pub rank_by_rooms: u32,
    pub rank_by_heating_price: u32,
    pub avg_price: f64,
    pub avg_crime: f64,
    pub avg_area: f64,
    pub avg_heating_price: f64,
    pub under_300: u32,
    pub from_300_to_600: u32,
    pub from_600_to_900: u32,
    pub above_900: u32,
    pub modern_count: u32,
    pub old_count: u32,
}

/// A [`DistrictRow`] augmented with its weighted composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRow {
    #[serde(flatten)]
    pub row: DistrictRow,
    pub final_score: f64,
}

/// User-selectable ranking criterion. Each variant binds the user-facing
/// option label, the pros/cons metric label, and the rank column it reads,
/// so an unrecognized priority can only exist at the string edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Cheapest,
    Safest,
    ClosestToCenter,
    BiggestArea,
    MostRooms,
    CheapestHeating,
}

impl Priority {
    /// Fixed enumeration order (price, crime, distance, area, rooms,
    /// heating). Pros/cons listings follow this order.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Cheapest,
            Self::Safest,
            Self::ClosestToCenter,
            Self::BiggestArea,
            Self::MostRooms,
            Self::CheapestHeating,
        ]
    }

    /// The option string shown to users when choosing priorities.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cheapest => "Cheapest",
            Self::Safest => "Safest",
            Self::ClosestToCenter => "Closest to the city center",
            Self::BiggestArea => "Biggest by area",
            Self::MostRooms => "Biggest number of rooms",
            Self::CheapestHeating => "Least heating price",
        }
    }

    /// The metric string used in pros/cons listings.
    pub const fn metric_label(self) -> &'static str {
        match self {
            Self::Cheapest => "Rent price",
            Self::Safest => "Safety",
            Self::ClosestToCenter => "Distance to city center",
            Self::BiggestArea => "Flat area",
            Self::MostRooms => "Number of rooms",
            Self::CheapestHeating => "Heating price",
        }
    }

    /// The rank column this priority weighs.
    pub const fn rank_in(self, row: &DistrictRow) -> u32 {
        match self {
            Self::Cheapest => row.rank_by_price,
            Self::Safest => row.rank_by_crime,
            Self::ClosestToCenter => row.rank_by_cc_distance,
            Self::BiggestArea => row.rank_by_area,
            Self::MostRooms => row.rank_by_rooms,
            Self::CheapestHeating => row.rank_by_heating_price,
        }
    }

    /// Resolve a user-supplied option label. Empty or unknown input is an
    /// [`RankingError::InvalidPriority`]; callers render a "no selection"
    /// state rather than scoring with a default.
    pub fn from_label(label: &str) -> Result<Self, RankingError> {
        let trimmed = label.trim();
        Self::ordered()
            .into_iter()
            .find(|priority| priority.label() == trimmed)
            .ok_or_else(|| RankingError::InvalidPriority(label.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("'{0}' is not a recognized priority")]
    InvalidPriority(String),
    #[error("district dataset contains no rows")]
    EmptyDataset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_for_every_priority() {
        for priority in Priority::ordered() {
            let resolved = Priority::from_label(priority.label()).expect("label resolves");
            assert_eq!(resolved, priority);
        }
    }

    #[test]
    fn from_label_trims_surrounding_whitespace() {
        let resolved = Priority::from_label("  Safest ").expect("trimmed label resolves");
        assert_eq!(resolved, Priority::Safest);
    }

    #[test]
    fn unknown_and_empty_labels_are_invalid() {
        assert!(matches!(
            Priority::from_label("Sunniest"),
            Err(RankingError::InvalidPriority(_))
        ));
        assert!(matches!(
            Priority::from_label(""),
            Err(RankingError::InvalidPriority(_))
        ));
    }

    #[test]
    fn metric_labels_match_display_table() {
        let labels: Vec<&str> = Priority::ordered()
            .into_iter()
            .map(Priority::metric_label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Rent price",
                "Safety",
                "Distance to city center",
                "Flat area",
                "Number of rooms",
                "Heating price",
            ]
        );
    }
}
