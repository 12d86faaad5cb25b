//! The decision core: weighted scoring, district aggregation, and
//! human-readable description of the winner. Every function here is pure;
//! callers pass a dataset snapshot in and own the result that comes out.

pub mod aggregate;
pub mod descriptor;
pub mod domain;
pub mod scoring;
pub mod selection;

pub use descriptor::CcDistanceBand;
pub use domain::{DistrictRow, Priority, RankingError, ScoredRow};
pub use selection::{ChartData, SelectionResult};
