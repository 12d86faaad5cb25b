use super::DatasetError;
use crate::ranking::DistrictRow;
use serde::Deserialize;
use std::io::Read;

/// Raw CSV record with the source export's exact headers. Every column is
/// optional at this stage so a missing one can be reported by name instead
/// of surfacing as an opaque deserialization failure.
#[derive(Debug, Deserialize)]
struct RawDistrictRecord {
    #[serde(rename = "District", default)]
    district: Option<String>,
    #[serde(rename = "Rank_by_prices", default)]
    rank_by_prices: Option<u32>,
    #[serde(rename = "Rank_by_crimes", default)]
    rank_by_crimes: Option<u32>,
    #[serde(rename = "Ranked_by_CC_distance", default)]
    ranked_by_cc_distance: Option<u32>,
    #[serde(rename = "Rank_by_area", default)]
    rank_by_area: Option<u32>,
    #[serde(rename = "Average_rooms_number_ranked", default)]
    average_rooms_number_ranked: Option<u32>,
    #[serde(rename = "Heating_prices_rank", default)]
    heating_prices_rank: Option<u32>,
    #[serde(rename = "Average_price", default)]
    average_price: Option<f64>,
    #[serde(rename = "Average_crimes", default)]
    average_crimes: Option<f64>,
    #[serde(rename = "Average_area", default)]
    average_area: Option<f64>,
    #[serde(rename = "Average_heating_price", default)]
    average_heating_price: Option<f64>,
    #[serde(rename = "under_300_count", default)]
    under_300_count: Option<u32>,
    #[serde(rename = "from_300_to_600", default)]
    from_300_to_600: Option<u32>,
    #[serde(rename = "from_600_to_900", default)]
    from_600_to_900: Option<u32>,
    #[serde(rename = "above_900_count", default)]
    above_900_count: Option<u32>,
    #[serde(rename = "Modern", default)]
    modern: Option<u32>,
    #[serde(rename = "Old", default)]
    old: Option<u32>,
}

impl RawDistrictRecord {
    fn into_row(self, line: u64) -> Result<DistrictRow, DatasetError> {
        fn require<T>(value: Option<T>, column: &'static str, line: u64) -> Result<T, DatasetError> {
            value.ok_or(DatasetError::MissingValue { column, line })
        }

        Ok(DistrictRow {
            district: require(self.district, "District", line)?,
            rank_by_price: require(self.rank_by_prices, "Rank_by_prices", line)?,
            rank_by_crime: require(self.rank_by_crimes, "Rank_by_crimes", line)?,
            rank_by_cc_distance: require(self.ranked_by_cc_distance, "Ranked_by_CC_distance", line)?,
            rank_by_area: require(self.rank_by_area, "Rank_by_area", line)?,
            rank_by_rooms: require(
                self.average_rooms_number_ranked,
                "Average_rooms_number_ranked",
                line,
            )?,
            rank_by_heating_price: require(self.heating_prices_rank, "Heating_prices_rank", line)?,
            avg_price: require(self.average_price, "Average_price", line)?,
            avg_crime: require(self.average_crimes, "Average_crimes", line)?,
            avg_area: require(self.average_area, "Average_area", line)?,
            avg_heating_price: require(self.average_heating_price, "Average_heating_price", line)?,
            under_300: require(self.under_300_count, "under_300_count", line)?,
            from_300_to_600: require(self.from_300_to_600, "from_300_to_600", line)?,
            from_600_to_900: require(self.from_600_to_900, "from_600_to_900", line)?,
            above_900: require(self.above_900_count, "above_900_count", line)?,
            modern_count: require(self.modern, "Modern", line)?,
            old_count: require(self.old, "Old", line)?,
        })
    }
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<DistrictRow>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    // Line 1 is the header row.
    for (index, record) in csv_reader.deserialize::<RawDistrictRecord>().enumerate() {
        let line = index as u64 + 2;
        rows.push(record?.into_row(line)?);
    }

    Ok(rows)
}
