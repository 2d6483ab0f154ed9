//! Export projections as CSV and JSON

use std::io::Write;

use crate::error::Result;
use crate::projection::{ProjectionResult, ProjectionSummary, YearlyProjectionPoint};

/// Write the yearly balance series, one row per age
pub fn write_series_csv<W: Write>(writer: W, points: &[YearlyProjectionPoint]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for point in points {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write one summary row per projection
pub fn write_summaries_csv<W: Write>(writer: W, summaries: &[ProjectionSummary]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for summary in summaries {
        wtr.serialize(summary)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Full projection as pretty-printed JSON
pub fn to_json_pretty(result: &ProjectionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::ProjectionInputs;
    use crate::projection::ProjectionEngine;

    fn sample() -> ProjectionResult {
        ProjectionEngine::default()
            .project(&ProjectionInputs::default())
            .unwrap()
    }

    #[test]
    fn test_series_csv() {
        let result = sample();
        let mut buf = Vec::new();
        write_series_csv(&mut buf, &result.yearly).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "year,age,annual_salary,tier2_balance,tier3_balance,total_balance,real_total_balance"
        );
        assert_eq!(lines.count(), result.yearly.len());
    }

    #[test]
    fn test_summaries_csv() {
        let result = sample();
        let summaries = vec![result.summary(), result.summary()];
        let mut buf = Vec::new();
        write_summaries_csv(&mut buf, &summaries).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let rows: Vec<ProjectionSummary> = rdr.deserialize().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].readiness, result.readiness.label());
        assert_eq!(rows[0].retirement_age, 60);
    }

    #[test]
    fn test_json_export() {
        let result = sample();
        let json = to_json_pretty(&result).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["inputs"]["currentAge"], 30);
        assert_eq!(value["yearly"].as_array().unwrap().len(), 31);

        let back: ProjectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.yearly.len(), result.yearly.len());
        assert_eq!(back.readiness, result.readiness);
    }
}
