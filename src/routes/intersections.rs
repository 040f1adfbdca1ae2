//! Intersection detection route types.

use serde::{Deserialize, Serialize};

use crate::models::series::{CitySeries, IntersectionPoint};

/// Request body: the chart's current city series.
///
/// Series must cover the same aligned dates. Duplicated city names and
/// series beyond the configured cap are dropped by the handler before
/// analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntersectionRequest {
    pub series: Vec<CitySeries>,
    /// Cluster tolerance in minutes (3+ series only); default 1
    #[serde(default)]
    pub tolerance: Option<u16>,
}

/// Response: annotation markers plus the city names that were analyzed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntersectionData {
    /// City names after deduplication and capping, in input order
    pub cities: Vec<String>,
    /// Crossing/cluster markers in date order
    pub intersections: Vec<IntersectionPoint>,
}

/// Intersections route function name constant
pub const FIND_INTERSECTIONS: &str = "find_intersections";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::series::DaylightSample;
    use chrono::NaiveDate;

    #[test]
    fn test_request_tolerance_defaults_to_none() {
        let request: IntersectionRequest =
            serde_json::from_str(r#"{"series": []}"#).unwrap();
        assert!(request.series.is_empty());
        assert!(request.tolerance.is_none());
    }

    #[test]
    fn test_request_deserializes_series() {
        let request: IntersectionRequest = serde_json::from_str(
            r#"{
                "series": [
                    {"city": "Helsinki", "daylight": [{"date": "2024-01-01", "minutes": 351}]}
                ],
                "tolerance": 2
            }"#,
        )
        .unwrap();

        assert_eq!(request.series.len(), 1);
        assert_eq!(request.series[0].city, "Helsinki");
        assert_eq!(request.tolerance, Some(2));
    }

    #[test]
    fn test_data_serializes() {
        let data = IntersectionData {
            cities: vec!["Helsinki".to_string(), "Oulu".to_string()],
            intersections: vec![IntersectionPoint {
                date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
                minutes: 730,
            }],
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["cities"][1], "Oulu");
        assert_eq!(json["intersections"][0]["date"], "2024-03-20");
        assert_eq!(json["intersections"][0]["minutes"], 730);
    }

    #[test]
    fn test_request_clone() {
        let request = IntersectionRequest {
            series: vec![CitySeries::new(
                "Turku",
                vec![DaylightSample::new(
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    360,
                )],
            )],
            tolerance: Some(1),
        };
        let cloned = request.clone();
        assert_eq!(cloned.series[0].city, "Turku");
    }
}
