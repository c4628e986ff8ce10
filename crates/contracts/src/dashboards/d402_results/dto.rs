use crate::dashboards::d400_occupancy::OccupancyResult;
use crate::dashboards::d401_revenue::RevenueResult;
use crate::shared::lenient::u64_or_zero;
use serde::{Deserialize, Serialize};

/// Payload of `GET /results`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsResults {
    #[serde(default)]
    pub occupancy: OccupancyResult,
    #[serde(default)]
    pub revenue: RevenueResult,
    #[serde(default)]
    pub summary: Option<ProcessingSummary>,
}

/// Row counts reported by the processing run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingSummary {
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub guests_processed: u64,
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub reservations_processed: u64,
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub invoices_processed: u64,
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub properties_found: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ApiEnvelope;

    #[test]
    fn test_parse_results_envelope() {
        let json = r#"{
            "success": true,
            "data": {
                "occupancy": {"general_stats": {"total_guests": 2}, "by_property": {}},
                "revenue": {"reservations_summary": {"total_gross_value": 10}},
                "summary": {"guests_processed": 2, "reservations_processed": 1, "invoices_processed": 0, "properties_found": 1}
            }
        }"#;
        let env: ApiEnvelope<AnalyticsResults> = serde_json::from_str(json).unwrap();
        let results = env.into_result().unwrap();
        assert_eq!(results.occupancy.general_stats.total_guests, 2.0);
        assert_eq!(results.revenue.reservations_summary.total_gross_value, 10.0);
        assert_eq!(results.summary.unwrap().properties_found, 1);
    }
}
