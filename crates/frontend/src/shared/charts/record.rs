//! Typed records flowing from the backend results into charts and tables.

use std::collections::BTreeMap;

/// Numeric fields a record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Metric {
    TotalNights,
    UniqueGuests,
    PersonNights,
    TotalPeople,
    GrossValue,
    NetValue,
    Commission,
    IvaAmount,
    ReservationCount,
    InvoiceCount,
    /// Generic value of a derived record (breakdown slices, tax buckets)
    Value,
    /// Number of raw rows folded into a derived record
    Count,
}

impl Metric {
    /// Field name as it appears in the backend JSON
    pub fn key(&self) -> &'static str {
        match self {
            Metric::TotalNights => "total_nights",
            Metric::UniqueGuests => "unique_guests",
            Metric::PersonNights => "person_nights",
            Metric::TotalPeople => "total_people",
            Metric::GrossValue => "gross_value",
            Metric::NetValue => "net_value",
            Metric::Commission => "commission",
            Metric::IvaAmount => "iva_amount",
            Metric::ReservationCount => "reservation_count",
            Metric::InvoiceCount => "invoice_count",
            Metric::Value => "value",
            Metric::Count => "count",
        }
    }
}

/// Metric → value map. Reads of absent metrics yield `0.0`; writes of
/// non-finite values store `0.0`, so a NaN can never reach a scale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricValues(BTreeMap<Metric, f64>);

impl MetricValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.set(metric, value);
        self
    }

    pub fn set(&mut self, metric: Metric, value: f64) {
        let value = if value.is_finite() { value } else { 0.0 };
        self.0.insert(metric, value);
    }

    pub fn get(&self, metric: Metric) -> f64 {
        self.0.get(&metric).copied().unwrap_or(0.0)
    }

    /// Explicitly present (as opposed to defaulted) metric
    pub fn get_present(&self, metric: Metric) -> Option<f64> {
        self.0.get(&metric).copied()
    }

    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.0.keys().copied()
    }
}

/// One aggregated category with its metrics
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub category: String,
    pub metrics: MetricValues,
}

impl MetricRecord {
    pub fn new(category: impl Into<String>, metrics: MetricValues) -> Self {
        Self {
            category: category.into(),
            metrics,
        }
    }

    pub fn value(&self, metric: Metric) -> f64 {
        self.metrics.get(metric)
    }
}

/// Backend row after boundary validation: one property, optionally one
/// nationality, and already-defaulted numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub property: String,
    pub nationality: Option<String>,
    pub metrics: MetricValues,
}

impl RawRecord {
    pub fn new(property: impl Into<String>, nationality: Option<&str>, metrics: MetricValues) -> Self {
        Self {
            property: property.into(),
            nationality: nationality.map(str::to_string),
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_metric_reads_zero() {
        let values = MetricValues::new().with(Metric::TotalNights, 3.0);
        assert_eq!(values.get(Metric::TotalNights), 3.0);
        assert_eq!(values.get(Metric::PersonNights), 0.0);
        assert_eq!(values.get_present(Metric::PersonNights), None);
    }

    #[test]
    fn test_non_finite_values_are_stored_as_zero() {
        let values = MetricValues::new()
            .with(Metric::GrossValue, f64::NAN)
            .with(Metric::NetValue, f64::INFINITY)
            .with(Metric::Commission, -2.5);
        assert_eq!(values.get(Metric::GrossValue), 0.0);
        assert_eq!(values.get(Metric::NetValue), 0.0);
        assert_eq!(values.get(Metric::Commission), -2.5);
    }
}
