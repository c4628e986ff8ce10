use crate::shared::lenient::{f64_or_zero, label_or_empty, u64_or_zero, vec_or_empty};
use serde::{Deserialize, Serialize};

/// Revenue report produced by the processing backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevenueResult {
    #[serde(default)]
    pub reservations_summary: ReservationsSummary,
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub reservations_by_property: Vec<PropertyRevenueRow>,
    /// One line per reservation, with the VAT rate applied to it
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub detailed_calculations: Vec<TaxCalculationRow>,
    /// `None` when no invoices file was uploaded
    #[serde(default)]
    pub invoices_summary: Option<InvoicesSummary>,
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub invoices_by_property: Vec<InvoicePropertyRow>,
}

impl RevenueResult {
    pub fn has_invoice_data(&self) -> bool {
        self.invoices_summary.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationsSummary {
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub total_gross_value: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub total_net_value: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub total_commissions: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub total_iva: f64,
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub total_reservations: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyRevenueRow {
    #[serde(default, deserialize_with = "label_or_empty")]
    pub property: String,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub gross_value: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub commission: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub iva_amount: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub net_value: f64,
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub reservation_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxCalculationRow {
    #[serde(default, deserialize_with = "label_or_empty")]
    pub property: String,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub gross_value: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub commission: f64,
    /// Fraction, e.g. `0.04` for the Azores rate
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub iva_rate: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub iva_amount: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub net_value: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoicesSummary {
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub total_gross_value: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub total_iva: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub total_net_value: f64,
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub total_invoices: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoicePropertyRow {
    #[serde(default, deserialize_with = "label_or_empty")]
    pub property: String,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub gross_value: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub net_value: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub iva_amount: f64,
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub invoice_count: u64,
}
