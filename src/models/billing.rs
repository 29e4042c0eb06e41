use serde::Serialize;

use crate::api::types::InvoicePayload;
use crate::models::widgets::format_money;

/// Status filters the invoices page accepts.
pub const STATUS_FILTERS: [&str; 3] = ["pending", "overdue", "paid"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRow {
    pub number: String,
    pub member_name: String,
    pub amount: String,
    pub due: String,
    pub status_label: String,
    /// CSS modifier: `paid`, `pending`, `overdue` or `unknown`.
    pub status_class: String,
}

impl From<&InvoicePayload> for InvoiceRow {
    fn from(inv: &InvoicePayload) -> Self {
        let status_class = STATUS_FILTERS
            .iter()
            .find(|s| s.eq_ignore_ascii_case(inv.status.trim()))
            .copied()
            .unwrap_or("unknown");
        let status_label = match status_class {
            "paid" => "Paid",
            "pending" => "Pending",
            "overdue" => "Overdue",
            _ => "Unknown",
        };
        Self {
            number: inv.number.clone(),
            member_name: inv.member_name.clone(),
            amount: format_money(inv.amount),
            due: inv
                .due_date
                .map(|d| d.format("%d %b %Y").to_string())
                .unwrap_or_else(|| "—".to_string()),
            status_label: status_label.to_string(),
            status_class: status_class.to_string(),
        }
    }
}

/// Sum of everything not yet paid.
pub fn outstanding_total(invoices: &[InvoicePayload]) -> f64 {
    invoices
        .iter()
        .filter(|i| !i.status.trim().eq_ignore_ascii_case("paid"))
        .map(|i| i.amount)
        .sum()
}

/// Normalise a `?status=` query value; anything unrecognised means "all".
pub fn status_filter(raw: Option<&str>) -> Option<&'static str> {
    let raw = raw?.trim();
    STATUS_FILTERS.iter().copied().find(|s| s.eq_ignore_ascii_case(raw))
}
