use askama::Template;

use crate::models::billing::InvoiceRow;
use super::PageContext;

/// One status tab above the invoice table.
pub struct FilterLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "billing/invoices.html")]
pub struct InvoicesTemplate {
    pub ctx: PageContext,
    pub rows: Vec<InvoiceRow>,
    pub outstanding: String,
    pub filters: Vec<FilterLink>,
    pub load_failed: bool,
}
