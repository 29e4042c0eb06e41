use askama::Template;

use crate::models::crm::PipelineColumn;
use super::PageContext;

#[derive(Template)]
#[template(path = "crm/leads.html")]
pub struct LeadsTemplate {
    pub ctx: PageContext,
    pub columns: Vec<PipelineColumn>,
    pub total: usize,
    pub load_failed: bool,
}
