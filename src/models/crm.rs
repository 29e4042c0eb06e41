use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::types::LeadPayload;
use crate::models::widgets::relative_time;

/// Pipeline stages in board order: (key, label).
pub const PIPELINE: [(&str, &str); 5] = [
    ("new", "New"),
    ("contacted", "Contacted"),
    ("trial", "Trial"),
    ("won", "Won"),
    ("lost", "Lost"),
];

const OTHER: (&str, &str) = ("other", "Other");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageCount {
    pub key: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadRow {
    pub name: String,
    pub phone: String,
    pub source: String,
    pub stage_label: String,
    pub added: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineColumn {
    pub key: String,
    pub label: String,
    pub leads: Vec<LeadRow>,
}

/// Canonical (key, label) for a backend stage string.
fn stage_of(raw: &str) -> (&'static str, &'static str) {
    let raw = raw.trim();
    PIPELINE
        .iter()
        .copied()
        .find(|(key, _)| key.eq_ignore_ascii_case(raw))
        .unwrap_or(OTHER)
}

fn lead_row(lead: &LeadPayload, now: DateTime<Utc>) -> LeadRow {
    LeadRow {
        name: lead.name.clone(),
        phone: lead.phone.clone(),
        source: lead.source.clone(),
        stage_label: stage_of(&lead.stage).1.to_string(),
        added: relative_time(lead.created_at, now),
    }
}

/// Lead count per stage. "Other" is only listed when something lands there.
pub fn stage_counts(leads: &[LeadPayload]) -> Vec<StageCount> {
    pipeline_stages(leads)
        .map(|(key, label)| StageCount {
            key: key.to_string(),
            label: label.to_string(),
            count: leads.iter().filter(|l| stage_of(&l.stage).0 == key).count(),
        })
        .collect()
}

/// Newest `limit` leads.
pub fn recent_leads(leads: &[LeadPayload], limit: usize, now: DateTime<Utc>) -> Vec<LeadRow> {
    let mut sorted: Vec<&LeadPayload> = leads.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.into_iter().take(limit).map(|l| lead_row(l, now)).collect()
}

/// Leads grouped into board columns, newest first within each column.
pub fn pipeline(leads: &[LeadPayload], now: DateTime<Utc>) -> Vec<PipelineColumn> {
    let mut sorted: Vec<&LeadPayload> = leads.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    pipeline_stages(leads)
        .map(|(key, label)| PipelineColumn {
            key: key.to_string(),
            label: label.to_string(),
            leads: sorted
                .iter()
                .filter(|l| stage_of(&l.stage).0 == key)
                .map(|l| lead_row(l, now))
                .collect(),
        })
        .collect()
}

fn pipeline_stages(leads: &[LeadPayload]) -> impl Iterator<Item = (&'static str, &'static str)> {
    let has_other = leads.iter().any(|l| stage_of(&l.stage).0 == OTHER.0);
    PIPELINE.into_iter().chain(has_other.then_some(OTHER))
}
