//! Per-role view-models. Each is built from backend payloads by `build`, and
//! `Default` is the same build over empty payloads, so a failed load still
//! renders zeroed cards instead of blank space.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::api::types::*;
use crate::models::billing::{self, InvoiceRow};
use crate::models::crm::{self, LeadRow, StageCount};
use crate::models::widgets::{ProgressBar, StatCard, format_money, relative_time, short_datetime};

// ---------- Member ----------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberDashboard {
    pub plan_name: String,
    pub membership_status: String,
    pub expiry_label: String,
    pub stats: Vec<StatCard>,
    pub visit_goal: ProgressBar,
    pub bookings: Vec<BookingRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRow {
    pub class_name: String,
    pub trainer_name: String,
    pub when: String,
}

impl MemberDashboard {
    pub fn build(payload: &MemberDashboardPayload, today: NaiveDate) -> Self {
        let (plan_name, membership_status, expiry_label) = match &payload.membership {
            Some(m) => (
                m.plan_name.clone(),
                m.status.clone(),
                expiry_label(m.expires_on, today),
            ),
            None => (
                "No plan".to_string(),
                "inactive".to_string(),
                "No active membership".to_string(),
            ),
        };

        let mut bookings: Vec<&BookingPayload> = payload.upcoming_bookings.iter().collect();
        bookings.sort_by_key(|b| b.starts_at);

        Self {
            plan_name,
            membership_status,
            expiry_label,
            stats: vec![
                StatCard::new("Visits this month", payload.visits_this_month),
                StatCard::new("Monthly goal", payload.monthly_visit_goal),
                StatCard::new("Upcoming classes", payload.upcoming_bookings.len()),
            ],
            visit_goal: ProgressBar::new(
                "Visit goal",
                payload.visits_this_month as f64,
                payload.monthly_visit_goal as f64,
            ),
            bookings: bookings
                .into_iter()
                .map(|b| BookingRow {
                    class_name: b.class_name.clone(),
                    trainer_name: b.trainer_name.clone(),
                    when: short_datetime(b.starts_at),
                })
                .collect(),
        }
    }
}

impl Default for MemberDashboard {
    fn default() -> Self {
        Self::build(&MemberDashboardPayload::default(), Utc::now().date_naive())
    }
}

/// Days left on a membership, phrased for the member card.
pub fn expiry_label(expires_on: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(expires_on) = expires_on else {
        return "No expiry date".to_string();
    };
    let days = (expires_on - today).num_days();
    match days {
        d if d < 0 => "Expired".to_string(),
        0 => "Expires today".to_string(),
        1 => "Expires tomorrow".to_string(),
        d => format!("Expires in {d} days"),
    }
}

// ---------- Trainer ----------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerDashboard {
    pub stats: Vec<StatCard>,
    pub capacity: ProgressBar,
    pub sessions: Vec<SessionRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRow {
    pub time: String,
    pub client_name: String,
    pub session_type: String,
    pub duration: String,
}

impl TrainerDashboard {
    pub fn build(payload: &TrainerDashboardPayload) -> Self {
        let mut sessions: Vec<&TrainingSessionPayload> = payload.sessions_today.iter().collect();
        sessions.sort_by_key(|s| s.starts_at);

        let booked_minutes: i64 = payload.sessions_today.iter().map(|s| s.duration_minutes).sum();

        Self {
            stats: vec![
                StatCard::new("Sessions today", payload.sessions_today.len()),
                StatCard::new("Active clients", payload.active_clients),
                StatCard::new("Hours booked today", format!("{:.1}", booked_minutes as f64 / 60.0)),
            ],
            capacity: ProgressBar::new(
                format!("{} of {} weekly slots booked", payload.weekly_booked, payload.weekly_capacity),
                payload.weekly_booked as f64,
                payload.weekly_capacity as f64,
            ),
            sessions: sessions
                .into_iter()
                .map(|s| SessionRow {
                    time: s
                        .starts_at
                        .map(|t| t.format("%H:%M").to_string())
                        .unwrap_or_else(|| "—".to_string()),
                    client_name: s.client_name.clone(),
                    session_type: s.session_type.clone(),
                    duration: format!("{} min", s.duration_minutes),
                })
                .collect(),
        }
    }
}

impl Default for TrainerDashboard {
    fn default() -> Self {
        Self::build(&TrainerDashboardPayload::default())
    }
}

// ---------- Staff ----------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffDashboard {
    pub stats: Vec<StatCard>,
    pub pipeline: Vec<StageCount>,
    pub recent_leads: Vec<LeadRow>,
}

const STAFF_RECENT_LEADS: usize = 5;

impl StaffDashboard {
    pub fn build(stats: &StaffStatsPayload, leads: &[LeadPayload], now: DateTime<Utc>) -> Self {
        Self {
            stats: Self::stat_cards(stats),
            pipeline: crm::stage_counts(leads),
            recent_leads: crm::recent_leads(leads, STAFF_RECENT_LEADS, now),
        }
    }

    pub fn stat_cards(stats: &StaffStatsPayload) -> Vec<StatCard> {
        vec![
            StatCard::new("Check-ins today", stats.check_ins_today),
            StatCard::new("Classes today", stats.classes_today),
            StatCard::new("Trial visits", stats.trial_visits_today),
            StatCard::new("Open tasks", stats.pending_tasks),
        ]
    }
}

impl Default for StaffDashboard {
    fn default() -> Self {
        Self::build(&StaffStatsPayload::default(), &[], Utc::now())
    }
}

// ---------- Manager ----------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagerDashboard {
    pub stats: Vec<StatCard>,
    pub revenue_progress: ProgressBar,
    pub attendance: ProgressBar,
    pub overdue: Vec<InvoiceRow>,
    pub overdue_total: String,
}

impl ManagerDashboard {
    pub fn build(stats: &ManagerStatsPayload, overdue: &[InvoicePayload]) -> Self {
        Self {
            stats: vec![
                StatCard::new("Active members", stats.active_members),
                StatCard::new("Expiring this week", stats.expiring_this_week),
                StatCard::new("Revenue this month", format_money(stats.revenue_this_month))
                    .with_hint(format!("Target {}", format_money(stats.revenue_target))),
                StatCard::new("Overdue invoices", overdue.len()),
            ],
            revenue_progress: ProgressBar::new(
                "Monthly revenue target",
                stats.revenue_this_month,
                stats.revenue_target,
            ),
            attendance: ProgressBar::from_percent("Attendance rate", stats.attendance_rate),
            overdue: overdue.iter().map(InvoiceRow::from).collect(),
            overdue_total: format_money(billing::outstanding_total(overdue)),
        }
    }
}

impl Default for ManagerDashboard {
    fn default() -> Self {
        Self::build(&ManagerStatsPayload::default(), &[])
    }
}

// ---------- Branch admin ----------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchAdminDashboard {
    pub stats: Vec<StatCard>,
    pub activities: Vec<ActivityRow>,
    pub trainers: Vec<TrainerRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRow {
    pub member_name: String,
    pub action: String,
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerRow {
    pub name: String,
    pub specialty: String,
    pub status_label: String,
    /// CSS modifier: `available`, `busy`, `off` or `unknown`.
    pub status_class: String,
    pub load: ProgressBar,
}

impl BranchAdminDashboard {
    pub fn build(
        stats: &BranchStatsPayload,
        activities: &[ActivityPayload],
        trainers: &[TrainerStatusPayload],
        now: DateTime<Utc>,
    ) -> Self {
        let available = trainers
            .iter()
            .filter(|t| t.status.eq_ignore_ascii_case("available"))
            .count();

        let mut activities: Vec<&ActivityPayload> = activities.iter().collect();
        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Self {
            stats: vec![
                StatCard::new("Total members", stats.total_members)
                    .with_hint(format!("{} active", stats.active_members)),
                StatCard::new("Check-ins today", stats.check_ins_today),
                StatCard::new("Revenue this month", format_money(stats.revenue_this_month)),
                StatCard::new("New leads", stats.new_leads),
                StatCard::new("Trainers available", format!("{available}/{}", trainers.len())),
            ],
            activities: activities
                .into_iter()
                .map(|a| ActivityRow {
                    member_name: a.member_name.clone(),
                    action: a.action.clone(),
                    when: relative_time(a.timestamp, now),
                })
                .collect(),
            trainers: trainers.iter().map(TrainerRow::from).collect(),
        }
    }
}

impl From<&TrainerStatusPayload> for TrainerRow {
    fn from(t: &TrainerStatusPayload) -> Self {
        let status_class = match t.status.to_ascii_lowercase().as_str() {
            "available" => "available",
            "busy" => "busy",
            "off" => "off",
            _ => "unknown",
        };
        let status_label = match status_class {
            "available" => "Available",
            "busy" => "In session",
            "off" => "Off today",
            _ => "Unknown",
        };
        Self {
            name: t.name.clone(),
            specialty: t.specialty.clone(),
            status_label: status_label.to_string(),
            status_class: status_class.to_string(),
            load: ProgressBar::new(
                format!("{}/{} slots", t.booked_slots, t.total_slots),
                t.booked_slots as f64,
                t.total_slots as f64,
            ),
        }
    }
}

impl Default for BranchAdminDashboard {
    fn default() -> Self {
        Self::build(&BranchStatsPayload::default(), &[], &[], Utc::now())
    }
}

// ---------- Super admin ----------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuperAdminDashboard {
    pub stats: Vec<StatCard>,
    pub branches: Vec<BranchRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchRow {
    pub name: String,
    pub city: String,
    pub members: i64,
    pub revenue: String,
    /// This branch's share of summed branch revenue.
    pub share: ProgressBar,
}

impl SuperAdminDashboard {
    pub fn build(stats: &NetworkStatsPayload, branches: &[BranchSummaryPayload]) -> Self {
        let revenue_sum: f64 = branches.iter().map(|b| b.revenue.max(0.0)).sum();

        let mut rows: Vec<BranchRow> = branches
            .iter()
            .map(|b| BranchRow {
                name: b.name.clone(),
                city: b.city.clone(),
                members: b.members,
                revenue: format_money(b.revenue),
                share: ProgressBar::new("Revenue share", b.revenue.max(0.0), revenue_sum),
            })
            .collect();
        rows.sort_by(|a, b| b.share.percent.cmp(&a.share.percent).then_with(|| a.name.cmp(&b.name)));

        Self {
            stats: vec![
                StatCard::new("Branches", stats.total_branches),
                StatCard::new("Members", stats.total_members),
                StatCard::new("Revenue", format_money(stats.total_revenue)),
                StatCard::new("Active trainers", stats.active_trainers),
            ],
            branches: rows,
        }
    }
}

impl Default for SuperAdminDashboard {
    fn default() -> Self {
        Self::build(&NetworkStatsPayload::default(), &[])
    }
}
