use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use super::types::*;
use super::{ApiError, Endpoint, GymApi};
use crate::auth::session::SessionUser;

pub const DEMO_PASSWORD: &str = "demo123";

/// Demo sign-in accounts, one per role: (email, user id, role, display name).
pub const DEMO_ACCOUNTS: &[(&str, &str, &str, &str)] = &[
    ("admin@gymdesk.test", "u-100", "SUPER_ADMIN", "Sam Okafor"),
    ("branch@gymdesk.test", "u-200", "BRANCH_ADMIN", "Priya Nair"),
    ("manager@gymdesk.test", "u-300", "MANAGER", "Leo Marsh"),
    ("staff@gymdesk.test", "u-400", "STAFF", "Ana Ruiz"),
    ("trainer@gymdesk.test", "u-500", "TRAINER", "Marcus Bell"),
    ("member@gymdesk.test", "u-600", "MEMBER", "Jordan Lee"),
];

/// In-memory backend with demo data for every endpoint.
///
/// Endpoints can be switched to failing with [`MockGymApi::failing`], and
/// every call is recorded so callers can see what was requested.
#[derive(Clone, Default)]
pub struct MockGymApi {
    failing: HashSet<Endpoint>,
    calls: Arc<Mutex<Vec<Endpoint>>>,
}

impl MockGymApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `endpoint` reject every call with [`ApiError::Unavailable`].
    pub fn failing(mut self, endpoint: Endpoint) -> Self {
        self.failing.insert(endpoint);
        self
    }

    /// Endpoints called so far, in call order.
    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn hit(&self, endpoint: Endpoint) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(endpoint);
        if self.failing.contains(&endpoint) {
            Err(ApiError::Unavailable(endpoint))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl GymApi for MockGymApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.hit(Endpoint::Login)?;
        let email = credentials.email.trim().to_ascii_lowercase();
        let account = DEMO_ACCOUNTS
            .iter()
            .find(|(e, ..)| *e == email)
            .filter(|_| credentials.password == DEMO_PASSWORD);
        match account {
            Some((_, id, role, name)) => Ok(LoginResponse {
                token: Some(format!("mock-{id}")),
                user: LoginUser {
                    id: id.to_string(),
                    role: role.to_string(),
                    name: name.to_string(),
                },
            }),
            None => Err(ApiError::Status { endpoint: Endpoint::Login, status: 401 }),
        }
    }

    async fn logout(&self, _user: &SessionUser) -> Result<(), ApiError> {
        self.hit(Endpoint::Logout)
    }

    async fn member_dashboard(&self, _user: &SessionUser) -> Result<MemberDashboardPayload, ApiError> {
        self.hit(Endpoint::MemberDashboard)?;
        let now = Utc::now();
        Ok(MemberDashboardPayload {
            membership: Some(MembershipPayload {
                plan_name: "Premium Annual".into(),
                status: "active".into(),
                expires_on: Some((now + Duration::days(47)).date_naive()),
            }),
            visits_this_month: 9,
            monthly_visit_goal: 12,
            upcoming_bookings: vec![
                BookingPayload {
                    id: "b-1".into(),
                    class_name: "Spin 45".into(),
                    trainer_name: "Marcus Bell".into(),
                    starts_at: Some(now + Duration::hours(20)),
                },
                BookingPayload {
                    id: "b-2".into(),
                    class_name: "Mobility Flow".into(),
                    trainer_name: "Hana Ito".into(),
                    starts_at: Some(now + Duration::days(3)),
                },
            ],
        })
    }

    async fn trainer_dashboard(&self, _user: &SessionUser) -> Result<TrainerDashboardPayload, ApiError> {
        self.hit(Endpoint::TrainerDashboard)?;
        let now = Utc::now();
        Ok(TrainerDashboardPayload {
            active_clients: 14,
            sessions_today: vec![
                TrainingSessionPayload {
                    id: "s-2".into(),
                    client_name: "Jordan Lee".into(),
                    session_type: "Strength".into(),
                    starts_at: Some(now + Duration::hours(4)),
                    duration_minutes: 60,
                },
                TrainingSessionPayload {
                    id: "s-1".into(),
                    client_name: "Maya Chen".into(),
                    session_type: "Assessment".into(),
                    starts_at: Some(now + Duration::hours(1)),
                    duration_minutes: 45,
                },
            ],
            weekly_capacity: 30,
            weekly_booked: 22,
        })
    }

    async fn staff_dashboard(&self, _user: &SessionUser) -> Result<StaffStatsPayload, ApiError> {
        self.hit(Endpoint::StaffDashboard)?;
        Ok(StaffStatsPayload {
            check_ins_today: 87,
            classes_today: 11,
            pending_tasks: 4,
            trial_visits_today: 3,
        })
    }

    async fn leads(&self, _user: &SessionUser) -> Result<Vec<LeadPayload>, ApiError> {
        self.hit(Endpoint::Leads)?;
        let now = Utc::now();
        let lead = |id: &str, name: &str, source: &str, stage: &str, days: i64| LeadPayload {
            id: id.into(),
            name: name.into(),
            phone: "555-0100".into(),
            source: source.into(),
            stage: stage.into(),
            created_at: Some(now - Duration::days(days)),
        };
        Ok(vec![
            lead("l-1", "Kim Novak", "Walk-in", "new", 0),
            lead("l-2", "Omar Haddad", "Website", "contacted", 2),
            lead("l-3", "Ella Brandt", "Referral", "trial", 4),
            lead("l-4", "Tom Reyes", "Instagram", "won", 9),
            lead("l-5", "Sara Quist", "Website", "lost", 12),
            lead("l-6", "Ben Ode", "Walk-in", "new", 1),
        ])
    }

    async fn manager_dashboard(&self, _user: &SessionUser) -> Result<ManagerStatsPayload, ApiError> {
        self.hit(Endpoint::ManagerDashboard)?;
        Ok(ManagerStatsPayload {
            active_members: 612,
            expiring_this_week: 18,
            revenue_this_month: 48_250.0,
            revenue_target: 60_000.0,
            attendance_rate: 71.5,
        })
    }

    async fn invoices(
        &self,
        _user: &SessionUser,
        status: Option<&str>,
    ) -> Result<Vec<InvoicePayload>, ApiError> {
        self.hit(Endpoint::Invoices)?;
        let today = Utc::now().date_naive();
        let invoice = |n: u32, member: &str, amount: f64, due_in: i64, status: &str| InvoicePayload {
            id: format!("inv-{n}"),
            number: format!("INV-2026-{n:04}"),
            member_name: member.into(),
            amount,
            due_date: Some(today + Duration::days(due_in)),
            status: status.into(),
        };
        let all = vec![
            invoice(101, "Jordan Lee", 89.0, -12, "overdue"),
            invoice(102, "Maya Chen", 129.5, -3, "overdue"),
            invoice(103, "Kim Novak", 49.0, 5, "pending"),
            invoice(104, "Tom Reyes", 899.0, -30, "paid"),
        ];
        Ok(match status {
            Some(s) => all.into_iter().filter(|i| i.status.eq_ignore_ascii_case(s)).collect(),
            None => all,
        })
    }

    async fn branch_stats(&self, _user: &SessionUser) -> Result<BranchStatsPayload, ApiError> {
        self.hit(Endpoint::BranchStats)?;
        Ok(BranchStatsPayload {
            total_members: 734,
            active_members: 612,
            check_ins_today: 87,
            revenue_this_month: 48_250.0,
            new_leads: 23,
        })
    }

    async fn branch_activities(&self, _user: &SessionUser) -> Result<Vec<ActivityPayload>, ApiError> {
        self.hit(Endpoint::BranchActivities)?;
        let now = Utc::now();
        Ok(vec![
            ActivityPayload {
                id: "a-1".into(),
                member_name: "Jordan Lee".into(),
                action: "checked in".into(),
                timestamp: Some(now - Duration::minutes(4)),
            },
            ActivityPayload {
                id: "a-2".into(),
                member_name: "Maya Chen".into(),
                action: "renewed Premium Annual".into(),
                timestamp: Some(now - Duration::hours(2)),
            },
            ActivityPayload {
                id: "a-3".into(),
                member_name: "Kim Novak".into(),
                action: "booked a trial session".into(),
                timestamp: Some(now - Duration::days(1)),
            },
        ])
    }

    async fn branch_trainers(&self, _user: &SessionUser) -> Result<Vec<TrainerStatusPayload>, ApiError> {
        self.hit(Endpoint::BranchTrainers)?;
        let trainer = |id: &str, name: &str, specialty: &str, status: &str, booked, total| {
            TrainerStatusPayload {
                id: id.into(),
                name: name.into(),
                specialty: specialty.into(),
                status: status.into(),
                booked_slots: booked,
                total_slots: total,
            }
        };
        Ok(vec![
            trainer("t-1", "Marcus Bell", "Strength", "busy", 7, 8),
            trainer("t-2", "Hana Ito", "Mobility", "available", 3, 8),
            trainer("t-3", "Dev Patel", "HIIT", "off", 0, 0),
        ])
    }

    async fn network_stats(&self, _user: &SessionUser) -> Result<NetworkStatsPayload, ApiError> {
        self.hit(Endpoint::NetworkStats)?;
        Ok(NetworkStatsPayload {
            total_branches: 3,
            total_members: 1_980,
            total_revenue: 131_400.0,
            active_trainers: 27,
        })
    }

    async fn branches(&self, _user: &SessionUser) -> Result<Vec<BranchSummaryPayload>, ApiError> {
        self.hit(Endpoint::Branches)?;
        let branch = |id: &str, name: &str, city: &str, members, revenue| BranchSummaryPayload {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            members,
            revenue,
        };
        Ok(vec![
            branch("br-1", "Riverside", "Portland", 734, 48_250.0),
            branch("br-2", "Old Town", "Portland", 702, 46_150.0),
            branch("br-3", "Lakeview", "Salem", 544, 37_000.0),
        ])
    }
}
