//! Backend access. Every dashboard, page and the session holder talk to the
//! club backend through [`GymApi`]; `http` speaks to the real REST service and
//! `mock` serves in-memory demo data.

pub mod http;
pub mod mock;
pub mod types;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::auth::session::SessionUser;
use types::*;

pub use http::HttpGymApi;
pub use mock::MockGymApi;

/// Shared handle stored in actix app data.
pub type SharedApi = Arc<dyn GymApi>;

/// One backend call. Used for error reporting and mock failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Logout,
    MemberDashboard,
    TrainerDashboard,
    StaffDashboard,
    Leads,
    ManagerDashboard,
    Invoices,
    BranchStats,
    BranchActivities,
    BranchTrainers,
    NetworkStats,
    Branches,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Login => "/auth/login",
            Endpoint::Logout => "/auth/logout",
            Endpoint::MemberDashboard => "/dashboard/member",
            Endpoint::TrainerDashboard => "/trainer/dashboard",
            Endpoint::StaffDashboard => "/staff/dashboard",
            Endpoint::Leads => "/crm/leads",
            Endpoint::ManagerDashboard => "/manager/dashboard",
            Endpoint::Invoices => "/billing/invoices",
            Endpoint::BranchStats => "/branch-admin/dashboard/stats",
            Endpoint::BranchActivities => "/branch-admin/dashboard/activities",
            Endpoint::BranchTrainers => "/branch-admin/dashboard/trainers",
            Endpoint::NetworkStats => "/super-admin/dashboard/stats",
            Endpoint::Branches => "/super-admin/branches",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug)]
pub enum ApiError {
    Transport(reqwest::Error),
    Status { endpoint: Endpoint, status: u16 },
    Decode { endpoint: Endpoint, message: String },
    /// A 2xx body flagged `"success": false`.
    Rejected { endpoint: Endpoint, message: String },
    /// Raised by the mock backend for endpoints configured to fail.
    Unavailable(Endpoint),
}

impl ApiError {
    /// True when the backend rejected the caller's credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Status { status: 401 | 403, .. }
                | ApiError::Rejected { endpoint: Endpoint::Login, .. }
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "request failed: {e}"),
            ApiError::Status { endpoint, status } => {
                write!(f, "{endpoint} returned HTTP {status}")
            }
            ApiError::Decode { endpoint, message } => {
                write!(f, "{endpoint} returned an unreadable payload: {message}")
            }
            ApiError::Rejected { endpoint, message } => {
                write!(f, "{endpoint} rejected the request: {message}")
            }
            ApiError::Unavailable(endpoint) => write!(f, "{endpoint} is unavailable"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}

#[async_trait]
pub trait GymApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    async fn logout(&self, user: &SessionUser) -> Result<(), ApiError>;

    async fn member_dashboard(&self, user: &SessionUser) -> Result<MemberDashboardPayload, ApiError>;

    async fn trainer_dashboard(&self, user: &SessionUser) -> Result<TrainerDashboardPayload, ApiError>;

    async fn staff_dashboard(&self, user: &SessionUser) -> Result<StaffStatsPayload, ApiError>;

    async fn leads(&self, user: &SessionUser) -> Result<Vec<LeadPayload>, ApiError>;

    async fn manager_dashboard(&self, user: &SessionUser) -> Result<ManagerStatsPayload, ApiError>;

    /// Invoices, optionally filtered by status (`paid`, `pending`, `overdue`).
    async fn invoices(
        &self,
        user: &SessionUser,
        status: Option<&str>,
    ) -> Result<Vec<InvoicePayload>, ApiError>;

    async fn branch_stats(&self, user: &SessionUser) -> Result<BranchStatsPayload, ApiError>;

    async fn branch_activities(&self, user: &SessionUser) -> Result<Vec<ActivityPayload>, ApiError>;

    async fn branch_trainers(&self, user: &SessionUser) -> Result<Vec<TrainerStatusPayload>, ApiError>;

    async fn network_stats(&self, user: &SessionUser) -> Result<NetworkStatsPayload, ApiError>;

    async fn branches(&self, user: &SessionUser) -> Result<Vec<BranchSummaryPayload>, ApiError>;
}
