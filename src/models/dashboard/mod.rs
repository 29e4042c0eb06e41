pub mod loaders;
pub mod role;
pub mod types;

use serde::Serialize;

pub use role::{DashboardKind, Role, dispatch};
pub use types::*;

/// Where a dashboard's data is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Ready,
    /// The fetch failed; the view-model holds defaults.
    Failed,
}

impl LoadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Ready => "ready",
            LoadState::Failed => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        *self == LoadState::Loading
    }

    pub fn is_failed(&self) -> bool {
        *self == LoadState::Failed
    }
}

/// View-model for whichever dashboard the dispatcher picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DashboardData {
    SuperAdmin(SuperAdminDashboard),
    BranchAdmin(BranchAdminDashboard),
    Manager(ManagerDashboard),
    Staff(StaffDashboard),
    Trainer(TrainerDashboard),
    Member(MemberDashboard),
    Fallback,
}

/// One loaded dashboard, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPanel {
    pub kind: DashboardKind,
    pub state: LoadState,
    pub data: DashboardData,
}
