use askama::Template;

use crate::models::dashboard::{
    BranchAdminDashboard, LoadState, ManagerDashboard, MemberDashboard, StaffDashboard,
    SuperAdminDashboard, TrainerDashboard,
};
use super::PageContext;

/// Page chrome plus the loading placeholder the panel is swapped into.
#[derive(Template)]
#[template(path = "dashboard/shell.html")]
pub struct DashboardShellTemplate {
    pub ctx: PageContext,
    pub greeting: String,
    pub title: String,
    pub state: LoadState,
    pub refreshable: bool,
    /// Set for unrecognised roles: the static message replaces the panel.
    pub fallback_role: Option<String>,
}

#[derive(Template)]
#[template(path = "dashboard/super_admin.html")]
pub struct SuperAdminPanelTemplate {
    pub state: LoadState,
    pub vm: SuperAdminDashboard,
}

#[derive(Template)]
#[template(path = "dashboard/branch_admin.html")]
pub struct BranchAdminPanelTemplate {
    pub state: LoadState,
    pub vm: BranchAdminDashboard,
}

#[derive(Template)]
#[template(path = "dashboard/manager.html")]
pub struct ManagerPanelTemplate {
    pub state: LoadState,
    pub vm: ManagerDashboard,
}

#[derive(Template)]
#[template(path = "dashboard/staff.html")]
pub struct StaffPanelTemplate {
    pub state: LoadState,
    pub vm: StaffDashboard,
}

#[derive(Template)]
#[template(path = "dashboard/trainer.html")]
pub struct TrainerPanelTemplate {
    pub state: LoadState,
    pub vm: TrainerDashboard,
}

#[derive(Template)]
#[template(path = "dashboard/member.html")]
pub struct MemberPanelTemplate {
    pub state: LoadState,
    pub vm: MemberDashboard,
}

#[derive(Template)]
#[template(path = "dashboard/fallback.html")]
pub struct FallbackPanelTemplate {
    pub role: String,
}
