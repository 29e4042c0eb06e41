use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::{Local, Timelike};

use crate::api::GymApi;
use crate::auth::session::CurrentUser;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::dashboard::{DashboardData, DashboardPanel, LoadState, dispatch, loaders};
use crate::templates_structs::*;

fn time_greeting(name: &str, hour: u32) -> String {
    let period = match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    };
    format!("{period}, {name}")
}

/// Dashboard shell: chrome, greeting and the loading placeholder. The role
/// panel is fetched separately from `/dashboard/panel`.
pub async fn index(
    session: Session,
    user: CurrentUser,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    let kind = dispatch(&user.role);
    let ctx = PageContext::build(&session, &user, &config.app_name, "/dashboard");

    let tmpl = DashboardShellTemplate {
        greeting: time_greeting(&ctx.display_name, Local::now().hour()),
        ctx,
        title: kind.title().to_string(),
        state: LoadState::Loading,
        refreshable: kind.refreshable(),
        fallback_role: kind.is_fallback().then(|| user.role.clone()),
    };
    render(tmpl)
}

/// Load and render the panel for the caller's role.
pub async fn panel(
    user: CurrentUser,
    api: web::Data<dyn GymApi>,
) -> Result<HttpResponse, AppError> {
    let kind = dispatch(&user.role);
    let panel = loaders::load(&**api, &user, kind).await;
    render_panel(panel, &user.role)
}

/// Pick the template for a loaded panel.
pub fn render_panel(panel: DashboardPanel, role: &str) -> Result<HttpResponse, AppError> {
    let state = panel.state;
    match panel.data {
        DashboardData::SuperAdmin(vm) => render(SuperAdminPanelTemplate { state, vm }),
        DashboardData::BranchAdmin(vm) => render(BranchAdminPanelTemplate { state, vm }),
        DashboardData::Manager(vm) => render(ManagerPanelTemplate { state, vm }),
        DashboardData::Staff(vm) => render(StaffPanelTemplate { state, vm }),
        DashboardData::Trainer(vm) => render(TrainerPanelTemplate { state, vm }),
        DashboardData::Member(vm) => render(MemberPanelTemplate { state, vm }),
        DashboardData::Fallback => render(FallbackPanelTemplate { role: role.to_string() }),
    }
}
