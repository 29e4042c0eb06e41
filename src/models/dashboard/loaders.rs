//! Per-role data loading. Each loader fires its backend calls concurrently,
//! joins them and maps the payloads into the role's view-model. A failure is
//! logged and the view-model falls back to its defaults; nothing is retried.

use chrono::{DateTime, Utc};

use super::{DashboardData, DashboardKind, DashboardPanel, LoadState};
use super::types::*;
use crate::api::{ApiError, GymApi};
use crate::auth::session::SessionUser;

/// Load the dashboard `kind` for `user`. The fallback dashboard makes no calls.
pub async fn load(api: &dyn GymApi, user: &SessionUser, kind: DashboardKind) -> DashboardPanel {
    let now = Utc::now();
    match kind {
        DashboardKind::SuperAdmin => {
            settle(kind, user, load_super_admin(api, user).await, DashboardData::SuperAdmin)
        }
        DashboardKind::BranchAdmin => {
            settle(kind, user, load_branch_admin(api, user, now).await, DashboardData::BranchAdmin)
        }
        DashboardKind::Manager => {
            settle(kind, user, load_manager(api, user).await, DashboardData::Manager)
        }
        DashboardKind::Staff => {
            let (state, data) = load_staff(api, user, now).await;
            DashboardPanel { kind, state, data: DashboardData::Staff(data) }
        }
        DashboardKind::Trainer => {
            settle(kind, user, load_trainer(api, user).await, DashboardData::Trainer)
        }
        DashboardKind::Member => {
            settle(kind, user, load_member(api, user, now).await, DashboardData::Member)
        }
        DashboardKind::Fallback => DashboardPanel {
            kind,
            state: LoadState::Ready,
            data: DashboardData::Fallback,
        },
    }
}

/// Turn a loader result into a panel, keeping defaults on failure.
fn settle<T: Default>(
    kind: DashboardKind,
    user: &SessionUser,
    result: Result<T, ApiError>,
    wrap: fn(T) -> DashboardData,
) -> DashboardPanel {
    match result {
        Ok(vm) => DashboardPanel { kind, state: LoadState::Ready, data: wrap(vm) },
        Err(e) => {
            log::error!("Failed to load {kind:?} dashboard for user {}: {e}", user.user_id);
            DashboardPanel { kind, state: LoadState::Failed, data: wrap(T::default()) }
        }
    }
}

pub async fn load_super_admin(api: &dyn GymApi, user: &SessionUser) -> Result<SuperAdminDashboard, ApiError> {
    let (stats, branches) = tokio::try_join!(api.network_stats(user), api.branches(user))?;
    Ok(SuperAdminDashboard::build(&stats, &branches))
}

/// Stats, activity feed and trainer roster; any one failing aborts the batch.
pub async fn load_branch_admin(
    api: &dyn GymApi,
    user: &SessionUser,
    now: DateTime<Utc>,
) -> Result<BranchAdminDashboard, ApiError> {
    let (stats, activities, trainers) = tokio::try_join!(
        api.branch_stats(user),
        api.branch_activities(user),
        api.branch_trainers(user),
    )?;
    Ok(BranchAdminDashboard::build(&stats, &activities, &trainers, now))
}

pub async fn load_manager(api: &dyn GymApi, user: &SessionUser) -> Result<ManagerDashboard, ApiError> {
    let (stats, overdue) = tokio::try_join!(
        api.manager_dashboard(user),
        api.invoices(user, Some("overdue")),
    )?;
    Ok(ManagerDashboard::build(&stats, &overdue))
}

/// The front desk keeps whichever half arrived: stats and leads are
/// independent, so one failing does not blank the other.
pub async fn load_staff(
    api: &dyn GymApi,
    user: &SessionUser,
    now: DateTime<Utc>,
) -> (LoadState, StaffDashboard) {
    let (stats, leads) = tokio::join!(api.staff_dashboard(user), api.leads(user));
    let mut state = LoadState::Ready;

    let stats = stats.unwrap_or_else(|e| {
        log::error!("Failed to load front desk stats for user {}: {e}", user.user_id);
        state = LoadState::Failed;
        Default::default()
    });
    let leads = leads.unwrap_or_else(|e| {
        log::error!("Failed to load leads for user {}: {e}", user.user_id);
        state = LoadState::Failed;
        Vec::new()
    });

    (state, StaffDashboard::build(&stats, &leads, now))
}

pub async fn load_trainer(api: &dyn GymApi, user: &SessionUser) -> Result<TrainerDashboard, ApiError> {
    let payload = api.trainer_dashboard(user).await?;
    Ok(TrainerDashboard::build(&payload))
}

pub async fn load_member(
    api: &dyn GymApi,
    user: &SessionUser,
    now: DateTime<Utc>,
) -> Result<MemberDashboard, ApiError> {
    let payload = api.member_dashboard(user).await?;
    Ok(MemberDashboard::build(&payload, now.date_naive()))
}
