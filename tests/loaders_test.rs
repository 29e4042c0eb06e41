mod common;

use gymdesk::api::Endpoint;
use gymdesk::api::mock::MockGymApi;
use gymdesk::models::dashboard::{
    BranchAdminDashboard, DashboardData, DashboardKind, LoadState, ManagerDashboard, StaffDashboard,
    dispatch, loaders,
};

use common::user;

fn stat_values(cards: &[gymdesk::models::widgets::StatCard]) -> Vec<&str> {
    cards.iter().map(|c| c.value.as_str()).collect()
}

#[tokio::test]
async fn test_every_role_loads_ready_from_the_demo_backend() {
    for role in ["SUPER_ADMIN", "BRANCH_ADMIN", "MANAGER", "STAFF", "TRAINER", "MEMBER"] {
        let api = MockGymApi::new();
        let panel = loaders::load(&api, &user(role), dispatch(role)).await;
        assert_eq!(panel.state, LoadState::Ready, "role {role}");
        assert_eq!(panel.kind, dispatch(role));
    }
}

#[tokio::test]
async fn test_fallback_makes_no_backend_calls() {
    let api = MockGymApi::new();
    let panel = loaders::load(&api, &user("JANITOR"), dispatch("JANITOR")).await;

    assert_eq!(panel.kind, DashboardKind::Fallback);
    assert_eq!(panel.state, LoadState::Ready);
    assert_eq!(panel.data, DashboardData::Fallback);
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_branch_admin_fires_all_three_calls() {
    let api = MockGymApi::new();
    loaders::load(&api, &user("BRANCH_ADMIN"), DashboardKind::BranchAdmin).await;

    let calls = api.calls();
    assert_eq!(calls.len(), 3);
    for endpoint in [Endpoint::BranchStats, Endpoint::BranchActivities, Endpoint::BranchTrainers] {
        assert!(calls.contains(&endpoint), "missing {endpoint}");
    }
}

#[tokio::test]
async fn test_branch_admin_batch_aborts_on_any_failure() {
    let api = MockGymApi::new().failing(Endpoint::BranchTrainers);
    let panel = loaders::load(&api, &user("BRANCH_ADMIN"), DashboardKind::BranchAdmin).await;

    assert_eq!(panel.state, LoadState::Failed);
    // Stats and activities succeeded on their own but the whole batch is discarded
    assert_eq!(panel.data, DashboardData::BranchAdmin(BranchAdminDashboard::default()));
    let DashboardData::BranchAdmin(vm) = panel.data else {
        panic!("wrong dashboard");
    };
    assert!(vm.activities.is_empty());
    assert_eq!(stat_values(&vm.stats)[0], "0");
}

#[tokio::test]
async fn test_manager_failure_keeps_zeroed_cards() {
    let api = MockGymApi::new().failing(Endpoint::Invoices);
    let panel = loaders::load(&api, &user("MANAGER"), DashboardKind::Manager).await;

    assert_eq!(panel.state, LoadState::Failed);
    let DashboardData::Manager(vm) = panel.data else {
        panic!("wrong dashboard");
    };
    assert_eq!(vm, ManagerDashboard::default());
    assert!(vm.stats.iter().any(|c| c.value == "$0.00"));
    assert_eq!(vm.revenue_progress.percent, 0);
}

#[tokio::test]
async fn test_manager_asks_only_for_overdue_invoices() {
    let api = MockGymApi::new();
    let panel = loaders::load(&api, &user("MANAGER"), DashboardKind::Manager).await;

    let DashboardData::Manager(vm) = panel.data else {
        panic!("wrong dashboard");
    };
    assert!(!vm.overdue.is_empty());
    assert!(vm.overdue.iter().all(|row| row.status_class == "overdue"));
}

#[tokio::test]
async fn test_staff_keeps_stats_when_leads_fail() {
    let api = MockGymApi::new().failing(Endpoint::Leads);
    let panel = loaders::load(&api, &user("STAFF"), DashboardKind::Staff).await;

    assert_eq!(panel.state, LoadState::Failed);
    let DashboardData::Staff(vm) = panel.data else {
        panic!("wrong dashboard");
    };
    assert_eq!(stat_values(&vm.stats)[0], "87");
    assert!(vm.recent_leads.is_empty());
    assert!(vm.pipeline.iter().all(|stage| stage.count == 0));
}

#[tokio::test]
async fn test_staff_keeps_leads_when_stats_fail() {
    let api = MockGymApi::new().failing(Endpoint::StaffDashboard);
    let panel = loaders::load(&api, &user("STAFF"), DashboardKind::Staff).await;

    assert_eq!(panel.state, LoadState::Failed);
    let DashboardData::Staff(vm) = panel.data else {
        panic!("wrong dashboard");
    };
    assert_eq!(vm.stats, StaffDashboard::default().stats);
    assert!(!vm.recent_leads.is_empty());
}

#[tokio::test]
async fn test_single_call_dashboards_fail_to_defaults() {
    let api = MockGymApi::new()
        .failing(Endpoint::MemberDashboard)
        .failing(Endpoint::TrainerDashboard);

    let member = loaders::load(&api, &user("MEMBER"), DashboardKind::Member).await;
    assert_eq!(member.state, LoadState::Failed);
    let DashboardData::Member(vm) = member.data else {
        panic!("wrong dashboard");
    };
    assert_eq!(vm.plan_name, "No plan");
    assert!(vm.bookings.is_empty());

    let trainer = loaders::load(&api, &user("TRAINER"), DashboardKind::Trainer).await;
    assert_eq!(trainer.state, LoadState::Failed);
    let DashboardData::Trainer(vm) = trainer.data else {
        panic!("wrong dashboard");
    };
    assert!(vm.sessions.is_empty());
    assert_eq!(vm.capacity.percent, 0);

    // Exactly one attempt each, no retries
    assert_eq!(api.calls(), vec![Endpoint::MemberDashboard, Endpoint::TrainerDashboard]);
}
