// Template context structures for Askama templates, organized by screen.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{SessionUser, take_flash};
use crate::models::nav_item::{self, NavItem};

mod billing;
mod common;
mod crm;
mod dashboard;

pub use billing::*;
pub use common::*;
pub use crm::*;
pub use dashboard::*;

/// Common context shared by all signed-in pages.
/// Templates access these as `ctx.display_name`, `ctx.nav`, etc.
pub struct PageContext {
    pub display_name: String,
    pub avatar_initial: String,
    pub role_label: String,
    pub nav: Vec<NavItem>,
    pub flash: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, user: &SessionUser, app_name: &str, current_path: &str) -> Self {
        let role = user.role();
        Self {
            display_name: user.display_name.clone(),
            avatar_initial: user.avatar_initial(),
            role_label: role.map(|r| r.label().to_string()).unwrap_or_else(|| user.role.clone()),
            nav: nav_item::for_role(role, current_path),
            flash: take_flash(session),
            app_name: app_name.to_string(),
            csrf_token: csrf::issue(session),
        }
    }
}
