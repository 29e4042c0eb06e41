use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::api::GymApi;
use crate::auth::session::{CurrentUser, require_role};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::{crm, nav_item};
use crate::templates_structs::{LeadsTemplate, PageContext};

const PATH: &str = "/crm/leads";

/// Lead pipeline board.
pub async fn leads(
    session: Session,
    user: CurrentUser,
    api: web::Data<dyn GymApi>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    require_role(&user, nav_item::roles_for(PATH).unwrap_or_default(), PATH)?;

    let (leads, load_failed) = match api.leads(&user).await {
        Ok(leads) => (leads, false),
        Err(e) => {
            log::error!("Failed to load leads for user {}: {e}", user.user_id);
            (Vec::new(), true)
        }
    };

    let ctx = PageContext::build(&session, &user, &config.app_name, PATH);
    let tmpl = LeadsTemplate {
        ctx,
        columns: crm::pipeline(&leads, Utc::now()),
        total: leads.len(),
        load_failed,
    };
    render(tmpl)
}
