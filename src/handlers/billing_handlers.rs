use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::GymApi;
use crate::auth::session::{CurrentUser, require_role};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::billing::{self, InvoiceRow, STATUS_FILTERS};
use crate::models::nav_item;
use crate::models::widgets::format_money;
use crate::templates_structs::{FilterLink, InvoicesTemplate, PageContext};

const PATH: &str = "/billing/invoices";

#[derive(Deserialize)]
pub struct InvoiceQuery {
    pub status: Option<String>,
}

fn filter_links(active: Option<&str>) -> Vec<FilterLink> {
    let mut links = vec![FilterLink {
        label: "All".to_string(),
        href: PATH.to_string(),
        active: active.is_none(),
    }];
    links.extend(STATUS_FILTERS.iter().map(|s| FilterLink {
        label: s[..1].to_uppercase() + &s[1..],
        href: format!("{PATH}?status={s}"),
        active: active == Some(*s),
    }));
    links
}

/// Invoice table with an optional status filter.
pub async fn invoices(
    session: Session,
    user: CurrentUser,
    api: web::Data<dyn GymApi>,
    config: web::Data<AppConfig>,
    query: web::Query<InvoiceQuery>,
) -> Result<HttpResponse, AppError> {
    require_role(&user, nav_item::roles_for(PATH).unwrap_or_default(), PATH)?;

    let status = billing::status_filter(query.status.as_deref());
    let (invoices, load_failed) = match api.invoices(&user, status).await {
        Ok(invoices) => (invoices, false),
        Err(e) => {
            log::error!("Failed to load invoices for user {}: {e}", user.user_id);
            (Vec::new(), true)
        }
    };

    let ctx = PageContext::build(&session, &user, &config.app_name, PATH);
    let tmpl = InvoicesTemplate {
        ctx,
        rows: invoices.iter().map(InvoiceRow::from).collect(),
        outstanding: format_money(billing::outstanding_total(&invoices)),
        filters: filter_links(status),
        load_failed,
    };
    render(tmpl)
}

#[cfg(test)]
mod tests {
    use super::filter_links;

    #[test]
    fn exactly_one_tab_is_active() {
        let links = filter_links(Some("overdue"));
        let active: Vec<&str> = links.iter().filter(|l| l.active).map(|l| l.label.as_str()).collect();
        assert_eq!(active, vec!["Overdue"]);
        assert_eq!(links[2].href, "/billing/invoices?status=overdue");

        let links = filter_links(None);
        assert!(links[0].active);
        assert_eq!(links.iter().filter(|l| l.active).count(), 1);
    }
}
