use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::GymApi;
use crate::api::mock::DEMO_ACCOUNTS;
use crate::api::types::Credentials;
use crate::auth::session::{self, SessionUser};
use crate::auth::{csrf, validate};
use crate::config::{ApiMode, AppConfig};
use crate::errors::{AppError, render};
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    pub signed_out: Option<String>,
}

fn login_form(
    session: &Session,
    config: &AppConfig,
    email: &str,
    errors: Vec<String>,
    flash: Option<String>,
) -> Result<HttpResponse, AppError> {
    let demo_accounts = match config.api_mode {
        ApiMode::Mock => DEMO_ACCOUNTS
            .iter()
            .map(|(email, _, role, _)| (email.to_string(), role.to_string()))
            .collect(),
        ApiMode::Http => Vec::new(),
    };
    let tmpl = LoginTemplate {
        app_name: config.app_name.clone(),
        csrf_token: csrf::issue(session),
        email: email.to_string(),
        errors,
        flash,
        demo_accounts,
    };
    render(tmpl)
}

pub async fn login_page(
    session: Session,
    config: web::Data<AppConfig>,
    query: web::Query<LoginQuery>,
) -> Result<HttpResponse, AppError> {
    // Already signed in: straight to the dashboard
    if session::current_user(&session).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/dashboard"))
            .finish());
    }

    let flash = query
        .signed_out
        .as_ref()
        .map(|_| "You have been signed out.".to_string());
    login_form(&session, &config, "", Vec::new(), flash)
}

pub async fn login_submit(
    session: Session,
    api: web::Data<dyn GymApi>,
    config: web::Data<AppConfig>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&session, &form.csrf_token)?;

    let errors = validate::validate_login(&form.email, &form.password);
    if !errors.is_empty() {
        return login_form(&session, &config, &form.email, errors, None);
    }

    let credentials = Credentials {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
    };

    match api.login(&credentials).await {
        Ok(resp) => {
            let display_name = if resp.user.name.trim().is_empty() {
                credentials.email.clone()
            } else {
                resp.user.name
            };
            let user = SessionUser {
                user_id: resp.user.id,
                role: resp.user.role,
                display_name,
                token: resp.token,
            };
            session::login(&session, &user)?;
            session::set_flash(&session, &format!("Welcome back, {}", user.display_name));
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish())
        }
        Err(e) if e.is_unauthorized() => {
            log::info!("Rejected sign-in for {}", credentials.email);
            let errors = vec!["Invalid email or password".to_string()];
            login_form(&session, &config, &credentials.email, errors, None)
        }
        Err(e) => {
            log::error!("Sign-in failed: {e}");
            let errors = vec!["Sign-in is unavailable right now. Please try again.".to_string()];
            login_form(&session, &config, &credentials.email, errors, None)
        }
    }
}

/// Best-effort backend sign-out, then the local session is always dropped.
pub async fn logout(
    session: Session,
    api: web::Data<dyn GymApi>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&session, &form.csrf_token)?;

    if let Some(user) = session::current_user(&session) {
        if let Err(e) = api.logout(&user).await {
            log::warn!("Backend sign-out failed for user {}: {e}", user.user_id);
        }
    }

    session::clear(&session);
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login?signed_out=1"))
        .finish())
}
