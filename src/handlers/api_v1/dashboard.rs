use actix_web::{HttpResponse, web};

use crate::api::GymApi;
use crate::auth::session::CurrentUser;
use crate::errors::AppError;
use crate::models::dashboard::{dispatch, loaders};

/// GET /api/v1/dashboard - the caller's dashboard view-model as JSON
pub async fn read(
    user: CurrentUser,
    api: web::Data<dyn GymApi>,
) -> Result<HttpResponse, AppError> {
    let kind = dispatch(&user.role);
    let panel = loaders::load(&**api, &user, kind).await;
    Ok(HttpResponse::Ok().json(panel))
}
