use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use super::session::current_user;

/// Guard for the signed-in page scope.
///
/// A request whose session cannot produce a user from `userData` (see
/// [`current_user`]) is sent to `/login` with a 303. Script-fetched routes
/// such as `/dashboard/panel` are mounted outside this guard and answer 401
/// through the `CurrentUser` extractor instead.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if current_user(&req.get_session()).is_none() {
        log::debug!("No session user for {}, redirecting to sign-in", req.path());
        let redirect = HttpResponse::SeeOther()
            .insert_header(("Location", "/login"))
            .finish();
        return Ok(req.into_response(redirect).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}
