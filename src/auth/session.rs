use actix_session::{Session, SessionExt};
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};

use crate::errors::AppError;
use crate::models::dashboard::role::Role;

/// Session key holding the bare role string.
pub const ROLE_KEY: &str = "userRole";
/// Session key holding the serialized [`SessionUser`].
pub const USER_KEY: &str = "userData";
const FLASH_KEY: &str = "flash";

/// The signed-in user as the portal remembers it between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: String,
    pub role: String,
    pub display_name: String,
    /// Backend bearer token, forwarded on every backend call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl SessionUser {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    pub fn avatar_initial(&self) -> String {
        self.display_name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

/// Store the user in the session and rotate the session id.
pub fn login(session: &Session, user: &SessionUser) -> Result<(), AppError> {
    session.renew();
    session.insert(ROLE_KEY, &user.role)?;
    session.insert(USER_KEY, user)?;
    log::info!("Signed in user {} as {}", user.user_id, user.role);
    Ok(())
}

/// Restore the user from session storage. `userRole` wins over the role
/// embedded in `userData` so a role change written on its own sticks.
pub fn current_user(session: &Session) -> Option<SessionUser> {
    let mut user = match session.get::<SessionUser>(USER_KEY) {
        Ok(Some(user)) => user,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Discarding unreadable {USER_KEY}: {e}");
            return None;
        }
    };
    if let Ok(Some(role)) = session.get::<String>(ROLE_KEY) {
        user.role = role;
    }
    Some(user)
}

/// Drop everything the session holds, including the cookie.
pub fn clear(session: &Session) {
    session.purge();
}

pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH_KEY, message) {
        log::warn!("Failed to store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

/// Extractor for handlers that need the signed-in user.
///
/// Fails fast with [`AppError::Unauthenticated`] when the request carries no
/// authenticated session.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

impl CurrentUser {
    pub fn into_inner(self) -> SessionUser {
        self.0
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = SessionUser;

    fn deref(&self) -> &SessionUser {
        &self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();
        ready(current_user(&session).map(CurrentUser).ok_or(AppError::Unauthenticated))
    }
}

/// Allow the request only for the listed roles.
pub fn require_role(user: &SessionUser, allowed: &[Role], area: &str) -> Result<Role, AppError> {
    match user.role() {
        Some(role) if allowed.contains(&role) => Ok(role),
        _ => Err(AppError::PermissionDenied(area.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn member() -> SessionUser {
        SessionUser {
            user_id: "u-600".to_string(),
            role: "MEMBER".to_string(),
            display_name: "jordan".to_string(),
            token: None,
        }
    }

    #[test]
    fn login_then_restore() {
        let req = TestRequest::default().to_http_request();
        let session = req.get_session();
        assert!(current_user(&session).is_none());

        login(&session, &member()).unwrap();
        let restored = current_user(&session).unwrap();
        assert_eq!(restored, member());
        assert_eq!(restored.avatar_initial(), "J");
    }

    #[test]
    fn stored_role_overrides_user_data() {
        let req = TestRequest::default().to_http_request();
        let session = req.get_session();
        login(&session, &member()).unwrap();

        session.insert(ROLE_KEY, "BRANCH_ADMIN").unwrap();
        let user = current_user(&session).unwrap();
        assert_eq!(user.role, "BRANCH_ADMIN");
        assert_eq!(user.role(), Some(Role::BranchAdmin));
    }

    #[test]
    fn clear_forgets_the_user() {
        let req = TestRequest::default().to_http_request();
        let session = req.get_session();
        login(&session, &member()).unwrap();

        clear(&session);
        assert!(current_user(&session).is_none());
    }
}
