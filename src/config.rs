use actix_web::cookie::Key;

/// Which backend the portal talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    Http,
    Mock,
}

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_mode: ApiMode,
    pub backend_url: String,
    pub app_name: String,
    pub cookie_secure: bool,
    /// Raw session key material; `None` means a random key is generated at startup.
    pub session_key: Option<String>,
}

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000/api";
const DEFAULT_APP_NAME: &str = "GymDesk";
const MIN_SESSION_KEY_LEN: usize = 64;

impl AppConfig {
    /// Read from the process environment. Load `.env` (dotenvy) before calling.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_mode = match lookup("GYMDESK_API_MODE").as_deref().map(str::trim) {
            Some(m) if m.eq_ignore_ascii_case("http") => ApiMode::Http,
            Some(m) if m.eq_ignore_ascii_case("mock") || m.is_empty() => ApiMode::Mock,
            Some(other) => {
                log::warn!("Unknown GYMDESK_API_MODE '{other}', falling back to mock");
                ApiMode::Mock
            }
            None => ApiMode::Mock,
        };

        let backend_url = lookup("GYMDESK_BACKEND_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let session_key = match lookup("SESSION_KEY") {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => Some(val),
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {}+), generating random key",
                    val.len(),
                    MIN_SESSION_KEY_LEN
                );
                None
            }
            None => None,
        };

        Self {
            bind_addr: lookup("GYMDESK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            api_mode,
            backend_url,
            app_name: lookup("GYMDESK_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            cookie_secure: lookup("GYMDESK_COOKIE_SECURE")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
            session_key,
        }
    }

    /// Cookie signing/encryption key for the session middleware.
    pub fn session_key(&self) -> Key {
        match &self.session_key {
            Some(val) => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            None => {
                log::warn!("No usable SESSION_KEY, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}

fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
