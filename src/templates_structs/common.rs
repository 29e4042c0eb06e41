use askama::Template;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub app_name: String,
    pub csrf_token: String,
    pub email: String,
    pub errors: Vec<String>,
    pub flash: Option<String>,
    /// Demo accounts listed when running against the mock backend.
    pub demo_accounts: Vec<(String, String)>,
}
