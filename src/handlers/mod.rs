pub mod api_v1;
pub mod auth_handlers;
pub mod billing_handlers;
pub mod crm_handlers;
pub mod dashboard;
