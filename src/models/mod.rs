pub mod billing;
pub mod crm;
pub mod dashboard;
pub mod nav_item;
pub mod widgets;
