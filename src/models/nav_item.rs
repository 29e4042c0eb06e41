use crate::models::dashboard::Role;

pub struct NavItem {
    pub label: String,
    pub url: String,
    pub is_active: bool,
}

/// (label, url, roles allowed; empty means everyone signed in)
const NAV: &[(&str, &str, &[Role])] = &[
    ("Dashboard", "/dashboard", &[]),
    ("Leads", "/crm/leads", &[Role::Staff, Role::Manager, Role::BranchAdmin]),
    ("Invoices", "/billing/invoices", &[Role::Manager, Role::BranchAdmin, Role::SuperAdmin]),
];

/// Roles allowed on the page at `url`, or `None` for pages open to everyone.
pub fn roles_for(url: &str) -> Option<&'static [Role]> {
    NAV.iter()
        .find(|(_, u, roles)| *u == url && !roles.is_empty())
        .map(|(_, _, roles)| *roles)
}

/// Menu for a role, marking the entry that owns `current_path`.
pub fn for_role(role: Option<Role>, current_path: &str) -> Vec<NavItem> {
    NAV.iter()
        .filter(|(_, _, roles)| roles.is_empty() || role.is_some_and(|r| roles.contains(&r)))
        .map(|(label, url, _)| NavItem {
            label: label.to_string(),
            url: url.to_string(),
            is_active: current_path == *url || current_path.starts_with(&format!("{url}/")),
        })
        .collect()
}
