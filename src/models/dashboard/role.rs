use serde::Serialize;
use std::fmt;

/// Permission tier of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    BranchAdmin,
    Manager,
    Staff,
    Trainer,
    Member,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::SuperAdmin,
        Role::BranchAdmin,
        Role::Manager,
        Role::Staff,
        Role::Trainer,
        Role::Member,
    ];

    /// Parse a role string. Case, surrounding whitespace and `-`/space versus
    /// `_` separators are ignored.
    pub fn parse(raw: &str) -> Option<Role> {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        match normalized.as_str() {
            "SUPER_ADMIN" => Some(Role::SuperAdmin),
            "BRANCH_ADMIN" => Some(Role::BranchAdmin),
            "MANAGER" => Some(Role::Manager),
            "STAFF" => Some(Role::Staff),
            "TRAINER" => Some(Role::Trainer),
            "MEMBER" => Some(Role::Member),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::BranchAdmin => "BRANCH_ADMIN",
            Role::Manager => "MANAGER",
            Role::Staff => "STAFF",
            Role::Trainer => "TRAINER",
            Role::Member => "MEMBER",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::BranchAdmin => "Branch Admin",
            Role::Manager => "Manager",
            Role::Staff => "Front Desk",
            Role::Trainer => "Trainer",
            Role::Member => "Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dashboard presentation chosen for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardKind {
    SuperAdmin,
    BranchAdmin,
    Manager,
    Staff,
    Trainer,
    Member,
    /// Unrecognised role: static message, no data loaded.
    Fallback,
}

/// Pick the dashboard for a role string. Total over every input.
pub fn dispatch(role: &str) -> DashboardKind {
    match Role::parse(role) {
        Some(role) => DashboardKind::from(role),
        None => DashboardKind::Fallback,
    }
}

impl From<Role> for DashboardKind {
    fn from(role: Role) -> Self {
        match role {
            Role::SuperAdmin => DashboardKind::SuperAdmin,
            Role::BranchAdmin => DashboardKind::BranchAdmin,
            Role::Manager => DashboardKind::Manager,
            Role::Staff => DashboardKind::Staff,
            Role::Trainer => DashboardKind::Trainer,
            Role::Member => DashboardKind::Member,
        }
    }
}

impl DashboardKind {
    pub fn title(self) -> &'static str {
        match self {
            DashboardKind::SuperAdmin => "Network overview",
            DashboardKind::BranchAdmin => "Branch dashboard",
            DashboardKind::Manager => "Club performance",
            DashboardKind::Staff => "Front desk",
            DashboardKind::Trainer => "My training day",
            DashboardKind::Member => "My membership",
            DashboardKind::Fallback => "Dashboard",
        }
    }

    /// Whether the screen offers a manual refresh action.
    pub fn refreshable(self) -> bool {
        self == DashboardKind::BranchAdmin
    }

    pub fn is_fallback(self) -> bool {
        self == DashboardKind::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_known_role_gets_its_own_dashboard() {
        assert_eq!(dispatch("SUPER_ADMIN"), DashboardKind::SuperAdmin);
        assert_eq!(dispatch("BRANCH_ADMIN"), DashboardKind::BranchAdmin);
        assert_eq!(dispatch("MANAGER"), DashboardKind::Manager);
        assert_eq!(dispatch("STAFF"), DashboardKind::Staff);
        assert_eq!(dispatch("TRAINER"), DashboardKind::Trainer);
        assert_eq!(dispatch("MEMBER"), DashboardKind::Member);
    }

    #[test]
    fn role_strings_are_normalized() {
        assert_eq!(dispatch("  member "), DashboardKind::Member);
        assert_eq!(dispatch("branch-admin"), DashboardKind::BranchAdmin);
        assert_eq!(dispatch("Super Admin"), DashboardKind::SuperAdmin);
    }

    #[test]
    fn anything_else_falls_back() {
        for role in ["", "ADMIN", "OWNER", "MEMBERS", "super__admin", "🏋️"] {
            assert_eq!(dispatch(role), DashboardKind::Fallback, "role {role:?}");
        }
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn six_distinct_dashboards() {
        let kinds: std::collections::HashSet<_> =
            Role::ALL.iter().map(|r| format!("{:?}", DashboardKind::from(*r))).collect();
        assert_eq!(kinds.len(), 6);
        assert!(!kinds.contains("Fallback"));
    }
}
