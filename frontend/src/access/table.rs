use serde::{Deserialize, Serialize};

use super::nav::{
    ADD_NEW_LEAD, ADD_PROJECTS, BOOKINGS, BUILDERS, DASHBOARD, EMPLOYEE_MANAGEMENT,
    LEAD_MANAGEMENT, PARTNERS, PROJECT_MANAGEMENT, QUERIES,
};
use super::role::Role;

/// Top-level menu entries each role may not see. Roles without a row see
/// the whole menu.
const ROLE_DENYLIST: &[(Role, &[&str])] = &[
    (
        Role::PlatformAdmin,
        &[
            DASHBOARD,
            LEAD_MANAGEMENT,
            PROJECT_MANAGEMENT,
            EMPLOYEE_MANAGEMENT,
            BOOKINGS,
            PARTNERS,
        ],
    ),
    (Role::Builder, &[BUILDERS, QUERIES]),
    (
        Role::ChannelPartner,
        &[EMPLOYEE_MANAGEMENT, PARTNERS, BUILDERS, QUERIES],
    ),
    (Role::SalesManager, &[PARTNERS, BUILDERS, QUERIES]),
    (
        Role::Telecaller,
        &[EMPLOYEE_MANAGEMENT, BOOKINGS, PARTNERS, BUILDERS, QUERIES],
    ),
    (
        Role::MarketingAgent,
        &[EMPLOYEE_MANAGEMENT, BOOKINGS, BUILDERS, QUERIES],
    ),
    (
        Role::Receptionist,
        &[EMPLOYEE_MANAGEMENT, BOOKINGS, PARTNERS, BUILDERS],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    AnyRole,
    Only(&'static [Role]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubItemRule {
    pub parent: &'static str,
    pub item: &'static str,
    pub audience: Audience,
}

// "Add New Lead" has always been shown to every role that can open Lead
// Management. Narrowing it to builders means switching the audience to
// `Audience::Only(&[Role::Builder])`.
const SUB_ITEM_RULES: &[SubItemRule] = &[
    SubItemRule {
        parent: LEAD_MANAGEMENT,
        item: ADD_NEW_LEAD,
        audience: Audience::AnyRole,
    },
    SubItemRule {
        parent: PROJECT_MANAGEMENT,
        item: ADD_PROJECTS,
        audience: Audience::Only(&[Role::Builder]),
    },
];

/// What a `user_type` outside 1..=9 gets to see.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRoleMenu {
    #[default]
    Full,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTable {
    denylist: &'static [(Role, &'static [&'static str])],
    sub_item_rules: &'static [SubItemRule],
    unknown_role: UnknownRoleMenu,
}

impl Default for AccessTable {
    fn default() -> Self {
        Self::new(UnknownRoleMenu::default())
    }
}

impl AccessTable {
    pub fn new(unknown_role: UnknownRoleMenu) -> Self {
        Self {
            denylist: ROLE_DENYLIST,
            sub_item_rules: SUB_ITEM_RULES,
            unknown_role,
        }
    }

    pub fn unknown_role(&self) -> UnknownRoleMenu {
        self.unknown_role
    }

    /// Denied top-level names for a known role; empty when the role has no row.
    pub fn denied_for(&self, role: Role) -> &'static [&'static str] {
        self.denylist
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, names)| *names)
            .unwrap_or(&[])
    }

    pub fn is_top_level_visible(&self, role_code: i32, name: &str) -> bool {
        match Role::from_code(role_code) {
            Some(role) => !self.denied_for(role).iter().any(|denied| *denied == name),
            None => self.unknown_role == UnknownRoleMenu::Full,
        }
    }

    pub fn is_sub_item_visible(&self, role_code: i32, parent: &str, item: &str) -> bool {
        let Some(rule) = self
            .sub_item_rules
            .iter()
            .find(|rule| rule.parent == parent && rule.item == item)
        else {
            return true;
        };
        match rule.audience {
            Audience::AnyRole => true,
            Audience::Only(roles) => Role::from_code(role_code)
                .map(|role| roles.contains(&role))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_role_has_a_distinct_denylist() {
        let table = AccessTable::default();
        let mut seen: Vec<Vec<&str>> = Vec::new();
        for (role, _) in ROLE_DENYLIST {
            let mut names = table.denied_for(*role).to_vec();
            names.sort_unstable();
            assert!(!seen.contains(&names), "duplicate denylist for {:?}", role);
            seen.push(names);
        }
    }

    #[test]
    fn roles_without_a_row_deny_nothing() {
        let table = AccessTable::default();
        assert!(table.denied_for(Role::BusinessDevelopmentExecutive).is_empty());
        assert!(table.denied_for(Role::BusinessDevelopmentManager).is_empty());
    }

    #[test]
    fn unknown_role_policy_controls_top_level_visibility() {
        let allow = AccessTable::new(UnknownRoleMenu::Full);
        let deny = AccessTable::new(UnknownRoleMenu::None);
        assert!(allow.is_top_level_visible(0, DASHBOARD));
        assert!(allow.is_top_level_visible(99, BUILDERS));
        assert!(!deny.is_top_level_visible(0, DASHBOARD));
        assert!(!deny.is_top_level_visible(99, BUILDERS));
        assert!(deny.is_top_level_visible(2, DASHBOARD));
    }

    #[test]
    fn sub_item_rules_only_touch_their_parent() {
        let table = AccessTable::default();
        assert!(!table.is_sub_item_visible(3, PROJECT_MANAGEMENT, ADD_PROJECTS));
        assert!(table.is_sub_item_visible(2, PROJECT_MANAGEMENT, ADD_PROJECTS));
        assert!(table.is_sub_item_visible(3, "Somewhere Else", ADD_PROJECTS));
        assert!(table.is_sub_item_visible(5, LEAD_MANAGEMENT, ADD_NEW_LEAD));
        assert!(!table.is_sub_item_visible(0, PROJECT_MANAGEMENT, ADD_PROJECTS));
    }

    #[test]
    fn unknown_role_menu_parses_from_config_values() {
        let full: UnknownRoleMenu = serde_json::from_str("\"full\"").unwrap();
        let none: UnknownRoleMenu = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(full, UnknownRoleMenu::Full);
        assert_eq!(none, UnknownRoleMenu::None);
    }
}
