use crate::{
    access::nav::{
        NavItem, BOOKINGS, BUILDERS, EMPLOYEE_MANAGEMENT, LEAD_MANAGEMENT, PARTNERS,
        PROJECT_MANAGEMENT, QUERIES, SUPPORT,
    },
    api::DashboardCounts,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountCard {
    pub label: &'static str,
    pub href: &'static str,
    pub value: u64,
}

/// One card per count whose owning section survives the role's menu filter.
pub fn visible_cards(counts: &DashboardCounts, menu: &[NavItem]) -> Vec<CountCard> {
    let candidates = [
        (LEAD_MANAGEMENT, "Leads", "/leads", counts.leads),
        (PROJECT_MANAGEMENT, "Projects", "/projects", counts.projects),
        (EMPLOYEE_MANAGEMENT, "Employees", "/employees", counts.employees),
        (BOOKINGS, "Bookings", "/bookings", counts.bookings),
        (PARTNERS, "Channel Partners", "/partners", counts.partners),
        (BUILDERS, "Builders", "/builders", counts.builders),
        (QUERIES, "Queries", "/queries", counts.queries),
        (SUPPORT, "Support Tickets", "/support", counts.tickets),
    ];
    candidates
        .into_iter()
        .filter(|(section, ..)| menu.iter().any(|item| item.name == *section))
        .map(|(_, label, href, value)| CountCard { label, href, value })
        .collect()
}

pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
