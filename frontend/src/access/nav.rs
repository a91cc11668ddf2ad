use std::sync::OnceLock;

pub const DASHBOARD: &str = "Dashboard";
pub const LEAD_MANAGEMENT: &str = "Lead Management";
pub const PROJECT_MANAGEMENT: &str = "Project Management";
pub const EMPLOYEE_MANAGEMENT: &str = "Employee Management";
pub const BOOKINGS: &str = "Bookings";
pub const PARTNERS: &str = "Partners";
pub const BUILDERS: &str = "Builders";
pub const QUERIES: &str = "Queries";
pub const SUPPORT: &str = "Support";
pub const PROFILE: &str = "Profile";

pub const ADD_NEW_LEAD: &str = "Add New Lead";
pub const ADD_PROJECTS: &str = "Add Projects";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: Option<&'static str>,
    pub sub_items: Vec<NavItem>,
}

impl NavItem {
    pub fn link(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path: Some(path),
            sub_items: Vec::new(),
        }
    }

    pub fn group(name: &'static str, sub_items: Vec<NavItem>) -> Self {
        Self {
            name,
            path: None,
            sub_items,
        }
    }

    fn walk<'a>(&'a self, out: &mut Vec<&'a NavItem>) {
        out.push(self);
        for child in &self.sub_items {
            child.walk(out);
        }
    }
}

fn build_nav_tree() -> Vec<NavItem> {
    vec![
        NavItem::link(DASHBOARD, "/dashboard"),
        NavItem::group(
            LEAD_MANAGEMENT,
            vec![
                NavItem::link("All Leads", "/leads"),
                NavItem::link(ADD_NEW_LEAD, "/leads/new"),
                NavItem::link("Assigned Leads", "/leads/assigned"),
            ],
        ),
        NavItem::group(
            PROJECT_MANAGEMENT,
            vec![
                NavItem::link("All Projects", "/projects"),
                NavItem::link(ADD_PROJECTS, "/projects/new"),
                NavItem::group(
                    "Location",
                    vec![
                        NavItem::link("Cities", "/locations/cities"),
                        NavItem::link("Localities", "/locations/localities"),
                    ],
                ),
            ],
        ),
        NavItem::group(
            EMPLOYEE_MANAGEMENT,
            vec![
                NavItem::link("All Employees", "/employees"),
                NavItem::link("Add Employee", "/employees/new"),
            ],
        ),
        NavItem::link(BOOKINGS, "/bookings"),
        NavItem::group(
            PARTNERS,
            vec![
                NavItem::link("Channel Partner List", "/partners"),
                NavItem::link("Partner Requests", "/partners/requests"),
            ],
        ),
        NavItem::link(BUILDERS, "/builders"),
        NavItem::link(QUERIES, "/queries"),
        NavItem::group(
            SUPPORT,
            vec![
                NavItem::link("Tickets", "/support"),
                NavItem::link("Raise Ticket", "/support/new"),
            ],
        ),
        NavItem::link(PROFILE, "/profile"),
    ]
}

/// The complete admin menu, built once and shared read-only.
pub fn nav_tree() -> &'static [NavItem] {
    static TREE: OnceLock<Vec<NavItem>> = OnceLock::new();
    TREE.get_or_init(build_nav_tree)
}

/// Depth-first, pre-order flattening of `items`.
pub fn flatten(items: &[NavItem]) -> Vec<&NavItem> {
    let mut out = Vec::new();
    for item in items {
        item.walk(&mut out);
    }
    out
}

pub fn find_by_path<'a>(items: &'a [NavItem], path: &str) -> Option<&'a NavItem> {
    let path = path.trim_end_matches('/');
    flatten(items).into_iter().find(|item| item.path == Some(path))
}
