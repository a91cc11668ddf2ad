//! Role-based visibility of the admin navigation.

pub mod filter;
pub mod nav;
pub mod role;
pub mod table;

pub use filter::filter_nav;
pub use nav::{nav_tree, NavItem};
pub use role::Role;
pub use table::{AccessTable, UnknownRoleMenu};
