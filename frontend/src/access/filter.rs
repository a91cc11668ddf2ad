use super::nav::NavItem;
use super::table::AccessTable;

/// Derives the menu a role may see. `tree` is left untouched; the result keeps
/// the input order and never repeats an entry.
pub fn filter_nav(tree: &[NavItem], role_code: i32, table: &AccessTable) -> Vec<NavItem> {
    tree.iter()
        .filter(|item| table.is_top_level_visible(role_code, item.name))
        .map(|item| NavItem {
            name: item.name,
            path: item.path,
            sub_items: item
                .sub_items
                .iter()
                .filter(|sub| table.is_sub_item_visible(role_code, item.name, sub.name))
                .cloned()
                .collect(),
        })
        .collect()
}
