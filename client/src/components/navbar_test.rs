use super::*;

#[test]
fn regular_users_see_sections_only() {
    let labels: Vec<&str> = nav_items(false).iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["Problems", "Compete", "Blogs"]);
}

#[test]
fn admins_also_see_admin_links() {
    let hrefs: Vec<&str> = nav_items(true).iter().map(|i| i.href).collect();
    assert_eq!(hrefs, vec!["/get-problem", "/contest", "/blog", "/problem/new", "/admin"]);
}

#[test]
fn active_on_exact_and_nested_paths() {
    assert!(is_active("/get-problem", "/get-problem"));
    assert!(is_active("/get-problem/abc", "/get-problem"));
}

#[test]
fn not_active_on_sibling_prefix() {
    assert!(!is_active("/get-problems", "/get-problem"));
    assert!(!is_active("/", "/blog"));
}
