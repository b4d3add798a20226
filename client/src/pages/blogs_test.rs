use super::*;

#[test]
fn three_static_entries_in_display_order() {
    let titles: Vec<_> = BLOGS.iter().map(|b| b.title).collect();
    assert_eq!(titles, ["Two Sum", "Coin Change", "Cumulative Sum"]);
}

#[test]
fn entries_link_to_external_https_pages() {
    assert!(BLOGS.iter().all(|b| b.href.starts_with("https://")));
}

#[test]
fn view_counts_match_listing() {
    let views: Vec<_> = BLOGS.iter().map(|b| b.views).collect();
    assert_eq!(views, [525, 201, 652]);
}
