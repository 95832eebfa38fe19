use super::*;

// =============================================================
// Website filtering
// =============================================================

#[test]
fn empty_query_returns_everything() {
    let sites = mock_websites();
    assert_eq!(filter_websites(&sites, ""), sites);
    assert_eq!(filter_websites(&sites, "   "), sites);
}

#[test]
fn website_search_matches_name_case_insensitively() {
    let sites = mock_websites();
    let hits = filter_websites(&sites, "BLOG");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Company Blog");
}

#[test]
fn website_search_matches_url() {
    let hits = filter_websites(&mock_websites(), "support.example");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "3");
}

#[test]
fn website_search_can_return_nothing() {
    assert!(filter_websites(&mock_websites(), "zzz").is_empty());
}

#[test]
fn find_website_by_id() {
    assert_eq!(find_website("2").map(|s| s.name), Some("Company Blog"));
    assert!(find_website("nope").is_none());
}

// =============================================================
// Content filtering
// =============================================================

#[test]
fn content_filter_by_status_only() {
    let items = mock_content();
    let drafts = filter_content(&items, "", Some(ContentStatus::Draft));
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].title, "Premium Plan");
}

#[test]
fn content_filter_combines_query_and_status() {
    let items = mock_content();
    let hits = filter_content(&items, "guide", Some(ContentStatus::Published));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "c1");

    assert!(filter_content(&items, "guide", Some(ContentStatus::Archived)).is_empty());
}

#[test]
fn content_query_searches_preview_text() {
    let hits = filter_content(&mock_content(), "return handling", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "c2");
}

// =============================================================
// Page filtering
// =============================================================

#[test]
fn page_search_matches_title_and_url() {
    let pages = mock_pages();
    assert_eq!(filter_pages(&pages, "pricing").len(), 1);
    assert_eq!(filter_pages(&pages, "/landing").len(), 1);
    assert_eq!(filter_pages(&pages, "").len(), pages.len());
}

// =============================================================
// Credit packages
// =============================================================

#[test]
fn credit_packages_offer_exactly_one_popular_tier() {
    let packages = credit_packages();
    assert_eq!(packages.len(), 3);
    assert_eq!(packages.iter().filter(|p| p.popular).count(), 1);
    assert_eq!(packages.iter().find(|p| p.popular).map(|p| p.name), Some("Professional"));
}

#[test]
fn credit_packages_scale_credits_with_price() {
    let packages = credit_packages();
    for pair in packages.windows(2) {
        assert!(pair[0].credits < pair[1].credits);
        assert!(pair[0].price < pair[1].price);
    }
}

#[test]
fn status_labels_are_human_readable() {
    assert_eq!(WebsiteStatus::Maintenance.label(), "Maintenance");
    assert_eq!(ContentStatus::Published.label(), "Published");
    assert_eq!(ScanStatus::NotIndexed.label(), "Not indexed");
}
