//! End-to-end scenarios through the public filter surface: a site configured
//! with an http base URL served over https, and the reverse.

use httpsify::{current_request_url, RequestState, SiteConfig, SiteFilters};
use serde_json::{json, Map, Value};

fn site(force_admin_https: bool) -> SiteConfig {
    SiteConfig {
        home_url: "http://example.com".to_string(),
        force_admin_https,
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn https_page_view_rewrites_everything_to_https() {
    let filters = SiteFilters::new(site(false), RequestState::new(true, false));

    assert_eq!(
        filters.home_url("http://example.com"),
        "https://example.com"
    );
    assert_eq!(
        filters.attachment_url("http://example.com/wp-content/cat.jpg"),
        "https://example.com/wp-content/cat.jpg"
    );

    let content = "<p>read <a href='http://example.com/page'>this</a> \
                   or <a href='http://other.example.net/'>that</a></p>";
    assert_eq!(
        filters.render(content),
        "<p>read <a href='https://example.com/page'>this</a> \
         or <a href='http://other.example.net/'>that</a></p>"
    );
}

#[test]
fn http_page_view_downgrades_rendered_links() {
    let filters = SiteFilters::new(site(false), RequestState::new(false, false));

    // Rendered text follows the transport, so https links to the site itself
    // come back down to http.
    assert_eq!(
        filters.render("<a href='https://example.com/page'>x</a>"),
        "<a href='http://example.com/page'>x</a>"
    );

    // The public base URL does not: it is forced to https regardless.
    assert_eq!(
        filters.home_url("http://example.com"),
        "https://example.com"
    );
}

#[test]
fn admin_request_skips_rendered_text() {
    let filters = SiteFilters::new(site(true), RequestState::new(true, true));

    let text = "<a href='http://example.com/page'>x</a>";
    assert_eq!(filters.render(text), text);

    // Admin option keys are still enforced when the flag is on.
    assert_eq!(
        filters.admin_option_url("http://example.com/wp-admin"),
        "https://example.com/wp-admin"
    );
}

#[test]
fn admin_options_untouched_without_flag() {
    let filters = SiteFilters::new(site(false), RequestState::new(true, true));
    assert_eq!(
        filters.admin_option_url("http://example.com"),
        "http://example.com"
    );
}

#[test]
fn saving_a_post_pins_the_guid_to_https() {
    let filters = SiteFilters::new(site(false), RequestState::new(false, false));

    let record = object(json!({
        "guid": "http://example.com/?p=1",
        "post_title": "hello",
        "post_content": "<a href='http://example.com/other'>link</a>"
    }));
    let saved = filters.pre_persist_record(record);

    assert_eq!(saved["guid"], json!("https://example.com/?p=1"));
    // Only the guid changes at save time; content is a render-time concern.
    assert_eq!(
        saved["post_content"],
        json!("<a href='http://example.com/other'>link</a>")
    );
}

#[test]
fn record_without_guid_is_untouched() {
    let filters = SiteFilters::new(site(false), RequestState::new(true, false));
    let record = object(json!({"post_title": "no guid here"}));
    let saved = filters.pre_persist_record(record.clone());
    assert_eq!(saved, record);
}

#[test]
fn current_request_url_composes_from_parts() {
    assert_eq!(
        current_request_url("example.com", "/archive?page=2", true),
        "https://example.com/archive?page=2"
    );
}

#[test]
fn rewrites_survive_repeated_filtering() {
    // Hooks can fire more than once on the same value; the result must be
    // stable.
    let filters = SiteFilters::new(site(true), RequestState::new(true, false));
    let once = filters.home_url("http://example.com/blog");
    assert_eq!(filters.home_url(&once), once);

    let text_once = filters.render("see http://example.com/a and http://example.com/b");
    assert_eq!(filters.render(&text_once), text_once);
    assert_eq!(text_once, "see https://example.com/a and https://example.com/b");
}
