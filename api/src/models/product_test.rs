use super::*;
use serde_json::json;

// =============================================================
// Product decoding
// =============================================================

#[test]
fn decodes_camel_case_dto() {
    let p: Product = serde_json::from_value(json!({
        "id": "p1",
        "title": "CRM Sync",
        "description": "Keeps contacts in sync",
        "longDescription": "Long form",
        "type": "tool",
        "tags": ["crm"],
        "isFree": false,
        "price": 12.5,
        "workflowFileUrl": "https://files.test/wf.json",
        "downloads": 40,
        "status": "published",
    }))
    .unwrap();
    assert_eq!(p.product_type, ProductType::Tool);
    assert_eq!(p.long_description.as_deref(), Some("Long form"));
    assert!(!p.is_free);
    assert_eq!(p.price, Some(12.5));
    assert_eq!(p.workflow_file_url.as_deref(), Some("https://files.test/wf.json"));
    assert_eq!(p.status, Some(ProductStatus::Published));
}

#[test]
fn decodes_snake_case_and_nulls() {
    let p: Product = serde_json::from_value(json!({
        "id": "p2",
        "title": null,
        "is_free": true,
        "thumbnail_url": "https://img.test/t.png",
        "tags": null,
        "type": "mystery",
    }))
    .unwrap();
    assert_eq!(p.title, "");
    assert!(p.tags.is_empty());
    assert_eq!(p.thumbnail_url.as_deref(), Some("https://img.test/t.png"));
    assert_eq!(p.product_type, ProductType::Unknown);
}

#[test]
fn missing_is_free_defaults_to_free() {
    let p: Product = serde_json::from_value(json!({ "id": "p3" })).unwrap();
    assert!(p.is_free);
}

// =============================================================
// ProductFilters
// =============================================================

#[test]
fn empty_filters_produce_no_query() {
    assert!(ProductFilters::default().to_query().is_empty());
}

#[test]
fn filters_skip_zero_and_empty_values() {
    let filters = ProductFilters {
        product_type: Some(ProductType::Workflow),
        search: Some(String::new()),
        tags: vec!["ai".to_owned(), "crm".to_owned()],
        limit: Some(0),
        offset: Some(20),
        sort_by: Some("downloads".to_owned()),
        sort_order: Some(SortOrder::Desc),
    };
    let query = filters.to_query();
    let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["type", "tags", "offset", "sort_by", "sort_order"]);
    assert_eq!(query[1].1, "ai,crm");
}

// =============================================================
// ProductDraft
// =============================================================

fn complete_draft() -> ProductDraft {
    ProductDraft {
        title: "CRM Sync".to_owned(),
        description: "Syncs contacts between tools".to_owned(),
        workflow_file_url: Some("https://files.test/wf.json".to_owned()),
        thumbnail_url: Some("https://img.test/t.png".to_owned()),
        ..ProductDraft::default()
    }
}

#[test]
fn draft_serializes_snake_case_without_absent_fields() {
    let value = serde_json::to_value(complete_draft()).unwrap();
    assert_eq!(value["type"], "workflow");
    assert_eq!(value["is_free"], true);
    assert_eq!(value["workflow_file_url"], "https://files.test/wf.json");
    assert!(value.get("price").is_none());
    assert!(value.get("long_description").is_none());
}

#[test]
fn normalized_drops_blank_optionals() {
    let draft = ProductDraft {
        version: Some("  ".to_owned()),
        install_guide: Some(" run it ".to_owned()),
        ..complete_draft()
    }
    .normalized();
    assert!(draft.version.is_none());
    assert_eq!(draft.install_guide.as_deref(), Some("run it"));
}

#[test]
fn lenient_validation_only_checks_urls() {
    let draft = ProductDraft { thumbnail_url: Some("not a url".to_owned()), ..ProductDraft::default() };
    let errors = draft.validate(false).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("thumbnail_url"));
}

#[test]
fn strict_validation_requires_publish_fields() {
    let draft = ProductDraft { title: "ab".to_owned(), is_free: false, ..ProductDraft::default() };
    let errors = draft.validate(true).unwrap_err();
    assert_eq!(errors["title"], "Title must be at least 3 characters");
    assert_eq!(errors["description"], "Description is required");
    assert!(errors.contains_key("price"));
}

#[test]
fn complete_draft_passes_strict_validation() {
    assert_eq!(complete_draft().validate(true), Ok(()));
    assert!(complete_draft().missing_fields().is_empty());
}

#[test]
fn too_many_tags_rejected() {
    let draft = ProductDraft { tags: (0..11).map(|i| format!("t{i}")).collect(), ..complete_draft() };
    assert!(draft.validate(false).unwrap_err().contains_key("tags"));
}

#[test]
fn missing_fields_lists_publish_blockers() {
    let draft = ProductDraft { is_free: false, price: Some(0.0), ..ProductDraft::default() };
    assert_eq!(
        draft.missing_fields(),
        vec!["Title", "Description", "Workflow file URL", "Thumbnail URL", "Price"]
    );
}

#[test]
fn tool_drafts_do_not_need_a_workflow_file() {
    let draft = ProductDraft { product_type: ProductType::Tool, workflow_file_url: None, ..complete_draft() };
    assert!(draft.missing_fields().is_empty());
}

#[test]
fn url_pattern_accepts_http_and_https_only() {
    assert!(is_valid_url("https://example.test/a?b=c"));
    assert!(is_valid_url("HTTP://example.test"));
    assert!(!is_valid_url("ftp://example.test"));
    assert!(!is_valid_url("https://"));
    assert!(!is_valid_url("https://exa mple.test"));
}

// =============================================================
// ProductPatch
// =============================================================

#[test]
fn patch_sends_only_set_fields() {
    let patch = ProductPatch { price: Some(9.0), is_free: Some(false), ..ProductPatch::default() };
    assert_eq!(serde_json::to_value(patch).unwrap(), json!({ "price": 9.0, "is_free": false }));
}
