use super::*;
use crate::models::product::{ProductType, SortOrder};
use crate::test_support::Harness;
use crate::transport::Method;
use futures::executor::block_on;
use serde_json::{Value, json};

fn product_json(id: &str) -> Value {
    json!({ "id": id, "title": "CRM Sync", "type": "workflow", "isFree": true })
}

// =============================================================
// reads
// =============================================================

#[test]
fn list_sends_filters_and_decodes_page() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(
        200,
        json!({ "success": true, "data": { "products": [product_json("p1")], "total": 1, "limit": 20, "offset": 0 } }),
    );

    let filters = ProductFilters {
        product_type: Some(ProductType::Tool),
        search: Some("crm sync".to_owned()),
        sort_order: Some(SortOrder::Asc),
        ..ProductFilters::default()
    };
    let page = block_on(list(&t, &filters)).unwrap();

    assert_eq!(page.products.len(), 1);
    assert_eq!(page.total, Some(1));
    assert_eq!(
        t.backend().last_request().url,
        "http://api.test/api/products?type=tool&search=crm+sync&sort_order=asc"
    );
}

#[test]
fn featured_unwraps_products_key() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(200, json!({ "success": true, "data": { "products": [product_json("a"), product_json("b")] } }));

    let items = block_on(featured(&t, DEFAULT_FEATURED_LIMIT)).unwrap();

    assert_eq!(items.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(t.backend().last_request().url, "http://api.test/api/products/featured?limit=6");
}

#[test]
fn get_accepts_bare_product_payload() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(200, product_json("p9"));

    let product = block_on(get(&t, "p9")).unwrap();

    assert_eq!(product.id, "p9");
}

#[test]
fn list_mine_passes_include_drafts() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(200, json!({ "success": true, "data": { "products": [] } }));

    let items = block_on(list_mine(&t, true)).unwrap();

    assert!(items.is_empty());
    assert_eq!(t.backend().last_request().url, "http://api.test/api/products/my?include_drafts=true");
}

// =============================================================
// writes
// =============================================================

#[test]
fn create_sends_normalized_snake_case_body() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(201, json!({ "success": true, "data": { "product": product_json("new") } }));

    let draft = ProductDraft {
        title: "CRM Sync".to_owned(),
        description: "Syncs contacts between tools".to_owned(),
        thumbnail_url: Some("   ".to_owned()),
        ..ProductDraft::default()
    };
    let product = block_on(create(&t, &draft)).unwrap();

    assert_eq!(product.id, "new");
    let sent = t.backend().last_request();
    assert_eq!(sent.method, Method::Post);
    let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["is_free"], true);
    assert!(body.get("thumbnail_url").is_none());
}

#[test]
fn create_surfaces_backend_validation_details() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(
        400,
        json!({
            "error": true,
            "code": "VALIDATION_ERROR",
            "message": "Invalid product",
            "details": [{ "path": ["title"], "message": "Title too short" }],
        }),
    );

    let err = block_on(create(&t, &ProductDraft::default())).unwrap_err();

    assert_eq!(err.code, "VALIDATION_ERROR");
    assert_eq!(err.field_errors()["title"], "Title too short");
}

#[test]
fn decode_failure_reports_actual_status() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(201, json!({ "success": true, "data": { "product": "not a product" } }));

    let err = block_on(create(&t, &ProductDraft::default())).unwrap_err();

    assert_eq!(err.code, crate::error::DECODE_ERROR);
    assert_eq!(err.status, Some(201));
}

#[test]
fn publish_and_delete_hit_resource_paths() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(200, json!({ "success": true, "data": { "product": product_json("p1") } }));
    t.backend().reply(200, json!({ "success": true, "data": null }));

    block_on(publish(&t, "p1")).unwrap();
    block_on(delete(&t, "p1")).unwrap();

    let requests = t.backend().requests();
    assert_eq!(requests[0].url, "http://api.test/api/products/p1/publish");
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].url, "http://api.test/api/products/p1");
}

#[test]
fn update_sends_only_changed_fields() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(200, json!({ "success": true, "data": { "product": product_json("p1") } }));

    let patch = ProductPatch { title: Some("Renamed".to_owned()), ..ProductPatch::default() };
    block_on(update(&t, "p1", &patch)).unwrap();

    let sent = t.backend().last_request();
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.body.as_deref(), Some(r#"{"title":"Renamed"}"#));
}
