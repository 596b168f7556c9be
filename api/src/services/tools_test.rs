use super::*;
use crate::models::tool::ToolStatus;
use crate::test_support::Harness;
use futures::executor::block_on;
use serde_json::{Value, json};

#[test]
fn list_unwraps_tools_key() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(
        200,
        json!({ "success": true, "data": { "tools": [
            { "id": "t1", "request_payload": { "description": "Sync Notion to Sheets" }, "status": "done" },
        ] } }),
    );

    let items = block_on(list(&t)).unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].status, ToolStatus::Done);
    assert_eq!(items[0].description(), Some("Sync Notion to Sheets"));
    assert_eq!(t.backend().last_request().url, "http://api.test/api/tools");
}

#[test]
fn request_nests_description_in_payload() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(
        201,
        json!({ "success": true, "data": { "tool": {
            "id": "t2",
            "request_payload": { "description": "Post RSS items to Slack" },
            "status": "pending",
        } } }),
    );

    let tool = block_on(request(&t, "Post RSS items to Slack")).unwrap();

    assert_eq!(tool.id, "t2");
    let sent = t.backend().last_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "http://api.test/api/tools");
    let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "request_payload": { "description": "Post RSS items to Slack" } }));
}
