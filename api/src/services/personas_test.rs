use super::*;
use crate::test_support::Harness;
use futures::executor::block_on;
use serde_json::{Value, json};

#[test]
fn get_unwraps_persona_key() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(
        200,
        json!({ "success": true, "data": { "persona": {
            "id": "pe1",
            "language_style": "casual",
            "tone": "friendly",
            "topics_interest": ["ai", "automation"],
        } } }),
    );

    let persona = block_on(get(&t)).unwrap();

    assert_eq!(persona.tone, "friendly");
    assert_eq!(persona.topics_interest, vec!["ai".to_owned(), "automation".to_owned()]);
    let sent = t.backend().last_request();
    assert_eq!(sent.method, Method::Get);
    assert_eq!(sent.url, "http://api.test/api/personas");
}

#[test]
fn update_puts_only_set_fields() {
    let h = Harness::new();
    let t = h.transport();
    t.backend().reply(200, json!({ "success": true, "data": { "persona": { "tone": "formal", "topics_interest": null } } }));

    let update_body = PersonaUpdate { tone: Some("formal".to_owned()), ..PersonaUpdate::default() };
    let persona = block_on(update(&t, &update_body)).unwrap();

    assert_eq!(persona.tone, "formal");
    assert!(persona.topics_interest.is_empty());
    let sent = t.backend().last_request();
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.url, "http://api.test/api/personas");
    let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "tone": "formal" }));
}
