use super::*;
use serde_json::json;

#[test]
fn decodes_schedule_with_defaults() {
    let s: Schedule = serde_json::from_value(json!({
        "id": "s1",
        "source_type": "rss",
        "source_value": "https://feed.test/rss",
        "frequency": "hourly",
        "next_fetch": "2025-01-01T00:00:00Z",
    }))
    .unwrap();
    assert_eq!(s.source_type, SourceType::Rss);
    assert_eq!(s.frequency, Frequency::Hourly);
    assert!(s.active);
    assert!(s.last_fetched.is_none());
}

#[test]
fn accepts_legacy_article_url_field() {
    let s: Schedule =
        serde_json::from_value(json!({ "id": "s2", "article_url": "https://a.test", "frequency": "weekly" })).unwrap();
    assert_eq!(s.source_value, "https://a.test");
    assert_eq!(s.source_type, SourceType::Url);
}

#[test]
fn parses_cli_spellings() {
    assert_eq!("RSS".parse::<SourceType>(), Ok(SourceType::Rss));
    assert_eq!(" monthly ".parse::<Frequency>(), Ok(Frequency::Monthly));
    assert!("yearly".parse::<Frequency>().is_err());
}

#[test]
fn new_schedule_requires_source() {
    let blank = NewSchedule { source_type: SourceType::File, source_value: "  ".to_owned(), frequency: Frequency::Daily };
    assert_eq!(blank.validate(), Err("A file source is required".to_owned()));
}

#[test]
fn patch_serializes_set_fields_only() {
    let patch = SchedulePatch { active: Some(false), ..SchedulePatch::default() };
    assert_eq!(serde_json::to_value(patch).unwrap(), json!({ "active": false }));
}
