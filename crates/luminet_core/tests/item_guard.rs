use luminet_core::{
    load_items_from_path, load_items_from_str, narrow_item, IngestError, ItemGuardError,
};
use serde_json::json;
use std::io::Write;

#[test]
fn narrows_full_record() {
    let value = json!({
        "id": "idea-1",
        "user_id": "user-a",
        "content": "Urban beekeeping",
        "keywords": ["Bees", "Urban"],
        "created_at": "2024-05-01T10:00:00Z"
    });

    let item = narrow_item(&value).unwrap();
    assert_eq!(item.id, "idea-1");
    assert_eq!(item.author_id.as_deref(), Some("user-a"));
    assert_eq!(item.content, "Urban beekeeping");
    assert_eq!(
        item.keywords,
        Some(vec!["Bees".to_string(), "Urban".to_string()])
    );
}

#[test]
fn null_and_missing_fields_degrade_gracefully() {
    let item = narrow_item(&json!({ "id": 7, "user_id": null, "keywords": null })).unwrap();
    assert_eq!(item.id, "7");
    assert_eq!(item.author_id, None);
    assert_eq!(item.content, "");
    assert_eq!(item.keywords, None);
}

#[test]
fn malformed_keywords_are_treated_as_absent() {
    let item = narrow_item(&json!({
        "id": "1",
        "user_id": "u",
        "content": "text",
        "keywords": "solar,wind"
    }))
    .unwrap();
    assert_eq!(item.keywords, None);

    let mixed = narrow_item(&json!({
        "id": "2",
        "user_id": "u",
        "keywords": ["solar", 3, null, "wind"]
    }))
    .unwrap();
    assert_eq!(
        mixed.keywords,
        Some(vec!["solar".to_string(), "wind".to_string()])
    );
}

#[test]
fn author_id_field_is_accepted_as_alias() {
    let item = narrow_item(&json!({ "id": "1", "author_id": "writer" })).unwrap();
    assert_eq!(item.author_id.as_deref(), Some("writer"));
}

#[test]
fn rejects_records_without_identity_or_with_wrong_types() {
    assert_eq!(
        narrow_item(&json!(["not", "an", "object"])).unwrap_err(),
        ItemGuardError::NotAnObject
    );
    assert_eq!(
        narrow_item(&json!({ "user_id": "u" })).unwrap_err(),
        ItemGuardError::MissingId
    );
    assert_eq!(
        narrow_item(&json!({ "id": "  " })).unwrap_err(),
        ItemGuardError::MissingId
    );
    assert_eq!(
        narrow_item(&json!({ "id": "1", "content": 12 })).unwrap_err(),
        ItemGuardError::InvalidField {
            field: "content",
            expected: "a string",
        }
    );
    assert_eq!(
        narrow_item(&json!({ "id": "1", "user_id": 99 })).unwrap_err(),
        ItemGuardError::InvalidField {
            field: "user_id",
            expected: "a string",
        }
    );
}

#[test]
fn batch_skips_bad_records_and_counts_them() {
    let batch = load_items_from_str(
        r#"[
            {"id": "1", "user_id": "a", "content": "first"},
            {"user_id": "b"},
            42,
            {"id": "2", "user_id": "b", "content": "second"}
        ]"#,
    )
    .unwrap();

    assert_eq!(batch.rejected, 2);
    let ids = batch
        .items
        .iter()
        .map(|item| item.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn batch_requires_top_level_array() {
    let err = load_items_from_str(r#"{"id": "1"}"#).unwrap_err();
    assert!(matches!(err, IngestError::NotAnArray));

    let err = load_items_from_str("not json").unwrap_err();
    assert!(matches!(err, IngestError::Json(_)));
}

#[test]
fn loads_items_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": "1", "user_id": "a", "content": "Solar gardens", "keywords": ["solar"]}}]"#
    )
    .unwrap();

    let batch = load_items_from_path(file.path()).unwrap();
    assert_eq!(batch.items.len(), 1);
    assert_eq!(batch.rejected, 0);
    assert_eq!(batch.items[0].keywords, Some(vec!["solar".to_string()]));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_items_from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, IngestError::Io(_)));
}
