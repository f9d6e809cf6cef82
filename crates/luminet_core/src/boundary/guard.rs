//! Narrowing of untyped external records into `Item`s.
//!
//! # Responsibility
//! - Validate the JSON shape returned by the hosted data store once, at the
//!   edge, so scoring code only sees typed `Item`s.
//! - Load item batches from JSON text or files.
//!
//! # Invariants
//! - `id` is required; string and integer ids are accepted.
//! - Author is read from `user_id`, then `author_id`; null or blank means none.
//! - Missing/null `content` becomes an empty string.
//! - Malformed `keywords` are treated as absent; non-string entries are
//!   skipped.
//! - One bad record never fails a batch; it is counted and logged without
//!   its content.

use crate::model::item::Item;
use log::{info, warn};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Rejection reason for one external record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemGuardError {
    /// Record is not a JSON object.
    NotAnObject,
    /// Record has no usable `id`.
    MissingId,
    /// Field exists with an unsupported JSON type.
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

impl Display for ItemGuardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "item record must be a JSON object"),
            Self::MissingId => write!(f, "item record is missing `id`"),
            Self::InvalidField { field, expected } => {
                write!(f, "item field `{field}` must be {expected}")
            }
        }
    }
}

impl Error for ItemGuardError {}

/// Batch loading failure.
#[derive(Debug)]
pub enum IngestError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Top-level JSON value is not an array of records.
    NotAnArray,
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read items: {err}"),
            Self::Json(err) => write!(f, "failed to parse items: {err}"),
            Self::NotAnArray => write!(f, "items document must be a JSON array"),
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::NotAnArray => None,
        }
    }
}

impl From<std::io::Error> for IngestError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Items accepted from one batch plus the number of rejected records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemBatch {
    pub items: Vec<Item>,
    pub rejected: usize,
}

/// Narrows one external record into an `Item`.
pub fn narrow_item(value: &Value) -> Result<Item, ItemGuardError> {
    let record = value.as_object().ok_or(ItemGuardError::NotAnObject)?;

    let id = read_id(record)?;
    let author_id = read_author(record)?;
    let content = match record.get("content") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(_) => {
            return Err(ItemGuardError::InvalidField {
                field: "content",
                expected: "a string",
            })
        }
    };
    let keywords = match record.get("keywords") {
        Some(Value::Array(entries)) => Some(
            entries
                .iter()
                .filter_map(|entry| entry.as_str().map(str::to_string))
                .collect(),
        ),
        _ => None,
    };

    Ok(Item {
        id,
        author_id,
        content,
        keywords,
    })
}

/// Narrows every record of a JSON array, skipping invalid ones.
pub fn narrow_items(values: &[Value]) -> ItemBatch {
    let mut batch = ItemBatch::default();
    for (index, value) in values.iter().enumerate() {
        match narrow_item(value) {
            Ok(item) => batch.items.push(item),
            Err(err) => {
                warn!(
                    "event=item_rejected module=boundary status=error index={} reason={}",
                    index, err
                );
                batch.rejected += 1;
            }
        }
    }
    batch
}

/// Parses a JSON array document into items.
pub fn load_items_from_str(json: &str) -> Result<ItemBatch, IngestError> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Array(values) = document else {
        return Err(IngestError::NotAnArray);
    };

    let batch = narrow_items(&values);
    info!(
        "event=items_load module=boundary status=ok accepted={} rejected={}",
        batch.items.len(),
        batch.rejected
    );
    Ok(batch)
}

/// Reads and parses a JSON array document from disk.
pub fn load_items_from_path(path: impl AsRef<Path>) -> Result<ItemBatch, IngestError> {
    let text = std::fs::read_to_string(path)?;
    load_items_from_str(text.as_str())
}

fn read_id(record: &Map<String, Value>) -> Result<String, ItemGuardError> {
    match record.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => Ok(id.trim().to_string()),
        Some(Value::Number(id)) if id.is_i64() || id.is_u64() => Ok(id.to_string()),
        Some(Value::String(_)) | Some(Value::Null) | None => Err(ItemGuardError::MissingId),
        Some(_) => Err(ItemGuardError::InvalidField {
            field: "id",
            expected: "a string or integer",
        }),
    }
}

fn read_author(record: &Map<String, Value>) -> Result<Option<String>, ItemGuardError> {
    for field in ["user_id", "author_id"] {
        match record.get(field) {
            None | Some(Value::Null) => continue,
            Some(Value::String(author)) => {
                let trimmed = author.trim();
                if trimmed.is_empty() {
                    continue;
                }
                return Ok(Some(trimmed.to_string()));
            }
            Some(_) => {
                return Err(ItemGuardError::InvalidField {
                    field,
                    expected: "a string",
                })
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::{read_author, read_id, ItemGuardError};
    use serde_json::json;

    #[test]
    fn integer_ids_are_stringified() {
        let value = json!({ "id": 42 });
        let record = value.as_object().expect("object");
        assert_eq!(read_id(record).expect("integer id"), "42");
    }

    #[test]
    fn float_ids_are_rejected() {
        let value = json!({ "id": 1.5 });
        let record = value.as_object().expect("object");
        assert!(matches!(
            read_id(record),
            Err(ItemGuardError::InvalidField { field: "id", .. })
        ));
    }

    #[test]
    fn author_falls_back_to_author_id_when_user_id_blank() {
        let value = json!({ "user_id": "  ", "author_id": "u-2" });
        let record = value.as_object().expect("object");
        assert_eq!(
            read_author(record).expect("author"),
            Some("u-2".to_string())
        );
    }
}
