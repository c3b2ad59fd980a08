//! Grouping by a named field of a serializable record.

use super::Groups;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors from [`group_by_field`].
#[derive(Debug, Error)]
pub enum GroupingError {
    #[error("Record could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Record is not a keyed object, cannot read field '{field}'")]
    NotARecord { field: String },
}

/// Group records by the value of `field`, the shorthand for
/// `group_by(items, |item| item.field)`.
///
/// String values are used as-is, other scalars by their JSON text
/// (`1`, `true`). A record without the field is grouped under `""`.
///
/// # Example
///
/// ```rust
/// use address_book::core::{Contact, ContactStatus};
/// use address_book::grouping::group_by_field;
///
/// let contacts = vec![
///     Contact::blank(1, ContactStatus::Work),
///     Contact::blank(2, ContactStatus::Private),
///     Contact::blank(3, ContactStatus::Work),
/// ];
///
/// let groups = group_by_field(contacts, "status").unwrap();
/// assert_eq!(groups.get("Work").map(Vec::len), Some(2));
/// ```
pub fn group_by_field<I>(items: I, field: &str) -> Result<Groups<String, I::Item>, GroupingError>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let mut groups = Groups::new();
    for item in items {
        let key = field_key(&item, field)?;
        groups.push(key, item);
    }
    Ok(groups)
}

fn field_key<T: Serialize>(item: &T, field: &str) -> Result<String, GroupingError> {
    let Value::Object(map) = serde_json::to_value(item)? else {
        return Err(GroupingError::NotARecord {
            field: field.to_string(),
        });
    };

    Ok(match map.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    })
}
