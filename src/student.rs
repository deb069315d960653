//! Student entity and request payloads.

use crate::error::AppError;
use serde::{Deserialize, Deserializer, Serialize};

/// Column width of `name` and `major` (VARCHAR(50)).
pub const MAX_FIELD_LEN: usize = 50;

/// One row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub major: Option<String>,
}

/// Create payload. `name` and `age` must be present; a body without them
/// fails deserialization and never reaches the datastore.
#[derive(Debug, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    #[serde(default)]
    pub major: Option<String>,
}

/// Update payload. Every field is optional; omitted fields keep their
/// stored value. `major` is doubly optional so an explicit `"major": null`
/// (clear) is distinct from leaving the key out (keep).
#[derive(Debug, Default, Deserialize)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    #[serde(default, deserialize_with = "some_nullable")]
    pub major: Option<Option<String>>,
}

fn some_nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl NewStudent {
    pub fn validate(&self) -> Result<(), AppError> {
        check_name(&self.name)?;
        check_age(self.age)?;
        if let Some(major) = &self.major {
            check_major(major)?;
        }
        Ok(())
    }
}

impl StudentUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            check_name(name)?;
        }
        if let Some(age) = self.age {
            check_age(age)?;
        }
        if let Some(Some(major)) = &self.major {
            check_major(major)?;
        }
        Ok(())
    }

    /// Merge into the stored record: supplied fields overwrite, omitted
    /// fields survive unchanged. `id` is immutable.
    pub fn apply(self, current: Student) -> Student {
        Student {
            id: current.id,
            name: self.name.unwrap_or(current.name),
            age: self.age.unwrap_or(current.age),
            major: self.major.unwrap_or(current.major),
        }
    }
}

fn check_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    if name.len() > MAX_FIELD_LEN {
        return Err(AppError::Validation(format!(
            "name must be at most {} characters",
            MAX_FIELD_LEN
        )));
    }
    Ok(())
}

fn check_age(age: i32) -> Result<(), AppError> {
    if age < 0 {
        return Err(AppError::Validation("age must not be negative".into()));
    }
    Ok(())
}

fn check_major(major: &str) -> Result<(), AppError> {
    if major.len() > MAX_FIELD_LEN {
        return Err(AppError::Validation(format!(
            "major must be at most {} characters",
            MAX_FIELD_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored() -> Student {
        Student {
            id: 1,
            name: "Alice Smith".into(),
            age: 21,
            major: Some("Physics".into()),
        }
    }

    #[test]
    fn new_student_requires_name_and_age() {
        assert!(serde_json::from_value::<NewStudent>(json!({"name": "Bob"})).is_err());
        assert!(serde_json::from_value::<NewStudent>(json!({"age": 20})).is_err());
        let ok: NewStudent =
            serde_json::from_value(json!({"name": "Bob", "age": 20})).unwrap();
        assert_eq!(ok.major, None);
    }

    #[test]
    fn validation_rejects_empty_and_oversized_fields() {
        let blank = NewStudent {
            name: "  ".into(),
            age: 20,
            major: None,
        };
        assert!(blank.validate().is_err());

        let long = NewStudent {
            name: "x".repeat(MAX_FIELD_LEN + 1),
            age: 20,
            major: None,
        };
        assert!(long.validate().is_err());

        let negative = NewStudent {
            name: "Bob".into(),
            age: -1,
            major: None,
        };
        assert!(negative.validate().is_err());

        let boundary = NewStudent {
            name: "x".repeat(MAX_FIELD_LEN),
            age: 0,
            major: Some("y".repeat(MAX_FIELD_LEN)),
        };
        assert!(boundary.validate().is_ok());
    }

    #[test]
    fn update_with_only_age_keeps_other_fields() {
        let patch: StudentUpdate = serde_json::from_value(json!({"age": 22})).unwrap();
        let updated = patch.apply(stored());
        assert_eq!(updated.age, 22);
        assert_eq!(updated.name, "Alice Smith");
        assert_eq!(updated.major.as_deref(), Some("Physics"));
    }

    #[test]
    fn reapplying_the_same_patch_is_idempotent() {
        let first: StudentUpdate = serde_json::from_value(json!({"age": 22})).unwrap();
        let second: StudentUpdate = serde_json::from_value(json!({"age": 22})).unwrap();
        let once = first.apply(stored());
        let twice = second.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn explicit_null_major_clears_while_omitted_keeps() {
        let cleared: StudentUpdate = serde_json::from_value(json!({"major": null})).unwrap();
        assert_eq!(cleared.major, Some(None));
        assert_eq!(cleared.apply(stored()).major, None);

        let omitted: StudentUpdate = serde_json::from_value(json!({"name": "Alice S."})).unwrap();
        assert_eq!(omitted.major, None);
        assert_eq!(omitted.apply(stored()).major.as_deref(), Some("Physics"));
    }

    #[test]
    fn update_validation_only_checks_supplied_fields() {
        let empty = StudentUpdate::default();
        assert!(empty.validate().is_ok());

        let bad_name: StudentUpdate = serde_json::from_value(json!({"name": ""})).unwrap();
        assert!(bad_name.validate().is_err());

        let null_major: StudentUpdate = serde_json::from_value(json!({"major": null})).unwrap();
        assert!(null_major.validate().is_ok());
    }
}
