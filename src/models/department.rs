use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire representation of a department. Timestamps are tracked in the
/// table but not exposed.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize, Validate, Debug)]
pub struct NewDepartment {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
}

/// Full-update payload: an omitted description clears the stored one.
#[derive(Deserialize, Validate, Debug)]
pub struct DepartmentReplace {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
}

/// Partial-update payload: omitted fields keep their stored values; an
/// explicit null `description` clears it.
#[derive(Deserialize, Validate, Debug, Default)]
pub struct DepartmentPatch {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::nullable_update")]
    pub description: Option<Option<String>>,
}
