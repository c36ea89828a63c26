use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::department::Department;
use crate::models::user::UserSummary;

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[sqlx(type_name = "employment_type")]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "Full-time")]
    #[sqlx(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    #[sqlx(rename = "Part-time")]
    PartTime,
    Contract,
    Intern,
}

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[sqlx(type_name = "employee_status")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    #[serde(rename = "On Leave")]
    #[sqlx(rename = "On Leave")]
    OnLeave,
    #[default]
    Probation,
    Terminated,
}

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "gender")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[serde(rename = "Prefer Not To Say")]
    #[sqlx(rename = "Prefer Not To Say")]
    PreferNotToSay,
}

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "marital_status")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    Other,
}

/// One row of the employee listing query: employee columns plus the
/// LEFT JOINed user and department summaries, flattened.
#[derive(sqlx::FromRow, Debug)]
pub struct EmployeeRow {
    pub id: i64,
    pub employee_id: String,
    pub mobile_phone: Option<String>,
    pub job_title: Option<String>,
    pub home_address: Option<String>,
    pub nationality: Option<String>,
    pub employment_type: EmploymentType,
    pub employee_status: EmployeeStatus,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub date_joined: NaiveDate,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture: Option<String>,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
    pub user_id: Option<i64>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
    pub department_description: Option<String>,
}

/// Read representation. `user` and `department` are nested summaries;
/// the flat `user_id` / `department_id` accepted on writes are never
/// echoed back.
#[derive(Serialize, Debug)]
pub struct EmployeeResponse {
    pub id: i64,
    pub employee_id: String,
    pub user: Option<UserSummary>,
    pub department: Option<Department>,
    pub mobile_phone: Option<String>,
    pub job_title: Option<String>,
    pub home_address: Option<String>,
    pub nationality: Option<String>,
    pub employment_type: EmploymentType,
    pub employee_status: EmployeeStatus,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub date_joined: NaiveDate,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture: Option<String>,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl EmployeeResponse {
    /// Human-readable label for log lines, e.g. "EMP001 - Jane Doe".
    pub fn label(&self) -> String {
        match &self.user {
            Some(user) => format!("{} - {}", self.employee_id, user.display_name()),
            None => format!("{} - (No User Linked)", self.employee_id),
        }
    }
}

impl From<EmployeeRow> for EmployeeResponse {
    fn from(row: EmployeeRow) -> Self {
        let user = row.user_id.map(|id| UserSummary {
            id,
            username: row.username.unwrap_or_default(),
            first_name: row.first_name.unwrap_or_default(),
            last_name: row.last_name.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            is_active: row.is_active.unwrap_or_default(),
        });
        let department = row.department_id.map(|id| Department {
            id,
            name: row.department_name.unwrap_or_default(),
            description: row.department_description,
        });
        EmployeeResponse {
            id: row.id,
            employee_id: row.employee_id,
            user,
            department,
            mobile_phone: row.mobile_phone,
            job_title: row.job_title,
            home_address: row.home_address,
            nationality: row.nationality,
            employment_type: row.employment_type,
            employee_status: row.employee_status,
            gender: row.gender,
            marital_status: row.marital_status,
            date_joined: row.date_joined,
            date_of_birth: row.date_of_birth,
            profile_picture: row.profile_picture,
            date_created: row.date_created,
            date_updated: row.date_updated,
        }
    }
}

#[derive(Deserialize, Validate, Debug)]
pub struct NewEmployee {
    #[validate(length(min = 1, max = 20))]
    pub employee_id: String,
    pub user_id: Option<i64>,
    pub department_id: Option<i64>,
    #[validate(length(max = 15))]
    pub mobile_phone: Option<String>,
    #[validate(length(max = 100))]
    pub job_title: Option<String>,
    pub home_address: Option<String>,
    #[validate(length(max = 100))]
    pub nationality: Option<String>,
    #[serde(default)]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub employee_status: EmployeeStatus,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub date_joined: NaiveDate,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture: Option<String>,
}

/// Full-update payload. `employee_id` is an immutable business key and
/// is not accepted here; a value supplied anyway is ignored. Omitted
/// optional fields are cleared, omitted enums reset to their defaults.
#[derive(Deserialize, Validate, Debug)]
pub struct EmployeeReplace {
    pub user_id: Option<i64>,
    pub department_id: Option<i64>,
    #[validate(length(max = 15))]
    pub mobile_phone: Option<String>,
    #[validate(length(max = 100))]
    pub job_title: Option<String>,
    pub home_address: Option<String>,
    #[validate(length(max = 100))]
    pub nationality: Option<String>,
    #[serde(default)]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub employee_status: EmployeeStatus,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub date_joined: NaiveDate,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture: Option<String>,
}

/// Partial-update payload. Every nullable field distinguishes omitted
/// (keep the stored value) from explicit null (clear it); the
/// non-nullable `employment_type`/`employee_status`/`date_joined` can
/// only be replaced, never cleared.
#[derive(Deserialize, Validate, Debug, Default)]
pub struct EmployeePatch {
    #[serde(default, deserialize_with = "crate::models::nullable_update")]
    pub user_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "crate::models::nullable_update")]
    pub department_id: Option<Option<i64>>,
    #[validate(length(max = 15))]
    #[serde(default, deserialize_with = "crate::models::nullable_update")]
    pub mobile_phone: Option<Option<String>>,
    #[validate(length(max = 100))]
    #[serde(default, deserialize_with = "crate::models::nullable_update")]
    pub job_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::nullable_update")]
    pub home_address: Option<Option<String>>,
    #[validate(length(max = 100))]
    #[serde(default, deserialize_with = "crate::models::nullable_update")]
    pub nationality: Option<Option<String>>,
    pub employment_type: Option<EmploymentType>,
    pub employee_status: Option<EmployeeStatus>,
    #[serde(default, deserialize_with = "crate::models::nullable_update")]
    pub gender: Option<Option<Gender>>,
    #[serde(default, deserialize_with = "crate::models::nullable_update")]
    pub marital_status: Option<Option<MaritalStatus>>,
    pub date_joined: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::models::nullable_update")]
    pub date_of_birth: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "crate::models::nullable_update")]
    pub profile_picture: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bare_row() -> EmployeeRow {
        EmployeeRow {
            id: 1,
            employee_id: "EMP001".to_string(),
            mobile_phone: None,
            job_title: None,
            home_address: None,
            nationality: None,
            employment_type: EmploymentType::FullTime,
            employee_status: EmployeeStatus::Probation,
            gender: None,
            marital_status: None,
            date_joined: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            date_of_birth: None,
            profile_picture: None,
            date_created: Utc::now(),
            date_updated: Utc::now(),
            user_id: None,
            username: None,
            first_name: None,
            last_name: None,
            email: None,
            is_active: None,
            department_id: None,
            department_name: None,
            department_description: None,
        }
    }

    #[test]
    fn enum_wire_labels() {
        assert_eq!(
            serde_json::to_value(EmploymentType::FullTime).unwrap(),
            json!("Full-time")
        );
        assert_eq!(
            serde_json::to_value(EmployeeStatus::OnLeave).unwrap(),
            json!("On Leave")
        );
        assert_eq!(
            serde_json::to_value(Gender::PreferNotToSay).unwrap(),
            json!("Prefer Not To Say")
        );
        let status: EmployeeStatus = serde_json::from_value(json!("On Leave")).unwrap();
        assert_eq!(status, EmployeeStatus::OnLeave);
    }

    #[test]
    fn unknown_enum_label_is_rejected() {
        assert!(serde_json::from_value::<EmploymentType>(json!("Freelance")).is_err());
    }

    #[test]
    fn new_employee_defaults() {
        let payload: NewEmployee = serde_json::from_value(json!({
            "employee_id": "EMP001",
            "date_joined": "2024-01-15"
        }))
        .unwrap();
        assert_eq!(payload.employment_type, EmploymentType::FullTime);
        assert_eq!(payload.employee_status, EmployeeStatus::Probation);
        assert!(payload.user_id.is_none());
        assert!(payload.department_id.is_none());
    }

    #[test]
    fn new_employee_requires_date_joined() {
        let result: Result<NewEmployee, _> =
            serde_json::from_value(json!({"employee_id": "EMP001"}));
        assert!(result.is_err());
    }

    #[test]
    fn read_only_keys_in_payload_are_ignored() {
        let payload: NewEmployee = serde_json::from_value(json!({
            "employee_id": "EMP001",
            "date_joined": "2024-01-15",
            "id": 42,
            "date_created": "2020-01-01T00:00:00Z",
            "user": {"id": 1}
        }))
        .unwrap();
        assert_eq!(payload.employee_id, "EMP001");
    }

    #[test]
    fn new_employee_length_limits() {
        let payload: NewEmployee = serde_json::from_value(json!({
            "employee_id": "X".repeat(21),
            "date_joined": "2024-01-15"
        }))
        .unwrap();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("employee_id"));
    }

    #[test]
    fn patch_distinguishes_omitted_from_null() {
        let omitted: EmployeePatch = serde_json::from_value(json!({})).unwrap();
        assert_eq!(omitted.department_id, None);
        assert_eq!(omitted.gender, None);
        assert_eq!(omitted.profile_picture, None);

        let cleared: EmployeePatch =
            serde_json::from_value(json!({"department_id": null})).unwrap();
        assert_eq!(cleared.department_id, Some(None));

        let set: EmployeePatch = serde_json::from_value(json!({"department_id": 3})).unwrap();
        assert_eq!(set.department_id, Some(Some(3)));
    }

    #[test]
    fn patch_null_clears_optional_scalar_fields() {
        let patch: EmployeePatch = serde_json::from_value(json!({
            "gender": null,
            "date_of_birth": null,
            "profile_picture": null,
            "mobile_phone": "555-0100"
        }))
        .unwrap();
        assert_eq!(patch.gender, Some(None));
        assert_eq!(patch.date_of_birth, Some(None));
        assert_eq!(patch.profile_picture, Some(None));
        assert_eq!(patch.mobile_phone, Some(Some("555-0100".to_string())));
        // untouched fields stay omitted
        assert_eq!(patch.job_title, None);
    }

    #[test]
    fn response_nests_user_and_department() {
        let mut row = bare_row();
        row.user_id = Some(7);
        row.username = Some("jdoe".to_string());
        row.first_name = Some("Jane".to_string());
        row.last_name = Some("Doe".to_string());
        row.email = Some("jdoe@example.com".to_string());
        row.is_active = Some(true);
        row.department_id = Some(3);
        row.department_name = Some("Engineering".to_string());

        let response = EmployeeResponse::from(row);
        let user = response.user.as_ref().unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "jdoe");
        let department = response.department.as_ref().unwrap();
        assert_eq!(department.id, 3);
        assert_eq!(department.name, "Engineering");

        let body = serde_json::to_value(&response).unwrap();
        assert!(body.get("user_id").is_none());
        assert_eq!(body["user"]["is_active"], json!(true));
        assert_eq!(body["department"]["description"], json!(null));
    }

    #[test]
    fn label_uses_linked_user_name() {
        let mut row = bare_row();
        row.user_id = Some(7);
        row.username = Some("jdoe".to_string());
        row.first_name = Some("Jane".to_string());
        row.last_name = Some("Doe".to_string());
        row.email = Some("jdoe@example.com".to_string());
        row.is_active = Some(true);
        assert_eq!(EmployeeResponse::from(row).label(), "EMP001 - Jane Doe");
    }

    #[test]
    fn label_placeholder_without_user() {
        assert_eq!(
            EmployeeResponse::from(bare_row()).label(),
            "EMP001 - (No User Linked)"
        );
    }
}
