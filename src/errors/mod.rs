use actix_web::error::JsonPayloadError;
use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use serde_json::json;
use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),
    #[error("{field}: {message}")]
    Field {
        field: &'static str,
        message: &'static str,
    },
    #[error("{message}")]
    Payload { field: String, message: String },
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Unauthorized(String),
    #[error("database error: {0}")]
    Database(sqlx::Error),
    #[error("{0}")]
    Internal(String),
}

/// Translate constraint violations into per-field validation errors so
/// duplicate keys and dangling references come back as 400s, not 500s.
/// The storage layer enforces these atomically; this mapping is the only
/// place constraint names are interpreted.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        let constraint = err
            .as_database_error()
            .and_then(|db_err| db_err.constraint())
            .map(|name| name.to_string());
        match constraint.as_deref() {
            Some("employees_employee_id_key") => ApiError::Field {
                field: "employee_id",
                message: "an employee with this employee_id already exists",
            },
            Some("employees_user_id_key") => ApiError::Field {
                field: "user_id",
                message: "this user is already linked to another employee",
            },
            Some("employees_user_id_fkey") => ApiError::Field {
                field: "user_id",
                message: "no user with this id exists",
            },
            Some("employees_department_id_fkey") => ApiError::Field {
                field: "department_id",
                message: "no department with this id exists",
            },
            Some("departments_name_key") => ApiError::Field {
                field: "name",
                message: "a department with this name already exists",
            },
            _ => ApiError::Database(err),
        }
    }
}

/// Malformed request bodies (wrong type, unknown enum label, missing
/// required field) come back in the same `{"errors": ...}` shape as the
/// other validation failures. Serde attributes missing-field errors to
/// the field; anything else lands under "body".
impl From<JsonPayloadError> for ApiError {
    fn from(err: JsonPayloadError) -> Self {
        let message = match &err {
            JsonPayloadError::Deserialize(inner) => inner.to_string(),
            other => other.to_string(),
        };
        let field = message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split('`').next())
            .unwrap_or("body")
            .to_string();
        ApiError::Payload { field, message }
    }
}

/// Error handler for `web::JsonConfig`, registered app-wide so the
/// `web::Json` extractor follows the error contract instead of actix's
/// plain-text default.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::from(err).into()
}

fn validation_error_body(errors: &ValidationErrors) -> serde_json::Value {
    let mut fields = serde_json::Map::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        fields.insert(field.to_string(), json!(messages));
    }
    json!({ "errors": fields })
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Field { .. } | ApiError::Payload { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(errors) => {
                HttpResponse::BadRequest().json(validation_error_body(errors))
            }
            ApiError::Field { field, message } => {
                let mut fields = serde_json::Map::new();
                fields.insert((*field).to_string(), json!([message]));
                HttpResponse::BadRequest().json(json!({ "errors": fields }))
            }
            ApiError::Payload { field, message } => {
                let mut fields = serde_json::Map::new();
                fields.insert(field.clone(), json!([message]));
                HttpResponse::BadRequest().json(json!({ "errors": fields }))
            }
            ApiError::NotFound(entity) => {
                HttpResponse::NotFound().json(json!({ "error": format!("{} not found", entity) }))
            }
            ApiError::Unauthorized(msg) => {
                HttpResponse::Unauthorized().json(json!({ "error": msg }))
            }
            ApiError::Database(err) => {
                log::error!("database error: {}", err);
                HttpResponse::InternalServerError().json(json!({ "error": "internal server error" }))
            }
            ApiError::Internal(msg) => {
                log::error!("internal error: {}", msg);
                HttpResponse::InternalServerError().json(json!({ "error": "internal server error" }))
            }
        }
    }
}
