use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use crate::errors::ApiError;
use crate::models::department::{DepartmentPatch, DepartmentReplace, NewDepartment};
use crate::repositories::DepartmentRepository;
use crate::utils::auth::AuthenticatedUser;

pub async fn list_departments(
    _user: AuthenticatedUser,
    repo: web::Data<DepartmentRepository>,
) -> Result<HttpResponse, ApiError> {
    let departments = repo.list().await?;
    Ok(HttpResponse::Ok().json(departments))
}

pub async fn get_department(
    _user: AuthenticatedUser,
    repo: web::Data<DepartmentRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let department = repo
        .get(id.into_inner())
        .await?
        .ok_or(ApiError::NotFound("department"))?;
    Ok(HttpResponse::Ok().json(department))
}

pub async fn create_department(
    user: AuthenticatedUser,
    repo: web::Data<DepartmentRepository>,
    payload: web::Json<NewDepartment>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let department = repo.create(&payload).await?;
    info!("user {} created department {}", user.user_id, department.name);
    Ok(HttpResponse::Created().json(department))
}

pub async fn replace_department(
    _user: AuthenticatedUser,
    repo: web::Data<DepartmentRepository>,
    id: web::Path<i64>,
    payload: web::Json<DepartmentReplace>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let department = repo
        .replace(id.into_inner(), &payload)
        .await?
        .ok_or(ApiError::NotFound("department"))?;
    Ok(HttpResponse::Ok().json(department))
}

pub async fn patch_department(
    _user: AuthenticatedUser,
    repo: web::Data<DepartmentRepository>,
    id: web::Path<i64>,
    payload: web::Json<DepartmentPatch>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let department = repo
        .patch(id.into_inner(), &payload)
        .await?
        .ok_or(ApiError::NotFound("department"))?;
    Ok(HttpResponse::Ok().json(department))
}

/// Referencing employees are not deleted; their department link is
/// cleared by the schema's ON DELETE SET NULL.
pub async fn delete_department(
    user: AuthenticatedUser,
    repo: web::Data<DepartmentRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("department"));
    }
    info!("user {} deleted department {}", user.user_id, id);
    Ok(HttpResponse::NoContent().finish())
}
