use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use crate::errors::ApiError;
use crate::models::employee::{EmployeePatch, EmployeeReplace, EmployeeResponse, NewEmployee};
use crate::repositories::EmployeeRepository;
use crate::utils::auth::AuthenticatedUser;

pub async fn list_employees(
    _user: AuthenticatedUser,
    repo: web::Data<EmployeeRepository>,
) -> Result<HttpResponse, ApiError> {
    let employees: Vec<EmployeeResponse> = repo
        .list()
        .await?
        .into_iter()
        .map(EmployeeResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    _user: AuthenticatedUser,
    repo: web::Data<EmployeeRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let row = repo
        .get(id.into_inner())
        .await?
        .ok_or(ApiError::NotFound("employee"))?;
    Ok(HttpResponse::Ok().json(EmployeeResponse::from(row)))
}

pub async fn create_employee(
    user: AuthenticatedUser,
    repo: web::Data<EmployeeRepository>,
    payload: web::Json<NewEmployee>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let row = repo.create(&payload).await?;
    let employee = EmployeeResponse::from(row);
    info!("user {} created employee {}", user.user_id, employee.label());
    Ok(HttpResponse::Created().json(employee))
}

pub async fn replace_employee(
    _user: AuthenticatedUser,
    repo: web::Data<EmployeeRepository>,
    id: web::Path<i64>,
    payload: web::Json<EmployeeReplace>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let row = repo
        .replace(id.into_inner(), &payload)
        .await?
        .ok_or(ApiError::NotFound("employee"))?;
    Ok(HttpResponse::Ok().json(EmployeeResponse::from(row)))
}

pub async fn patch_employee(
    _user: AuthenticatedUser,
    repo: web::Data<EmployeeRepository>,
    id: web::Path<i64>,
    payload: web::Json<EmployeePatch>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let row = repo
        .patch(id.into_inner(), &payload)
        .await?
        .ok_or(ApiError::NotFound("employee"))?;
    Ok(HttpResponse::Ok().json(EmployeeResponse::from(row)))
}

pub async fn delete_employee(
    user: AuthenticatedUser,
    repo: web::Data<EmployeeRepository>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("employee"));
    }
    info!("user {} deleted employee {}", user.user_id, id);
    Ok(HttpResponse::NoContent().finish())
}
