mod db;
mod errors;
mod handlers;
mod models;
mod repositories;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;

use repositories::{DepartmentRepository, EmployeeRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Validate JWT secret
    let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    if jwt_secret.is_empty() {
        panic!("JWT_SECRET cannot be empty");
    }

    let pool = db::create_pool().await;
    db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let employees = EmployeeRepository::new(pool.clone());
    let departments = DepartmentRepository::new(pool);

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Starting server at {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::JsonConfig::default().error_handler(errors::json_error_handler))
            .app_data(web::Data::new(employees.clone()))
            .app_data(web::Data::new(departments.clone()))
            .service(
                web::resource("/v1/employees")
                    .route(web::get().to(handlers::employee::list_employees))
                    .route(web::post().to(handlers::employee::create_employee)),
            )
            .service(
                web::resource("/v1/employees/{id}")
                    .route(web::get().to(handlers::employee::get_employee))
                    .route(web::put().to(handlers::employee::replace_employee))
                    .route(web::patch().to(handlers::employee::patch_employee))
                    .route(web::delete().to(handlers::employee::delete_employee)),
            )
            .service(
                web::resource("/v1/departments")
                    .route(web::get().to(handlers::department::list_departments))
                    .route(web::post().to(handlers::department::create_department)),
            )
            .service(
                web::resource("/v1/departments/{id}")
                    .route(web::get().to(handlers::department::get_department))
                    .route(web::put().to(handlers::department::replace_department))
                    .route(web::patch().to(handlers::department::patch_department))
                    .route(web::delete().to(handlers::department::delete_department)),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
