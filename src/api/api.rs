use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::error::ApiError;
use crate::models::todo::{CreateTodoRequest, SuccessResponse, TodoDto};
use crate::repository::database::Database;

#[get("/todos")]
pub async fn get_todos(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let todos = db.get_todos().await?;
    Ok(HttpResponse::Ok().json(todos.iter().map(TodoDto::from).collect::<Vec<_>>()))
}

#[post("/todos")]
pub async fn create_todo(
    db: web::Data<Database>,
    new_todo: web::Json<CreateTodoRequest>,
) -> Result<HttpResponse, ApiError> {
    let todo = db.create_todo(new_todo.into_inner().body).await?;
    Ok(HttpResponse::Created().json(TodoDto::from(&todo)))
}

#[patch("/todos/{id}")]
pub async fn complete_todo(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    db.complete_todo(&id).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
}

#[delete("/todos/{id}")]
pub async fn delete_todo(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    db.delete_todo(&id).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse { success: true }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(get_todos)
            .service(create_todo)
            .service(complete_todo)
            .service(delete_todo),
    );
}
