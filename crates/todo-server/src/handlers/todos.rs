use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use todo_core::{CreateTodoRequest, Todo, UpdateTodoRequest};

use super::log_failure;
use crate::error::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub message: &'static str,
    pub todo: Todo,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn logged<T>(req: &HttpRequest, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        log_failure(req, err);
    }
    result
}

/// `POST /todos`
pub async fn create(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Json<CreateTodoRequest>,
) -> Result<HttpResponse> {
    let new_todo = logged(&req, payload.into_inner().validate().map_err(AppError::from))?;
    let todo = state.todos.create(new_todo).await;

    Ok(HttpResponse::Created().json(TodoResponse {
        message: "Todo created",
        todo,
    }))
}

/// `GET /todos`
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.todos.list().await)
}

/// `GET /todos/{id}`
pub async fn get(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let todo = logged(&req, state.todos.get(&id).await.map_err(AppError::from))?;

    Ok(HttpResponse::Ok().json(todo))
}

/// `PUT /todos/{id}`
pub async fn update(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateTodoRequest>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let patch = logged(&req, payload.into_inner().validate().map_err(AppError::from))?;
    let todo = logged(&req, state.todos.update(&id, patch).await.map_err(AppError::from))?;

    Ok(HttpResponse::Ok().json(TodoResponse {
        message: "Todo updated",
        todo,
    }))
}

/// `DELETE /todos/{id}`
pub async fn delete(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    logged(&req, state.todos.delete(&id).await.map_err(AppError::from))?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Todo deleted",
    }))
}
