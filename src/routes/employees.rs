use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::types::employee::{Employee, NewEmployee};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/employees", get(list_employees).post(add_employee))
        .route("/api/employees/:id", delete(delete_employee))
}

#[derive(Serialize)]
struct AddedResponse {
    message: &'static str,
    id: String,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

async fn add_employee(
    State(state): State<AppState>,
    Json(req): Json<NewEmployee>,
) -> Result<Json<AddedResponse>, AppError> {
    let employee = state.employees().add(req)?;
    Ok(Json(AddedResponse {
        message: "Employee added successfully",
        id: employee.id,
    }))
}

async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = state.employees().list();
    if employees.is_empty() {
        return Err(AppError::NotFound("No employees found.".to_string()));
    }
    Ok(Json(employees))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .employees()
        .remove(&id)
        .ok_or_else(|| AppError::NotFound(format!("Employee with ID {} not found", id)))?;

    tracing::info!("Deleted employee {}", id);
    Ok(Json(MessageResponse {
        message: format!("Employee with ID {} deleted successfully", id),
    }))
}
