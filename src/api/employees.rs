//! Employee API endpoints
//!
//! Update and delete take the employee id as an `?id=` query parameter.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    models::{CreateEmployeeRequest, EmployeeDto, UpdateEmployeeRequest},
    utils::{parse_path_id, AppError, IdQuery, ValidatedJson},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_employees)
                .post(create_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .route("/{id}", get(get_employee))
}

async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<EmployeeDto>>, AppError> {
    let employees = state.employees.list().await?;
    Ok(Json(employees))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeDto>, AppError> {
    let id = parse_path_id(&id, "Employee")?;
    let employee = state.employees.get(id).await?;
    Ok(Json(employee))
}

async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let employee = state.employees.create(payload).await?;
    let location = format!("/api/employees/{}", employee.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee),
    ))
}

async fn update_employee(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    ValidatedJson(payload): ValidatedJson<UpdateEmployeeRequest>,
) -> Result<StatusCode, AppError> {
    let id = query.parse()?;
    state.employees.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_employee(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<StatusCode, AppError> {
    let id = query.parse()?;
    state.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
