//! Department API endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{
    models::{CreateDepartmentRequest, DepartmentDto, UpdateDepartmentRequest},
    utils::{parse_path_id, AppError, ValidatedJson},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route(
            "/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
}

async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentDto>>, AppError> {
    let departments = state.departments.list().await?;
    Ok(Json(departments))
}

async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DepartmentDto>, AppError> {
    let id = parse_path_id(&id, "Department")?;
    let department = state.departments.get(id).await?;
    Ok(Json(department))
}

async fn create_department(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDepartmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let department = state.departments.create(payload).await?;
    let location = format!("/api/departments/{}", department.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(department),
    ))
}

async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateDepartmentRequest>,
) -> Result<StatusCode, AppError> {
    let id = parse_path_id(&id, "Department")?;
    state.departments.update(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_path_id(&id, "Department")?;
    state.departments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
