//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};

use crate::core::ServerState;
use crate::db::models::{Employee, EmployeePayload, EmployeeResponse};
use crate::db::repository::employee as employee_repo;
use crate::utils::{AppError, AppResult};

/// List all employees
pub async fn list(
    State(state): State<ServerState>,
    headers: HeaderMap,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = employee_repo::find_all(state.pool())
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let host = base_host(&headers, &state);
    Ok(Json(
        employees.iter().map(|e| to_response(e, &host)).collect(),
    ))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeResponse>> {
    let id = parse_id(&id)?;
    let employee = employee_repo::find_by_id(state.pool(), id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;

    Ok(Json(to_response(&employee, &base_host(&headers, &state))))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(payload): Json<EmployeePayload>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let input = payload.validate_create()?;
    let employee = employee_repo::create(state.pool(), &input)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(to_response(&employee, &base_host(&headers, &state))),
    ))
}

/// Full update of an employee
///
/// A nonexistent id is not an error here: the record is created at that id
/// and 201 is returned. An existing record is replaced and 200 returned.
pub async fn update(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<EmployeePayload>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    let id = parse_id(&id)?;
    let input = payload.validate_replace()?;

    let (employee, created) = employee_repo::replace(state.pool(), id, &input)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(to_response(&employee, &base_host(&headers, &state))),
    ))
}

/// Partial update of an employee
///
/// Validates only the supplied fields; an empty payload is a no-op that
/// returns the current record.
pub async fn update_partial(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<EmployeePayload>,
) -> AppResult<Json<EmployeeResponse>> {
    let id = parse_id(&id)?;
    payload.validate_partial()?;

    let employee = employee_repo::update_partial(state.pool(), id, &payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;

    Ok(Json(to_response(&employee, &base_host(&headers, &state))))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    let removed = employee_repo::delete(state.pool(), id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    if !removed {
        return Err(AppError::not_found(format!("Employee {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// An id that does not parse as an integer key is indistinguishable from an
/// absent record to the client: 404, not 400.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found(format!("Employee {raw} not found")))
}

fn base_host(headers: &HeaderMap, state: &ServerState) -> String {
    headers
        .get(http::header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| format!("localhost:{}", state.config.http_port))
}

fn to_response(employee: &Employee, host: &str) -> EmployeeResponse {
    EmployeeResponse {
        url: format!("http://{host}/api/v1/employee/{}/", employee.id),
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        title: employee.title.clone(),
    }
}
