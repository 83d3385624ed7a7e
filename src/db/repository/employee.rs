//! Employee Repository

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::{Employee, EmployeeInput, EmployeePayload};

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, title FROM employee ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, title FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn create(pool: &SqlitePool, data: &EmployeeInput) -> RepoResult<Employee> {
    let employee = sqlx::query_as::<_, Employee>(
        "INSERT INTO employee (first_name, last_name, title) VALUES (?, ?, ?) RETURNING id, first_name, last_name, title",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.title)
    .fetch_one(pool)
    .await?;
    Ok(employee)
}

/// Replace the record at `id`, creating it when absent.
///
/// The existence check and the write run in one transaction so concurrent
/// readers never observe a partially applied record. Returns the stored row
/// and whether it was created.
pub async fn replace(
    pool: &SqlitePool,
    id: i64,
    data: &EmployeeInput,
) -> RepoResult<(Employee, bool)> {
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, title FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;
    let created = existing.is_none();

    let employee = if created {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employee (id, first_name, last_name, title) VALUES (?, ?, ?, ?) RETURNING id, first_name, last_name, title",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.title)
        .fetch_one(&mut *tx)
        .await?
    } else {
        sqlx::query_as::<_, Employee>(
            "UPDATE employee SET first_name = ?, last_name = ?, title = ? WHERE id = ? RETURNING id, first_name, last_name, title",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.title)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?
    };

    tx.commit().await?;
    Ok((employee, created))
}

/// Apply the supplied subset of fields to the record at `id`.
///
/// Returns `None` when the record does not exist. Runs in one transaction
/// for the same atomicity guarantee as [`replace`].
pub async fn update_partial(
    pool: &SqlitePool,
    id: i64,
    data: &EmployeePayload,
) -> RepoResult<Option<Employee>> {
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_as::<_, Employee>(
        "SELECT id, first_name, last_name, title FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;
    if existing.is_none() {
        return Ok(None);
    }

    let employee = sqlx::query_as::<_, Employee>(
        "UPDATE employee SET first_name = COALESCE(?, first_name), last_name = COALESCE(?, last_name), title = COALESCE(?, title) WHERE id = ? RETURNING id, first_name, last_name, title",
    )
    .bind(data.first_name.as_deref())
    .bind(data.last_name.as_deref())
    .bind(data.title.as_deref())
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(employee))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
