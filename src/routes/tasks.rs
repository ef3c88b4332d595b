use actix_web::error::ResponseError;
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::auth::AuthenticatedUser;
use crate::error::TaskError;
use crate::models::{TaskInput, TaskPatch, TaskQuery};
use crate::pagination::{PageRequest, DEFAULT_PAGE_SIZE};
use crate::services::TaskService;
use crate::storage::Storage;

/// Query string of the task listing: the two optional filters plus paging.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub completed: Option<bool>,
    pub due_date: Option<NaiveDate>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Lists tasks, filtered by completion state and/or due-date cutoff.
pub async fn get_tasks<S: Storage>(
    service: web::Data<TaskService<S>>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    let params = params.into_inner();
    let query = TaskQuery {
        completed: params.completed,
        due_date: params.due_date,
    };
    let page = PageRequest::new(
        params.page.unwrap_or(0),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE),
    );

    service
        .get_tasks(query, page)
        .await
        .fold(
            |error| error.error_response(),
            |page| HttpResponse::Ok().json(page),
        )
}

/// Creates a task owned by the authenticated user.
pub async fn create_task<S: Storage>(
    service: web::Data<TaskService<S>>,
    input: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, TaskError> {
    service.create_task(input.into_inner(), &user.0).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Reads a single task by id.
pub async fn get_task<S: Storage>(
    service: web::Data<TaskService<S>>,
    id: web::Path<i64>,
) -> HttpResponse {
    service
        .get_task(id.into_inner())
        .await
        .fold(
            |error| error.error_response(),
            |view| HttpResponse::Ok().json(view),
        )
}

/// Partially updates a task owned by the authenticated user.
pub async fn update_task<S: Storage>(
    service: web::Data<TaskService<S>>,
    id: web::Path<i64>,
    patch: web::Json<TaskPatch>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, TaskError> {
    service
        .update_task(id.into_inner(), patch.into_inner(), &user.0)
        .await?;
    Ok(HttpResponse::Ok().finish())
}

/// Deletes a task owned by the authenticated user.
pub async fn delete_task<S: Storage>(
    service: web::Data<TaskService<S>>,
    id: web::Path<i64>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, TaskError> {
    service.delete_task(id.into_inner(), &user.0).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Marks a task owned by the authenticated user as completed.
pub async fn complete_task<S: Storage>(
    service: web::Data<TaskService<S>>,
    id: web::Path<i64>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, TaskError> {
    service.complete_task(id.into_inner(), &user.0).await?;
    Ok(HttpResponse::Ok().finish())
}
