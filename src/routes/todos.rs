use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::TodoInput,
    store::TodoStore,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

/// Retrieves all Todo records.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Todo` objects.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
#[get("")]
pub async fn list_todos(todos: web::Data<TodoStore>) -> Result<impl Responder, AppError> {
    let todos = todos.find_all().await?;
    Ok(HttpResponse::Ok().json(todos))
}

/// Creates a new Todo record.
///
/// ## Request Body:
/// A JSON object matching `TodoInput`:
/// - `title`: The title of the Todo (required, non-blank).
/// - `is_completed` (optional): Completion flag.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Todo` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `422 Unprocessable Entity`: If input validation fails (blank title).
#[post("")]
pub async fn create_todo(
    todos: web::Data<TodoStore>,
    user: AuthenticatedUser,
    todo_data: web::Json<TodoInput>,
) -> Result<impl Responder, AppError> {
    todo_data.validate()?;

    let todo = todos.create(todo_data.into_inner()).await?;
    log::info!("Todo {} created by {}", todo.id, user.0);

    Ok(HttpResponse::Created().json(todo))
}

/// Retrieves a specific Todo by its ID.
///
/// ## Responses:
/// - `200 OK`: Returns the `Todo` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If no Todo has the given ID.
#[get("/{id}")]
pub async fn get_todo(
    todos: web::Data<TodoStore>,
    todo_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    match todos.find_by_id(todo_id.into_inner()).await? {
        Some(todo) => Ok(HttpResponse::Ok().json(todo)),
        None => Err(AppError::NotFound("Todo not found".into())),
    }
}

/// Updates an existing Todo.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Todo` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If no Todo has the given ID.
/// - `422 Unprocessable Entity`: If input validation fails.
#[put("/{id}")]
pub async fn update_todo(
    todos: web::Data<TodoStore>,
    user: AuthenticatedUser,
    todo_id: web::Path<i64>,
    todo_data: web::Json<TodoInput>,
) -> Result<impl Responder, AppError> {
    todo_data.validate()?;
    let id = todo_id.into_inner();

    match todos.update(id, todo_data.into_inner()).await? {
        Some(todo) => {
            log::info!("Todo {} updated by {}", todo.id, user.0);
            Ok(HttpResponse::Ok().json(todo))
        }
        None => Err(AppError::NotFound("Todo not found".into())),
    }
}

/// Deletes a Todo by its ID.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `401 Unauthorized`: If the request lacks a valid bearer token.
/// - `404 Not Found`: If no Todo has the given ID.
#[delete("/{id}")]
pub async fn delete_todo(
    todos: web::Data<TodoStore>,
    user: AuthenticatedUser,
    todo_id: web::Path<i64>,
) -> Result<impl Responder, AppError> {
    let id = todo_id.into_inner();

    if todos.delete(id).await? {
        log::info!("Todo {} deleted by {}", id, user.0);
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound("Todo not found".into()))
    }
}
