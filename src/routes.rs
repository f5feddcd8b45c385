//! `/api/todoitems` handlers.
//!
//! Each handler checks a pooled connection out, builds a fresh
//! [`TodoContext`] on the blocking worker and maps the result to a status.

use log::info;
use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::Route;

use crate::context::TodoContext;
use crate::db::Db;
use crate::error::{Error, Result};
use crate::models::{NewTodoItem, TodoItem};

pub const BASE: &str = "/api/todoitems";

pub fn routes() -> Vec<Route> {
    routes![
        get_todo_items,
        get_todo_item,
        post_todo_item,
        put_todo_item,
        delete_todo_item
    ]
}

#[utoipa::path(
    get,
    path = "/api/todoitems",
    tag = "todoitems",
    responses((status = 200, description = "All stored items", body = [TodoItem]))
)]
#[get("/")]
pub async fn get_todo_items(db: Db) -> Result<Json<Vec<TodoItem>>> {
    db.run(|c| TodoContext::new(c).all()).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/todoitems/{id}",
    tag = "todoitems",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "The stored item", body = TodoItem),
        (status = 404, description = "No item with this id")
    )
)]
#[get("/<id>")]
pub async fn get_todo_item(db: Db, id: i32) -> Result<Json<TodoItem>> {
    db.run(move |c| TodoContext::new(c).find(id))
        .await?
        .map(Json)
        .ok_or(Error::NotFound(id))
}

#[utoipa::path(
    post,
    path = "/api/todoitems",
    tag = "todoitems",
    request_body = TodoItem,
    responses((status = 201, description = "Item created; `Location` points at it", body = TodoItem))
)]
#[post("/", data = "<item>")]
pub async fn post_todo_item(db: Db, item: Json<TodoItem>) -> Result<Created<Json<TodoItem>>> {
    let new = NewTodoItem::from(item.into_inner());
    let created = db
        .run(move |c| {
            let mut ctx = TodoContext::new(c);
            ctx.add(new);
            ctx.save_changes()
        })
        .await?
        .pop()
        .ok_or(Error::Store(diesel::result::Error::NotFound))?;

    info!("created todo item {}", created.id);
    let location = uri!("/api/todoitems", get_todo_item(created.id));
    Ok(Created::new(location.to_string()).body(Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/todoitems/{id}",
    tag = "todoitems",
    params(("id" = i32, Path, description = "Item id; must equal the body id")),
    request_body = TodoItem,
    responses(
        (status = 204, description = "Item overwritten"),
        (status = 400, description = "Path id and body id differ"),
        (status = 404, description = "No item with this id")
    )
)]
#[put("/<id>", data = "<item>")]
pub async fn put_todo_item(db: Db, id: i32, item: Json<TodoItem>) -> Result<Status> {
    let item = item.into_inner();
    if item.id != id {
        return Err(Error::IdMismatch { path: id, body: item.id });
    }

    db.run(move |c| {
        let mut ctx = TodoContext::new(c);
        ctx.update(item);
        ctx.save_changes()
    })
    .await?;

    info!("updated todo item {}", id);
    Ok(Status::NoContent)
}

#[utoipa::path(
    delete,
    path = "/api/todoitems/{id}",
    tag = "todoitems",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item removed"),
        (status = 404, description = "No item with this id")
    )
)]
#[delete("/<id>")]
pub async fn delete_todo_item(db: Db, id: i32) -> Result<Status> {
    db.run(move |c| {
        let mut ctx = TodoContext::new(c);
        ctx.remove(id);
        ctx.save_changes()
    })
    .await?;

    info!("deleted todo item {}", id);
    Ok(Status::NoContent)
}
