//! OpenAPI document and Swagger UI, mounted under `/api-docs` when
//! `api_docs` is enabled for the active profile.

use log::info;
use rocket::fairing::AdHoc;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use utoipa::OpenApi;

use crate::models::TodoItem;
use crate::routes;
use crate::AppConfig;

const SWAGGER_HTML: &str = include_str!("../static/swagger.html");

#[derive(OpenApi)]
#[openapi(
    info(title = "todo-api", description = "CRUD service for to-do items"),
    paths(
        routes::get_todo_items,
        routes::get_todo_item,
        routes::post_todo_item,
        routes::put_todo_item,
        routes::delete_todo_item
    ),
    components(schemas(TodoItem)),
    tags((name = "todoitems", description = "To-do item management"))
)]
pub struct ApiDoc;

#[get("/openapi.json")]
fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[get("/swagger")]
fn swagger() -> RawHtml<&'static str> {
    RawHtml(SWAGGER_HTML)
}

pub fn fairing() -> AdHoc {
    AdHoc::on_ignite("API Docs", |rocket| async move {
        let enabled = rocket.state::<AppConfig>().is_some_and(|config| config.api_docs);

        if enabled {
            info!("serving API docs at /api-docs/swagger");
            rocket.mount("/api-docs", routes![openapi_json, swagger])
        } else {
            rocket
        }
    })
}
