#[macro_use]
extern crate rocket;

pub mod context;
pub mod db;
pub mod docs;
pub mod error;
pub mod models;
pub mod routes;
pub mod schema;

use rocket::figment::{providers::Serialized, util::map, Figment};
use rocket::{fairing::AdHoc, Build, Rocket};
use serde::Deserialize;

/// Application settings read from the active `Rocket.toml` profile.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    /// Mount the OpenAPI document and Swagger UI under `/api-docs`.
    #[serde(default)]
    pub api_docs: bool,
}

/// Rocket's own figment, with `DATABASE_URL` (if set) overriding the
/// `todo_db` connection url in every profile.
pub fn figment() -> Figment {
    let figment = rocket::Config::figment();
    match std::env::var("DATABASE_URL") {
        Ok(url) => figment.merge(Serialized::global(
            "databases",
            map!["todo_db" => map!["url" => url]],
        )),
        Err(_) => figment,
    }
}

pub fn rocket() -> Rocket<Build> {
    build(figment())
}

pub fn build(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(db::Db::fairing())
        .attach(db::migrations())
        .attach(AdHoc::config::<AppConfig>())
        .attach(docs::fairing())
        .mount(routes::BASE, routes::routes())
}
