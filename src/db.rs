use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{error, info};
use rocket::{fairing::AdHoc, Build, Rocket};
use rocket_sync_db_pools::database;

use crate::error::{Error, Result};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Pooled connection to the `todo_db` database configured under
/// `databases.todo_db` in `Rocket.toml`.
#[database("todo_db")]
pub struct Db(SqliteConnection);

pub fn migrate(conn: &mut SqliteConnection) -> Result<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Migration(e.to_string()))?;
    for version in applied {
        info!("applied migration {}", version);
    }
    Ok(())
}

/// Brings the schema up to date before the server starts accepting requests.
pub fn migrations() -> AdHoc {
    AdHoc::try_on_ignite("Diesel Migrations", |rocket: Rocket<Build>| async move {
        let Some(db) = Db::get_one(&rocket).await else {
            error!("no `todo_db` connection available for migrations");
            return Err(rocket);
        };

        match db.run(migrate).await {
            Ok(()) => Ok(rocket),
            Err(e) => {
                error!("{}", e);
                Err(rocket)
            }
        }
    })
}
