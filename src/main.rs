#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    dotenvy::dotenv().ok();

    let _rocket = todo_api::rocket().launch().await?;

    Ok(())
}
