use std::env;

use anyhow::{Context, Result};
use mongodb::{Client, Database};

// DATABASE_URL carries host and credentials only; the db name is fixed.
const DB_NAME: &str = "blog-app";

pub async fn get_mongo_database() -> Result<Database> {
    let uri = env::var("DATABASE_URL").context("DATABASE_URL not set")?;
    let client = Client::with_uri_str(&uri)
        .await
        .context("failed to connect to the document store")?;
    Ok(client.database(DB_NAME))
}
