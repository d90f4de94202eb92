pub mod kv_store;
pub mod schema;

use crate::error::AppError;
use rusqlite::Connection;
use std::path::PathBuf;

pub use kv_store::SqliteStore;

/// Directory holding the database and the config file
pub fn get_data_directory() -> PathBuf {
    PathBuf::from("./data")
}

/// Path of the SQLite database file
pub fn get_database_path() -> PathBuf {
    get_data_directory().join("raffle.db")
}

/// Opens the database and makes sure the schema exists
pub fn init_database() -> Result<Connection, AppError> {
    let db_path = get_database_path();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(&db_path)?;
    schema::init_schema(&conn)?;

    Ok(conn)
}
