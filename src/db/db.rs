use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let config = Config::read()?;
        let db_file_path = DataStorage::new().get_path(config.database_file())?;
        let conn: Connection = Connection::open(db_file_path)?;

        Ok(Db { conn })
    }
}
