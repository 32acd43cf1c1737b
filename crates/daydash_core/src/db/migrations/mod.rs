//! Schema migrations, applied in order via `PRAGMA user_version`.

use log::info;
use rusqlite::Connection;

use crate::db::{DbError, DbResult};

/// Ordered (version, sql) pairs. Versions must stay strictly increasing.
const SCHEMA: &[(u32, &str)] = &[(1, include_str!("0001_init.sql"))];

/// Latest schema version this build knows about.
pub fn latest_version() -> u32 {
    SCHEMA.last().map_or(0, |(version, _)| *version)
}

/// Brings the connection's schema up to [`latest_version`]. All pending
/// migrations run inside one transaction; a database written by a newer
/// build is rejected rather than partially interpreted.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let installed = user_version(conn)?;
    let latest = latest_version();

    if installed > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: installed,
            latest_supported: latest,
        });
    }
    if installed == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in SCHEMA.iter().filter(|(version, _)| *version > installed) {
        tx.execute_batch(sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {version};"))?;
        info!("event=db_migrate module=db status=applied version={version}");
    }
    tx.commit()?;

    Ok(())
}

fn user_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}
