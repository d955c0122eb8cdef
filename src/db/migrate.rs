use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Long-form readings table. Columns are TEXT on purpose: the sheet is
/// hand-edited and rows are parsed on load, not on insert.
fn create_readings_table(conn: &Connection) -> Result<()> {
    let version = "20240601_0001_create_readings";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS readings (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            machine_id  TEXT NOT NULL DEFAULT '',
            date        TEXT NOT NULL,
            time        TEXT NOT NULL,
            item        TEXT NOT NULL,
            value       TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;

    mark_applied(conn, version, "Created readings table")?;
    log::info!("migration applied: {}", version);
    Ok(())
}

fn add_date_index(conn: &Connection) -> Result<()> {
    let version = "20240601_0002_readings_date_index";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_readings_date_item ON readings(date, item);",
    )?;

    mark_applied(conn, version, "Added (date, item) index on readings")?;
    log::info!("migration applied: {}", version);
    Ok(())
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_readings_table(conn)?;
    add_date_index(conn)?;
    Ok(())
}
