use crate::db::pool::DbPool;
use crate::store::RawRow;
use rusqlite::{Connection, Result, Row, params};

/// Every reading row in insertion order, as raw strings.
pub fn load_rows(conn: &Connection) -> Result<Vec<RawRow>> {
    let mut stmt = conn.prepare(
        "SELECT machine_id, date, time, item, value
         FROM readings
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_row(row: &Row) -> Result<RawRow> {
    Ok(vec![
        row.get("machine_id")?,
        row.get("date")?,
        row.get("time")?,
        row.get("item")?,
        row.get("value")?,
    ])
}

/// Missing trailing fields are stored as ''.
pub fn insert_row(conn: &Connection, row: &RawRow) -> Result<()> {
    let field = |i: usize| row.get(i).map(String::as_str).unwrap_or("");

    conn.execute(
        "INSERT INTO readings (machine_id, date, time, item, value)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![field(0), field(1), field(2), field(3), field(4)],
    )?;
    Ok(())
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(i32, String, String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i32>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
