use crate::models::{CreateFormula, Formula};
use crate::Database;
use anyhow::Result;

pub fn add_formula(db: &Database, topic_id: i64, input: CreateFormula) -> Result<i64> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO formulas (topic_id, title, latex, description) VALUES (?, ?, ?, ?)",
        (topic_id, &input.title, &input.latex, &input.description),
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_formulas(db: &Database, topic_id: i64) -> Result<Vec<Formula>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, topic_id, title, latex, description, created_at FROM formulas WHERE topic_id = ? ORDER BY id",
    )?;
    let formulas = stmt
        .query_map([topic_id], |row| {
            Ok(Formula {
                id: row.get(0)?,
                topic_id: row.get(1)?,
                title: row.get(2)?,
                latex: row.get(3)?,
                description: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(formulas)
}

pub fn delete_formula(db: &Database, id: i64) -> Result<()> {
    let conn = db.get()?;
    conn.execute("DELETE FROM formulas WHERE id = ?", [id])?;
    Ok(())
}

pub fn count_formulas(db: &Database) -> Result<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM formulas", [], |row| row.get(0))?;
    Ok(count)
}
