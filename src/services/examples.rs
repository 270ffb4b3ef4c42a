use crate::models::{CreateExample, Example};
use crate::Database;
use anyhow::Result;

pub fn add_example(db: &Database, topic_id: i64, input: CreateExample) -> Result<i64> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO examples (topic_id, title, problem, solution) VALUES (?, ?, ?, ?)",
        (topic_id, &input.title, &input.problem, &input.solution),
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_examples(db: &Database, topic_id: i64) -> Result<Vec<Example>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, topic_id, title, problem, solution, created_at FROM examples WHERE topic_id = ? ORDER BY id",
    )?;
    let examples = stmt
        .query_map([topic_id], |row| {
            Ok(Example {
                id: row.get(0)?,
                topic_id: row.get(1)?,
                title: row.get(2)?,
                problem: row.get(3)?,
                solution: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(examples)
}

pub fn delete_example(db: &Database, id: i64) -> Result<()> {
    let conn = db.get()?;
    conn.execute("DELETE FROM examples WHERE id = ?", [id])?;
    Ok(())
}

pub fn count_examples(db: &Database) -> Result<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM examples", [], |row| row.get(0))?;
    Ok(count)
}
