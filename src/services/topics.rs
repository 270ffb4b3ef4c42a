use crate::models::{Category, CreateTopic, Difficulty, Topic, TopicSummary, TopicWithCategory};
use crate::services::slug::{generate_slug, validate_slug};
use crate::Database;
use anyhow::{bail, Result};

const SUMMARY_COLUMNS: &str = r#"
    SELECT t.id, t.title, t.slug, t.description, t.category_id, c.slug, c.name, t.difficulty, t.views
    FROM topics t
    JOIN categories c ON t.category_id = c.id
"#;

pub fn create_topic(db: &Database, input: CreateTopic) -> Result<i64> {
    let slug = input
        .slug
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| generate_slug(&input.title));

    if !validate_slug(&slug) {
        bail!(
            "Invalid slug: must be 1-200 characters, lowercase letters, numbers, and hyphens only"
        );
    }

    // Topic content is author-supplied HTML; sanitize before it is stored.
    let content = ammonia::clean(&input.content);

    let conn = db.get()?;
    conn.execute(
        r#"
        INSERT INTO topics (title, slug, description, content, category_id, difficulty)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
        (
            &input.title,
            &slug,
            &input.description,
            &content,
            input.category_id,
            input.difficulty.to_string(),
        ),
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_topic(db: &Database, id: i64, input: CreateTopic) -> Result<()> {
    let slug = input
        .slug
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| generate_slug(&input.title));

    if !validate_slug(&slug) {
        bail!(
            "Invalid slug: must be 1-200 characters, lowercase letters, numbers, and hyphens only"
        );
    }

    let content = ammonia::clean(&input.content);
    let updated_at = chrono::Utc::now().to_rfc3339();

    let conn = db.get()?;
    conn.execute(
        r#"
        UPDATE topics SET title = ?, slug = ?, description = ?, content = ?,
            category_id = ?, difficulty = ?, updated_at = ?
        WHERE id = ?
        "#,
        (
            &input.title,
            &slug,
            &input.description,
            &content,
            input.category_id,
            input.difficulty.to_string(),
            &updated_at,
            id,
        ),
    )?;
    Ok(())
}

pub fn delete_topic(db: &Database, id: i64) -> Result<()> {
    let conn = db.get()?;
    conn.execute("DELETE FROM topics WHERE id = ?", [id])?;
    Ok(())
}

pub fn get_topic_by_id(db: &Database, id: i64) -> Result<Option<Topic>> {
    let conn = db.get()?;
    let topic = conn
        .query_row(
            "SELECT id, title, slug, description, content, category_id, difficulty, views, created_at, updated_at FROM topics WHERE id = ?",
            [id],
            row_to_topic,
        )
        .ok();
    Ok(topic)
}

pub fn get_topic_by_slug(db: &Database, slug: &str) -> Result<Option<TopicWithCategory>> {
    let conn = db.get()?;
    let topic: Option<Topic> = conn
        .query_row(
            "SELECT id, title, slug, description, content, category_id, difficulty, views, created_at, updated_at FROM topics WHERE slug = ?",
            [slug],
            row_to_topic,
        )
        .ok();

    match topic {
        Some(t) => {
            let category = conn
                .query_row(
                    "SELECT id, name, slug, description, icon FROM categories WHERE id = ?",
                    [t.category_id],
                    |row| {
                        Ok(Category {
                            id: row.get(0)?,
                            name: row.get(1)?,
                            slug: row.get(2)?,
                            description: row.get(3)?,
                            icon: row.get(4)?,
                        })
                    },
                )
                .ok();
            Ok(Some(TopicWithCategory { topic: t, category }))
        }
        None => Ok(None),
    }
}

pub fn list_topics(db: &Database, limit: usize, offset: usize) -> Result<Vec<TopicSummary>> {
    let conn = db.get()?;
    let sql = format!("{} ORDER BY t.title LIMIT ? OFFSET ?", SUMMARY_COLUMNS);
    let mut stmt = conn.prepare(&sql)?;
    let topics = stmt
        .query_map((limit, offset), row_to_summary)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(topics)
}

pub fn list_topics_by_category(db: &Database, category_id: i64) -> Result<Vec<TopicSummary>> {
    let conn = db.get()?;
    let sql = format!("{} WHERE t.category_id = ? ORDER BY t.title", SUMMARY_COLUMNS);
    let mut stmt = conn.prepare(&sql)?;
    let topics = stmt
        .query_map([category_id], row_to_summary)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(topics)
}

pub fn featured_topics(db: &Database, limit: usize) -> Result<Vec<TopicSummary>> {
    let conn = db.get()?;
    let sql = format!("{} ORDER BY t.views DESC LIMIT ?", SUMMARY_COLUMNS);
    let mut stmt = conn.prepare(&sql)?;
    let topics = stmt
        .query_map([limit], row_to_summary)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(topics)
}

pub fn related_topics(
    db: &Database,
    category_id: i64,
    exclude_id: i64,
    limit: usize,
) -> Result<Vec<TopicSummary>> {
    let conn = db.get()?;
    let sql = format!(
        "{} WHERE t.category_id = ? AND t.id != ? ORDER BY t.views DESC LIMIT ?",
        SUMMARY_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let topics = stmt
        .query_map((category_id, exclude_id, limit), row_to_summary)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(topics)
}

pub fn record_view(db: &Database, id: i64) -> Result<()> {
    let conn = db.get()?;
    conn.execute("UPDATE topics SET views = views + 1 WHERE id = ?", [id])?;
    Ok(())
}

pub fn count_topics(db: &Database) -> Result<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM topics", [], |row| row.get(0))?;
    Ok(count)
}

fn row_to_topic(row: &rusqlite::Row) -> rusqlite::Result<Topic> {
    Ok(Topic {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        content: row.get(4)?,
        category_id: row.get(5)?,
        difficulty: row.get::<_, String>(6)?.parse().unwrap_or_default(),
        views: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn row_to_summary(row: &rusqlite::Row) -> rusqlite::Result<TopicSummary> {
    Ok(TopicSummary {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        category_id: row.get(4)?,
        category_slug: row.get(5)?,
        category_name: row.get(6)?,
        difficulty: row.get::<_, String>(7)?.parse().unwrap_or_default(),
        views: row.get(8)?,
    })
}
