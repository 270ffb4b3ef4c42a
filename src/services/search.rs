use crate::models::TopicSummary;
use crate::Database;
use anyhow::Result;

/// Case-insensitive substring search over topic titles and descriptions.
pub fn search_topics(db: &Database, query: &str, limit: usize) -> Result<Vec<TopicSummary>> {
    let pattern = format!("%{}%", query.trim().to_lowercase());
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT t.id, t.title, t.slug, t.description, t.category_id, c.slug, c.name, t.difficulty, t.views
        FROM topics t
        JOIN categories c ON t.category_id = c.id
        WHERE LOWER(t.title) LIKE ?1 OR LOWER(COALESCE(t.description, '')) LIKE ?1
        ORDER BY t.views DESC
        LIMIT ?2
        "#,
    )?;

    let results = stmt
        .query_map((&pattern, limit), |row| {
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
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(results)
}
