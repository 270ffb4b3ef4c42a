use crate::models::{Category, CategoryWithCount, CreateCategory};
use crate::services::slug::{generate_slug, validate_slug};
use crate::Database;
use anyhow::{bail, Result};

pub fn create_category(db: &Database, input: CreateCategory) -> Result<i64> {
    let slug = input
        .slug
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| generate_slug(&input.name));

    if !validate_slug(&slug) {
        bail!(
            "Invalid slug: must be 1-200 characters, lowercase letters, numbers, and hyphens only"
        );
    }

    let conn = db.get()?;
    conn.execute(
        "INSERT INTO categories (name, slug, description, icon) VALUES (?, ?, ?, ?)",
        (&input.name, &slug, &input.description, &input.icon),
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_category_by_slug(db: &Database, slug: &str) -> Result<Option<Category>> {
    let conn = db.get()?;
    let category = conn
        .query_row(
            "SELECT id, name, slug, description, icon FROM categories WHERE slug = ?",
            [slug],
            row_to_category,
        )
        .ok();
    Ok(category)
}

pub fn get_category_by_id(db: &Database, id: i64) -> Result<Option<Category>> {
    let conn = db.get()?;
    let category = conn
        .query_row(
            "SELECT id, name, slug, description, icon FROM categories WHERE id = ?",
            [id],
            row_to_category,
        )
        .ok();
    Ok(category)
}

pub fn list_categories(db: &Database) -> Result<Vec<Category>> {
    let conn = db.get()?;
    let mut stmt =
        conn.prepare("SELECT id, name, slug, description, icon FROM categories ORDER BY name")?;
    let categories = stmt
        .query_map([], row_to_category)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(categories)
}

pub fn list_categories_with_counts(db: &Database) -> Result<Vec<CategoryWithCount>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT c.id, c.name, c.slug, c.description, c.icon, COUNT(t.id) as topic_count
        FROM categories c
        LEFT JOIN topics t ON c.id = t.category_id
        GROUP BY c.id
        ORDER BY c.name
        "#,
    )?;
    let categories = stmt
        .query_map([], |row| {
            Ok(CategoryWithCount {
                category: Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    slug: row.get(2)?,
                    description: row.get(3)?,
                    icon: row.get(4)?,
                },
                topic_count: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(categories)
}

pub fn update_category(db: &Database, id: i64, input: CreateCategory) -> Result<()> {
    let slug = input
        .slug
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| generate_slug(&input.name));

    if !validate_slug(&slug) {
        bail!(
            "Invalid slug: must be 1-200 characters, lowercase letters, numbers, and hyphens only"
        );
    }

    let conn = db.get()?;
    conn.execute(
        "UPDATE categories SET name = ?, slug = ?, description = ?, icon = ? WHERE id = ?",
        (&input.name, &slug, &input.description, &input.icon, id),
    )?;
    Ok(())
}

pub fn delete_category(db: &Database, id: i64) -> Result<()> {
    let conn = db.get()?;
    conn.execute("DELETE FROM categories WHERE id = ?", [id])?;
    Ok(())
}

pub fn count_categories(db: &Database) -> Result<i64> {
    let conn = db.get()?;
    let count = conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
    Ok(count)
}

fn row_to_category(row: &rusqlite::Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        icon: row.get(4)?,
    })
}
