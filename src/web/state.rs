use crate::{Config, Database};
use anyhow::Result;
use std::collections::HashMap;
use tera::{Tera, Value};

pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub templates: Tera,
}

impl AppState {
    pub fn new(config: Config, db: Database) -> Result<Self> {
        let mut templates = Tera::default();

        templates.register_filter("format_date", format_date_filter);
        templates.add_raw_templates(vec![
            ("css/bundle.css", include_str!("../../templates/css/bundle.css")),
            ("js/main.js", include_str!("../../templates/js/main.js")),
            ("base.html", include_str!("../../templates/base.html")),
            ("public/index.html", include_str!("../../templates/public/index.html")),
            ("public/about.html", include_str!("../../templates/public/about.html")),
            ("public/contact.html", include_str!("../../templates/public/contact.html")),
            ("public/search.html", include_str!("../../templates/public/search.html")),
            ("public/404.html", include_str!("../../templates/public/404.html")),
            ("topics/index.html", include_str!("../../templates/topics/index.html")),
            ("topics/category.html", include_str!("../../templates/topics/category.html")),
            ("topics/view.html", include_str!("../../templates/topics/view.html")),
            ("admin/base.html", include_str!("../../templates/admin/base.html")),
            ("admin/dashboard.html", include_str!("../../templates/admin/dashboard.html")),
            ("admin/categories.html", include_str!("../../templates/admin/categories.html")),
            ("admin/category_form.html", include_str!("../../templates/admin/category_form.html")),
            ("admin/topics.html", include_str!("../../templates/admin/topics.html")),
            ("admin/topic_form.html", include_str!("../../templates/admin/topic_form.html")),
        ])?;

        Ok(Self {
            config,
            db,
            templates,
        })
    }
}

fn format_date_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let date_str = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("format_date requires a string"))?;

    let format = args
        .get("format")
        .and_then(|v| v.as_str())
        .unwrap_or("%B %d, %Y");

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date_str) {
        return Ok(Value::String(dt.format(format).to_string()));
    }

    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Ok(Value::String(dt.format(format).to_string()));
    }

    Ok(Value::String(date_str.to_string()))
}
