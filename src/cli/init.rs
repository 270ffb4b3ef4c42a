use anyhow::Result;
use std::path::PathBuf;

pub async fn run(path: PathBuf, name: Option<String>) -> Result<()> {
    let site_name = name.unwrap_or_else(|| "Mathmerise".to_string());

    std::fs::create_dir_all(&path)?;
    std::fs::create_dir_all(path.join("data"))?;

    let config = format!(
        r#"[site]
title = "{}"
description = "Master mathematics, one topic at a time"
url = "http://localhost:3000"
language = "en"

[server]
host = "127.0.0.1"
port = 3000

[database]
path = "./data/mathmerise.db"

[content]
topics_per_page = 20
featured_limit = 6
related_limit = 4
"#,
        site_name
    );

    std::fs::write(path.join("mathmerise.toml"), config)?;

    tracing::info!("Created new site at {:?}", path);
    tracing::info!("Run 'mathmerise migrate' to set up the database");
    tracing::info!("Run 'mathmerise seed' to load sample content");
    tracing::info!("Run 'mathmerise serve' to start the server");

    Ok(())
}
