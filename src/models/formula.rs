use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formula {
    pub id: i64,
    pub topic_id: i64,
    pub title: String,
    pub latex: String,
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateFormula {
    pub title: String,
    pub latex: String,
    pub description: Option<String>,
}
