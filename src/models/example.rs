use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    pub id: i64,
    pub topic_id: i64,
    pub title: String,
    pub problem: String,
    pub solution: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateExample {
    pub title: String,
    pub problem: String,
    pub solution: String,
}
