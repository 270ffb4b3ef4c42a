use super::Category;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: String,
    pub category_id: i64,
    pub difficulty: Difficulty,
    pub views: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicWithCategory {
    #[serde(flatten)]
    pub topic: Topic,
    pub category: Option<Category>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTopic {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub content: String,
    pub category_id: i64,
    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicSummary {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub category_id: i64,
    pub category_slug: String,
    pub category_name: String,
    pub difficulty: Difficulty,
    pub views: i64,
}
