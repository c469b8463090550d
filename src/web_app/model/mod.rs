// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel over server functions, so everything here must
// compile for both the WASM client and the native server.

use serde::{Deserialize, Serialize};

#[cfg(feature = "db-tools")]
use sqlx::FromRow;

/// Longest category name the store accepts
pub const MAX_CATEGORY_NAME_LEN: usize = 255;

/// Category tag attached to a standard answer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db-tools", derive(FromRow))]
pub struct StandardAnswerCategory {
    pub id: i32,
    pub name: String,
}

/// A keyword/phrase paired with a canned markdown answer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardAnswer {
    pub id: i32,
    pub keyword: String,
    /// Markdown source
    pub answer: String,
    #[serde(default)]
    pub categories: Vec<StandardAnswerCategory>,
}

impl StandardAnswer {
    /// Fields the list page matches the search query against.
    ///
    /// `answer`, `id` and `categories` are deliberately absent.
    pub fn searchable_fields(&self) -> [&str; 1] {
        [self.keyword.as_str()]
    }
}

/// Payload for creating or updating a standard answer
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardAnswerRequest {
    pub keyword: String,
    pub answer: String,
    /// Category ids; each must already exist
    #[serde(default)]
    pub categories: Vec<i32>,
}

/// Seed file entry (categories referenced by name)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardAnswerSeed {
    pub keyword: String,
    pub answer: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StandardAnswer {
        StandardAnswer {
            id: 7,
            keyword: "Refund Policy".to_string(),
            answer: "Refunds take **5 days**".to_string(),
            categories: vec![StandardAnswerCategory {
                id: 1,
                name: "billing".to_string(),
            }],
        }
    }

    #[test]
    fn test_searchable_fields_only_keyword() {
        let answer = sample();
        assert_eq!(answer.searchable_fields(), ["Refund Policy"]);
    }

    #[test]
    fn test_categories_default_when_missing() {
        let json = r#"{"id": 3, "keyword": "vpn", "answer": "Use the portal"}"#;
        let answer: StandardAnswer = serde_json::from_str(json).unwrap();
        assert_eq!(answer.id, 3);
        assert!(answer.categories.is_empty());
    }

    #[test]
    fn test_seed_entry_parsing() {
        let json = r#"[{"keyword": "vpn", "answer": "Use the portal", "categories": ["it"]}]"#;
        let seeds: Vec<StandardAnswerSeed> = serde_json::from_str(json).unwrap();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].categories, vec!["it".to_string()]);
    }
}
