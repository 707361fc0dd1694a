//! Frontend Models
//!
//! Data structures for lists and TMDB movie records.

use serde::{Deserialize, Serialize};

/// A named, tagged collection of movie references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    /// Comma-joined genre labels
    pub tags: String,
}

impl List {
    /// Split the joined tag string back into labels
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Merge a metadata update; identity never changes
    pub fn merged(&self, patch: &ListPatch) -> List {
        List {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            tags: patch.tags.clone().unwrap_or_else(|| self.tags.clone()),
        }
    }
}

/// Partial list-record update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListPatch {
    pub name: Option<String>,
    pub tags: Option<String>,
}

/// Output of the list initialization form (the registry mints the id)
#[derive(Debug, Clone, PartialEq)]
pub struct ListInit {
    pub name: String,
    /// Comma-joined genre labels
    pub tags: String,
}

/// TMDB movie detail record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_keeps_identity() {
        let list = List {
            id: "list-1".to_string(),
            name: "Action Favorites".to_string(),
            tags: "Action,Thriller".to_string(),
        };

        let merged = list.merged(&ListPatch {
            name: Some("Weekend Picks".to_string()),
            tags: None,
        });

        assert_eq!(merged.id, "list-1");
        assert_eq!(merged.name, "Weekend Picks");
        assert_eq!(merged.tags, "Action,Thriller");
    }

    #[test]
    fn test_tag_list_splits() {
        let list = List {
            id: "list-1".to_string(),
            name: "Action Favorites".to_string(),
            tags: "Action,Thriller".to_string(),
        };

        assert_eq!(list.tag_list(), vec!["Action", "Thriller"]);
    }
}
