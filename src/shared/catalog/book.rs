//! Book wire types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A book in the catalog.
///
/// `added_by_name` is a denormalized copy of the owner's display name taken
/// at creation time; renaming a user does not rewrite it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    pub year: i32,
    pub added_by: Uuid,
    pub added_by_name: String,
}

/// Body of `POST /books`.
///
/// String fields default to empty so a missing field is reported as a
/// required-field error by the handler instead of a serde rejection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    pub year: i32,
}

/// Plain `{message}` body used for delete confirmations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_uses_api_field_names() {
        let book = Book {
            id: Uuid::new_v4(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            description: "Desert planet".to_string(),
            genre: "Science Fiction".to_string(),
            year: 1965,
            added_by: Uuid::new_v4(),
            added_by_name: "Ana".to_string(),
        };

        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("_id").is_some());
        assert!(json.get("addedBy").is_some());
        assert!(json.get("addedByName").is_some());
        assert!(json.get("added_by").is_none());
    }

    #[test]
    fn new_book_missing_fields_default_empty() {
        let req: NewBook = serde_json::from_str(r#"{"title":"Dune"}"#).unwrap();
        assert_eq!(req.title, "Dune");
        assert!(req.author.is_empty());
        assert_eq!(req.year, 0);
    }

    #[test]
    fn genre_list_has_ten_entries() {
        assert_eq!(super::super::GENRES.len(), 10);
        assert!(super::super::GENRES.contains(&"Fantasy"));
    }
}
