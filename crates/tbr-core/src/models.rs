//! Data models for TBR
//!
//! Defines the core data structures: Book and Status.
//! Serialized field names and status spellings match the snapshot format,
//! so snapshots written by older versions parse unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reading progress of a tracked book
///
/// The snapshot format spells these `"inProgress"`, `"backlog"` and
/// `"done"`; code and CLI use the semantic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Currently reading
    #[serde(rename = "inProgress")]
    Reading,
    /// Saved for later (the default shelf for new additions)
    #[serde(rename = "backlog")]
    Later,
    /// Finished
    #[serde(rename = "done")]
    Done,
}

impl Status {
    /// All statuses in display order
    pub const ALL: [Status; 3] = [Status::Reading, Status::Later, Status::Done];

    /// Human-readable shelf heading
    pub fn heading(&self) -> &'static str {
        match self {
            Status::Reading => "Currently Reading",
            Status::Later => "For Later",
            Status::Done => "Done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Reading => "reading",
            Status::Later => "later",
            Status::Done => "done",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Status {
    type Err = String;

    /// Accepts both the semantic names and the snapshot spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reading" | "inProgress" => Ok(Status::Reading),
            "later" | "backlog" => Ok(Status::Later),
            "done" => Ok(Status::Done),
            other => Err(format!(
                "unknown status '{}' (expected reading, later or done)",
                other
            )),
        }
    }
}

/// One tracked reading-list entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Stable identifier assigned by the catalog (e.g. `/works/OL27448W`)
    pub key: String,
    /// Display title
    pub title: String,
    /// Author names, in catalog order
    #[serde(rename = "author_name", default)]
    pub authors: Vec<String>,
    /// Year of first publication, when the catalog knows it
    pub first_publish_year: Option<i64>,
    /// Median page count across editions, when the catalog knows it
    #[serde(rename = "number_of_pages_median")]
    pub pages_median: Option<i64>,
    /// Which shelf the book sits on
    pub status: Status,
}

impl Book {
    /// Create a new book on the For Later shelf
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            authors: Vec::new(),
            first_publish_year: None,
            pages_median: None,
            status: Status::Later,
        }
    }

    /// Author names joined for display, or "(unknown author)"
    pub fn author_line(&self) -> String {
        if self.authors.is_empty() {
            "(unknown author)".to_string()
        } else {
            self.authors.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_new() {
        let book = Book::new("/works/OL1W", "A Book");
        assert_eq!(book.key, "/works/OL1W");
        assert_eq!(book.title, "A Book");
        assert_eq!(book.status, Status::Later);
        assert!(book.authors.is_empty());
        assert!(book.first_publish_year.is_none());
        assert!(book.pages_median.is_none());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Reading.to_string(), "reading");
        assert_eq!(Status::Later.to_string(), "later");
        assert_eq!(Status::Done.to_string(), "done");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("reading".parse::<Status>().unwrap(), Status::Reading);
        assert_eq!("later".parse::<Status>().unwrap(), Status::Later);
        assert_eq!("done".parse::<Status>().unwrap(), Status::Done);
        // Snapshot spellings are accepted too
        assert_eq!("inProgress".parse::<Status>().unwrap(), Status::Reading);
        assert_eq!("backlog".parse::<Status>().unwrap(), Status::Later);
        assert!("shelved".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_serialized_spellings() {
        assert_eq!(
            serde_json::to_string(&Status::Reading).unwrap(),
            "\"inProgress\""
        );
        assert_eq!(serde_json::to_string(&Status::Later).unwrap(), "\"backlog\"");
        assert_eq!(serde_json::to_string(&Status::Done).unwrap(), "\"done\"");
    }

    #[test]
    fn test_book_serialized_field_names() {
        let mut book = Book::new("/works/OL1W", "A Book");
        book.authors = vec!["Someone".to_string()];
        book.first_publish_year = Some(1984);
        book.pages_median = Some(320);

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["author_name"][0], "Someone");
        assert_eq!(json["first_publish_year"], 1984);
        assert_eq!(json["number_of_pages_median"], 320);
        assert_eq!(json["status"], "backlog");
    }

    #[test]
    fn test_book_parses_null_page_count() {
        let json = r#"{
            "key": "/works/OL2W",
            "title": "No Pages Known",
            "author_name": ["A", "B"],
            "first_publish_year": 1999,
            "number_of_pages_median": null,
            "status": "done"
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.status, Status::Done);
        assert_eq!(book.authors.len(), 2);
        assert!(book.pages_median.is_none());
    }

    #[test]
    fn test_book_serialization_round_trip() {
        let mut book = Book::new("/works/OL3W", "Round Trip");
        book.authors = vec!["An Author".to_string()];
        book.first_publish_year = Some(2001);
        book.status = Status::Reading;

        let json = serde_json::to_string(&book).unwrap();
        let parsed: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, parsed);
    }

    #[test]
    fn test_author_line() {
        let mut book = Book::new("/works/OL4W", "Authors");
        assert_eq!(book.author_line(), "(unknown author)");

        book.authors = vec!["First".to_string(), "Second".to_string()];
        assert_eq!(book.author_line(), "First, Second");
    }
}
