//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use tbr_core::{Book, Status};

use crate::catalog::SearchPage;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print the reading list grouped by shelf
    ///
    /// Positions are 1-based per shelf; `reorder` accepts them as-is.
    pub fn print_shelves(&self, books: &[Book], only: Option<Status>) {
        match self.format {
            OutputFormat::Human => {
                if books.is_empty() {
                    println!("Your reading list is empty.");
                    return;
                }

                let shelves: Vec<Status> = match only {
                    Some(status) => vec![status],
                    None => Status::ALL.to_vec(),
                };

                let mut printed = 0;
                for status in shelves {
                    let shelf: Vec<&Book> =
                        books.iter().filter(|b| b.status == status).collect();
                    if shelf.is_empty() {
                        continue;
                    }

                    if printed > 0 {
                        println!();
                    }
                    println!("{} ({})", status.heading(), shelf.len());
                    for (position, book) in shelf.iter().enumerate() {
                        println!(
                            "{:>3}. {} | {} | {}",
                            position + 1,
                            truncate(&book.title, 40),
                            truncate(&book.author_line(), 30),
                            book.key
                        );
                    }
                    printed += 1;
                }

                if printed == 0 {
                    println!("No books on that shelf.");
                }
            }
            OutputFormat::Json => {
                let filtered: Vec<&Book> = books
                    .iter()
                    .filter(|b| only.map_or(true, |status| b.status == status))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&filtered).unwrap());
            }
            OutputFormat::Quiet => {
                for book in books
                    .iter()
                    .filter(|b| only.map_or(true, |status| b.status == status))
                {
                    println!("{}", book.key);
                }
            }
        }
    }

    /// Print one page of catalog search results
    pub fn print_search_results(&self, page: &SearchPage, current: u32, total_pages: u64) {
        match self.format {
            OutputFormat::Human => {
                if page.docs.is_empty() {
                    println!("No matches found.");
                    return;
                }

                for (index, doc) in page.docs.iter().enumerate() {
                    let year = doc
                        .first_publish_year
                        .map(|y| y.to_string())
                        .unwrap_or_else(|| "----".to_string());
                    let pages = doc
                        .number_of_pages_median
                        .map(|p| format!("{} pp", p))
                        .unwrap_or_else(|| "? pp".to_string());
                    println!(
                        "{:>3}. {} | {} | {} | {} | {}",
                        index + 1,
                        truncate(&doc.title, 40),
                        truncate(&doc.author_name.join(", "), 25),
                        year,
                        pages,
                        doc.key
                    );
                }
                println!(
                    "\nPage {} of {} ({} match(es))",
                    current, total_pages, page.num_found
                );
            }
            OutputFormat::Json => {
                let docs: Vec<_> = page
                    .docs
                    .iter()
                    .map(|d| {
                        serde_json::json!({
                            "key": d.key,
                            "title": d.title,
                            "author_name": d.author_name,
                            "first_publish_year": d.first_publish_year,
                            "number_of_pages_median": d.number_of_pages_median,
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::json!({
                        "num_found": page.num_found,
                        "page": current,
                        "docs": docs
                    })
                );
            }
            OutputFormat::Quiet => {
                for doc in &page.docs {
                    println!("{}", doc.key);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Must not split inside a multi-byte character
        assert_eq!(truncate("crème brûlée à volonté", 10), "crème b...");
    }

    #[test]
    fn test_should_prompt_only_in_human_mode() {
        assert!(Output::new(OutputFormat::Human).should_prompt());
        assert!(!Output::new(OutputFormat::Json).should_prompt());
        assert!(!Output::new(OutputFormat::Quiet).should_prompt());
    }
}
