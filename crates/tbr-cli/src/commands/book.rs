//! Reading-list command handlers

use anyhow::{bail, Context, Result};
use tracing::warn;

use tbr_core::{Book, Status, Store};

use crate::catalog::CatalogClient;
use crate::output::Output;
use crate::prompt::confirm;

/// Search the catalog and add one result to the For Later shelf
///
/// `pick` is the 1-based rank among the first page of results.
pub async fn add(store: &mut Store, query: String, pick: usize, output: &Output) -> Result<()> {
    if pick == 0 {
        bail!("--pick positions start at 1");
    }

    let catalog = CatalogClient::new(store.config().search_page_size)
        .context("Failed to build catalog client")?;
    let page = catalog
        .search(&query, 1)
        .await
        .context("Catalog search failed")?;

    if page.docs.is_empty() {
        output.message(&format!("No matches for '{}'.", query));
        return Ok(());
    }

    let available = page.docs.len();
    let Some(doc) = page.docs.into_iter().nth(pick - 1) else {
        bail!(
            "Only {} result(s) on the first page; --pick {} is out of range",
            available,
            pick
        );
    };

    let book: Book = doc.into();

    if store.get_book(&book.key).is_some() {
        output.message(&format!("'{}' is already on your list.", book.title));
        return Ok(());
    }

    let title = book.title.clone();
    let key = book.key.clone();
    store.add_book(book);

    output.success(&format!("Added '{}' to For Later ({})", title, key));
    Ok(())
}

/// Show the reading list, optionally a single shelf
pub fn list(store: &Store, shelf: Option<Status>, output: &Output) -> Result<()> {
    output.print_shelves(store.books(), shelf);
    Ok(())
}

/// Move a book to another shelf
pub fn move_book(store: &mut Store, key: String, shelf: Status, output: &Output) -> Result<()> {
    let Some(book) = store.get_book(&key) else {
        bail!("No book with key '{}' on your list", key);
    };

    if book.status == shelf {
        output.message(&format!("'{}' is already on that shelf.", book.title));
        return Ok(());
    }

    let title = book.title.clone();
    store.move_book(&key, shelf);

    output.success(&format!("Moved '{}' to {}", title, shelf.heading()));
    Ok(())
}

/// Reorder a shelf; positions are 1-based as shown by `list`
pub fn reorder(
    store: &mut Store,
    shelf: Status,
    from: usize,
    to: usize,
    output: &Output,
) -> Result<()> {
    if from == 0 || to == 0 {
        bail!("Positions start at 1 (as shown by `tbr list`)");
    }

    store
        .reorder_books(shelf, from - 1, to - 1)
        .with_context(|| format!("Cannot reorder the {} shelf", shelf.heading()))?;

    output.success(&format!(
        "Moved position {} to {} on {}",
        from,
        to,
        shelf.heading()
    ));
    Ok(())
}

/// Remove a book, after confirmation
pub fn remove(store: &mut Store, key: String, output: &Output) -> Result<()> {
    if store.get_book(&key).is_none() {
        bail!("No book with key '{}' on your list", key);
    }

    let prompting = output.should_prompt();
    let removed = store.remove_book(&key, |book| {
        if !prompting {
            return true;
        }
        println!("Remove: {} - {}", book.title, book.author_line());
        match confirm("Are you sure?") {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Confirmation prompt failed: {}", e);
                false
            }
        }
    });

    if removed {
        output.success(&format!("Removed {}", key));
    } else {
        output.message("Cancelled.");
    }

    Ok(())
}
