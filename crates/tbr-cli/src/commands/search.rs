//! Search command handler

use anyhow::{bail, Context, Result};
use tracing::warn;

use tbr_core::Store;

use crate::catalog::{CatalogClient, SearchPage};
use crate::output::Output;

/// Search the catalog and print one page of results
///
/// A failed search is reported as an empty result set rather than an
/// error exit; the warning goes to the log.
pub async fn run(store: &Store, query: String, page: u32, output: &Output) -> Result<()> {
    if page == 0 {
        bail!("Pages start at 1");
    }

    let catalog = CatalogClient::new(store.config().search_page_size)
        .context("Failed to build catalog client")?;

    let results = match catalog.search(&query, page).await {
        Ok(results) => results,
        Err(e) => {
            warn!("Catalog search for '{}' failed: {:#}", query, e);
            SearchPage::default()
        }
    };

    let total_pages = catalog.page_count(results.num_found);
    output.print_search_results(&results, page, total_pages);
    Ok(())
}
