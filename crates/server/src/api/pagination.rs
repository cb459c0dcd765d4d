//! Pagination query parameters for list endpoints.

use courtstat_domain::page::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use courtstat_domain::Page;
use serde::Deserialize;

/// Raw `?page_size=&page_number=` parameters.
///
/// Missing or unparseable values silently fall back to the defaults (a
/// deliberate leniency policy); parsed but non-positive values pass through
/// so the use-case layer can reject them.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page_size: Option<String>,
    pub page_number: Option<String>,
}

impl ListQuery {
    pub fn page(&self, entity: &str) -> Page {
        let size = match self.page_size.as_deref().unwrap_or_default().parse::<i64>() {
            Ok(size) => size,
            Err(_) => {
                tracing::warn!(entity, "using default page size {DEFAULT_PAGE_SIZE}");
                DEFAULT_PAGE_SIZE
            }
        };
        let number = match self
            .page_number
            .as_deref()
            .unwrap_or_default()
            .parse::<i64>()
        {
            Ok(number) => number,
            Err(_) => {
                tracing::warn!(entity, "using default page number {DEFAULT_PAGE_NUMBER}");
                DEFAULT_PAGE_NUMBER
            }
        };

        Page::new(size, number)
    }
}
