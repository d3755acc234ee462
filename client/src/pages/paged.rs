//! "Show more" paging shared by the search results and the admin tables.
//!
//! A page is requested with `startIndex` = rows already loaded. The server
//! returns at most `PAGE_SIZE` rows; a short page means there is nothing
//! more to fetch.

#[cfg(test)]
#[path = "paged_test.rs"]
mod paged_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ReadOutcome;

pub const PAGE_SIZE: usize = 9;

#[derive(Clone, Debug, PartialEq)]
pub struct Paged<T> {
    pub rows: Vec<T>,
    pub has_more: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), has_more: false, loading: true, error: None }
    }
}

impl<T> Paged<T> {
    /// `startIndex` for the next page.
    #[must_use]
    pub fn next_start(&self) -> usize {
        self.rows.len()
    }

    /// Fold one page's outcome into the table.
    ///
    /// A failed page keeps the rows and the "show more" state so the user can
    /// retry.
    pub fn apply_page(&mut self, outcome: ReadOutcome<Vec<T>>) {
        self.loading = false;
        match outcome {
            ReadOutcome::Loaded(page) => {
                self.has_more = page.len() >= PAGE_SIZE;
                self.rows.extend(page);
                self.error = None;
            }
            ReadOutcome::Empty => {
                self.has_more = false;
                self.error = None;
            }
            ReadOutcome::Failed(e) => self.error = Some(e.user_message()),
        }
    }

    /// Drop rows matching `pred`, e.g. after a successful delete.
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) {
        self.rows.retain(|row| !pred(row));
    }

    /// True once loading finished with nothing to show.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.error.is_none() && self.rows.is_empty()
    }
}

/// Request one page in the background and fold it into `table`.
pub(crate) fn fetch_page<T, Fut>(table: RwSignal<Paged<T>>, read: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = ReadOutcome<Vec<T>>> + 'static,
{
    table.update(|t| t.loading = true);
    leptos::task::spawn_local(async move {
        let outcome = read.await;
        if table.try_update(|t| t.apply_page(outcome)).is_none() {
            log::debug!("table closed before its page arrived");
        }
    });
}
