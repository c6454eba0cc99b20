//! Leptos rendering of the generic record list: one page component
//! parameterised over the record type, plus its grid and table layouts.

pub mod actions;
pub mod cell;
pub mod grid;
pub mod page;
pub mod state;
pub mod table;
pub mod toggle;

pub use page::RecordListPage;

use contracts::shared::record_list::{ListRecord, RecordStore};

/// Unwrap a seeded store; a rejected seed is logged and the page shows no records.
pub fn store_or_empty<R: ListRecord>(
    page_key: &str,
    store: anyhow::Result<RecordStore<R>>,
) -> RecordStore<R> {
    store.unwrap_or_else(|e| {
        log::error!("[{}] failed to build record store: {:#}", page_key, e);
        RecordStore::empty()
    })
}
