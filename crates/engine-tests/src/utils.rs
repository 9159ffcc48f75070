#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use connectors::sql::base::store::RecordStore;
use model::{pagination::page::Page, records::record::Record};
use paginator::paginator::Paginator;

/// Base timestamp for seeded rows (2023-11-14T22:13:20Z).
pub const BASE_TS: i64 = 1_700_000_000;

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// Inserts `(resource_id, resource_type, unix seconds)` rows directly
/// through the store so tests control `created_at`.
pub async fn seed(store: &dyn RecordStore, table: &str, rows: &[(&str, &str, i64)]) {
    for (id, ty, secs) in rows {
        store
            .insert(table, &Record::new(*id, *ty, None, at(*secs)))
            .await
            .unwrap_or_else(|e| panic!("seed {ty}/{id}: {e}"));
    }
}

/// Seeds `n` rows; row `i` is created `i` seconds after `BASE_TS`.
pub async fn seed_sequential(store: &dyn RecordStore, table: &str, n: usize) {
    for i in 0..n {
        let record = Record::new(format!("{i}"), "user", None, at(BASE_TS + i as i64));
        store.insert(table, &record).await.unwrap();
    }
}

/// Follows continuation tokens from the first page to the last one.
///
/// Panics if the walk does not end within `max_pages`.
pub async fn walk(paginator: &Paginator, page_size: i64, max_pages: usize) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut token = String::new();

    loop {
        let page = paginator
            .get_page(&token, page_size)
            .await
            .expect("page request");
        let next = page.next_continuation_token.clone();
        pages.push(page);

        match next {
            Some(next) => token = next,
            None => break,
        }
        assert!(pages.len() < max_pages, "walk did not terminate");
    }

    pages
}

pub fn flatten(pages: &[Page]) -> Vec<Record> {
    pages.iter().flat_map(|p| p.records.iter().cloned()).collect()
}

pub fn ids(records: &[Record]) -> Vec<String> {
    records.iter().map(|r| r.resource_id.clone()).collect()
}

/// True when every row is strictly before its predecessor in page order.
pub fn is_strictly_descending(records: &[Record]) -> bool {
    records
        .windows(2)
        .all(|pair| pair[0].position() > pair[1].position())
}
