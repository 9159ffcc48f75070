//! Tests against a running MySQL server. Run with
//! `TEST_MYSQL_URL=mysql://... cargo test -p engine-tests -- --ignored`.

#[cfg(test)]
mod tests {
    use crate::{
        TEST_TABLE, mysql_pool, test_mysql_url,
        utils::{BASE_TS, flatten, ids, is_strictly_descending, seed, seed_sequential, walk},
    };
    use connectors::{
        adapter::Adapter,
        sql::base::{error::DbError, store::RecordStore},
    };
    use model::records::record::Record;
    use mysql_async::prelude::Queryable;
    use paginator::{
        error::RepositoryError, paginator::Paginator, repository::RecordRepository,
    };
    use planner::query::offsets::SeekOffset;
    use std::sync::Arc;
    use tracing_test::traced_test;

    async fn mysql_store() -> Arc<dyn RecordStore> {
        let store = Adapter::connect(&test_mysql_url())
            .await
            .expect("connect mysql")
            .into_store();
        store
            .recreate_table(TEST_TABLE)
            .await
            .expect("recreate test table");
        store
    }

    async fn row_count() -> i64 {
        let pool = mysql_pool();
        let mut conn = pool.get_conn().await.expect("mysql conn");
        let count: Option<i64> = conn
            .query_first(format!("SELECT COUNT(*) FROM `{TEST_TABLE}`"))
            .await
            .expect("count rows");
        drop(conn);
        pool.disconnect().await.ok();
        count.unwrap_or_default()
    }

    // Scenario: 6 rows in MySQL, page size 5.
    // Expected Outcome: 5 rows with a token, then 1 row without.
    #[traced_test]
    #[tokio::test]
    #[ignore = "requires a MySQL server (TEST_MYSQL_URL)"]
    async fn mysql_six_rows_split_into_five_and_one() {
        let store = mysql_store().await;
        seed_sequential(store.as_ref(), TEST_TABLE, 6).await;
        let paginator = Paginator::new(store, TEST_TABLE, Arc::new(SeekOffset::default()));

        let pages = walk(&paginator, 5, 10).await;

        assert_eq!(pages.len(), 2);
        assert_eq!(ids(&pages[0].records), vec!["5", "4", "3", "2", "1"]);
        assert_eq!(ids(&pages[1].records), vec!["0"]);
        assert!(pages[1].is_last());
    }

    // Scenario: Ties on created_at, walked through the rendered seek predicate.
    // Expected Outcome: Same order as get_all, no repeats.
    #[traced_test]
    #[tokio::test]
    #[ignore = "requires a MySQL server (TEST_MYSQL_URL)"]
    async fn mysql_traversal_matches_get_all() {
        let store = mysql_store().await;
        seed(
            store.as_ref(),
            TEST_TABLE,
            &[
                ("1", "a", BASE_TS),
                ("2", "a", BASE_TS),
                ("1", "b", BASE_TS),
                ("x|y", "b", BASE_TS),
                ("3", "a", BASE_TS - 10),
                ("4", "c", BASE_TS + 10),
            ],
        )
        .await;
        let expected = store.fetch_all(TEST_TABLE).await.unwrap();
        let paginator = Paginator::new(store, TEST_TABLE, Arc::new(SeekOffset::default()));

        for page_size in 1..=4 {
            let seen = flatten(&walk(&paginator, page_size, 20).await);
            assert_eq!(seen, expected, "page size {page_size}");
            assert!(is_strictly_descending(&seen));
        }
        assert_eq!(row_count().await, 6);
    }

    // Scenario: Insert through the repository and read the row back.
    // Expected Outcome: Timestamps come back unchanged in UTC; duplicates are reported.
    #[traced_test]
    #[tokio::test]
    #[ignore = "requires a MySQL server (TEST_MYSQL_URL)"]
    async fn mysql_repository_round_trip() {
        let repo = RecordRepository::new(mysql_store().await, TEST_TABLE);

        let inserted: Record = repo.insert("42", "user", Some("ctx")).await.unwrap();
        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![inserted]);

        let err = repo.insert("42", "user", None).await.unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::Database(DbError::DuplicateKey(_))
        ));
    }
}
