//! Catalog service: validates, builds and stores items, and reports daily
//! average prices.

use crate::core::clock::Clock;
use crate::core::id::IdGenerator;
use crate::core::item::Item;
use crate::core::statistics::compute_daily_averages;
use crate::core::store::ItemStore;
use crate::core::validator::{validate_price, validate_title_shape, validate_title_unique};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info};

pub struct CatalogService {
    store: Arc<dyn ItemStore>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl CatalogService {
    pub fn new(
        store: Arc<dyn ItemStore>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { store, ids, clock }
    }

    /// Validates and stores a new item, returning what was stored.
    ///
    /// Title presence and length are checked first; only then is a fresh
    /// snapshot of stored titles read for the uniqueness check. Validation
    /// failures surface as [`CatalogError`] and happen before an id is taken
    /// or anything is written; errors from the store are returned as-is.
    ///
    /// The snapshot-then-insert sequence is not atomic, so two concurrent
    /// calls with the same title can both pass the uniqueness check.
    ///
    /// [`CatalogError`]: crate::core::error::CatalogError
    pub async fn add_item(&self, title: Option<&str>, price: Option<Decimal>) -> Result<Item> {
        let title = validate_title_shape(title)?;

        let existing_titles: HashSet<String> = self
            .store
            .find_all()
            .await?
            .into_iter()
            .map(|item| item.title().to_string())
            .collect();
        debug!("Checking title against {} stored titles", existing_titles.len());

        validate_title_unique(title, &existing_titles)?;
        let price = validate_price(price)?;

        let item = Item::new(self.ids.next_id(), title, price, self.clock.now());
        self.store.store(item.clone()).await?;
        info!(id = item.id(), title = item.title(), price = %item.price(), "Stored item");
        Ok(item)
    }

    /// Average price per day over every stored item, excluding the current
    /// UTC day.
    pub async fn get_statistics(&self) -> Result<BTreeMap<NaiveDate, Decimal>> {
        let items = self.store.find_all().await?;
        let today = self.clock.today();
        debug!("Computing statistics over {} items, today is {today}", items.len());
        compute_daily_averages(&items, today)
    }

    /// Every stored item ordered by id.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let mut items = self.store.find_all().await?;
        items.sort_by_key(Item::id);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::error::CatalogError;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::str::FromStr;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        items: Mutex<Vec<Item>>,
        store_calls: AtomicUsize,
        find_all_calls: AtomicUsize,
        fail_store: bool,
        fail_find_all: bool,
    }

    impl RecordingStore {
        fn with_items(items: Vec<Item>) -> Self {
            Self {
                items: Mutex::new(items),
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail_store: true,
                ..Default::default()
            }
        }

        fn unreadable() -> Self {
            Self {
                fail_find_all: true,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl ItemStore for RecordingStore {
        async fn store(&self, item: Item) -> Result<()> {
            self.store_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_store {
                return Err(anyhow!("disk full"));
            }
            self.items.lock().await.push(item);
            Ok(())
        }

        async fn find_all(&self) -> Result<Vec<Item>> {
            self.find_all_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_find_all {
                return Err(anyhow!("store offline"));
            }
            Ok(self.items.lock().await.clone())
        }
    }

    struct CountingIds {
        next: AtomicU64,
        calls: AtomicUsize,
    }

    impl CountingIds {
        fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl IdGenerator for CountingIds {
        fn next_id(&self) -> u64 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.next.fetch_add(1, Ordering::SeqCst)
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 30, 0).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn service(store: Arc<RecordingStore>, ids: Arc<CountingIds>) -> CatalogService {
        CatalogService::new(store, ids, Arc::new(FixedClock(now())))
    }

    fn catalog_error(err: anyhow::Error) -> CatalogError {
        err.downcast::<CatalogError>().expect("expected a CatalogError")
    }

    #[tokio::test]
    async fn test_add_item_happy_path() {
        let store = Arc::new(RecordingStore::default());
        let ids = Arc::new(CountingIds::starting_at(1));
        let service = service(Arc::clone(&store), Arc::clone(&ids));

        let item = service
            .add_item(Some("expected"), Some(Decimal::from(100)))
            .await
            .unwrap();

        assert_eq!(item.id(), 1);
        assert_eq!(item.title(), "expected");
        assert_eq!(item.price().to_string(), "100.00");
        assert_eq!(item.created_at(), now());

        let stored = store.items.lock().await.clone();
        assert_eq!(stored, vec![item]);
        assert_eq!(store.store_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_add_item_keeps_raw_title() {
        let store = Arc::new(RecordingStore::default());
        let service = service(Arc::clone(&store), Arc::new(CountingIds::starting_at(0)));

        let item = service
            .add_item(Some("  padded "), Some(Decimal::from(20)))
            .await
            .unwrap();

        assert_eq!(item.title(), "  padded ");
    }

    #[tokio::test]
    async fn test_add_item_rounds_price() {
        let store = Arc::new(RecordingStore::default());
        let service = service(Arc::clone(&store), Arc::new(CountingIds::starting_at(0)));

        let item = service
            .add_item(Some("rounded"), Some(dec("15.004")))
            .await
            .unwrap();
        assert_eq!(item.price().to_string(), "15.00");

        let item = service
            .add_item(Some("rounded up"), Some(dec("15.005")))
            .await
            .unwrap();
        assert_eq!(item.price().to_string(), "15.01");
    }

    #[tokio::test]
    async fn test_add_item_validation_failures_do_not_touch_collaborators() {
        let cases: Vec<(Option<&str>, Option<Decimal>, &str)> = vec![
            (None, Some(dec("100")), "Title is mandatory"),
            (Some("    "), Some(dec("100")), "Title is mandatory"),
            (Some("aa"), Some(dec("100")), "Title length should be from 3 to 3"),
            (
                Some("aaaaaaaaaaaaaaaaaaaaa"),
                Some(dec("100")),
                "Title length should be from 3 to 3",
            ),
            (Some("expected"), None, "Price is mandatory"),
            (Some("expected"), Some(dec("14")), "Price is less than 15"),
            (Some("expected"), Some(dec("14.999")), "Price is less than 15"),
        ];

        for (title, price, expected) in cases {
            let store = Arc::new(RecordingStore::default());
            let ids = Arc::new(CountingIds::starting_at(0));
            let service = service(Arc::clone(&store), Arc::clone(&ids));

            let err = service.add_item(title, price).await.unwrap_err();

            assert_eq!(
                catalog_error(err),
                CatalogError::invalid_argument(expected),
                "title={title:?} price={price:?}"
            );
            assert_eq!(ids.calls.load(Ordering::SeqCst), 0);
            assert_eq!(store.store_calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_add_item_rejects_duplicate_title() {
        let store = Arc::new(RecordingStore::default());
        let ids = Arc::new(CountingIds::starting_at(1));
        let service = service(Arc::clone(&store), Arc::clone(&ids));

        service
            .add_item(Some("expected"), Some(Decimal::from(100)))
            .await
            .unwrap();
        let err = service
            .add_item(Some("expected"), Some(Decimal::from(100)))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Title is not unique");
        assert!(err.downcast_ref::<CatalogError>().is_some());
        assert_eq!(ids.calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.store_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_add_item_checks_title_before_price() {
        let service = service(
            Arc::new(RecordingStore::default()),
            Arc::new(CountingIds::starting_at(0)),
        );

        let err = service.add_item(None, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Title is mandatory");
    }

    #[tokio::test]
    async fn test_add_item_checks_title_shape_before_reading_store() {
        let store = Arc::new(RecordingStore::unreadable());
        let service = service(Arc::clone(&store), Arc::new(CountingIds::starting_at(0)));

        let err = service.add_item(None, Some(dec("100"))).await.unwrap_err();
        assert_eq!(err.to_string(), "Title is mandatory");

        let err = service.add_item(Some("aa"), Some(dec("100"))).await.unwrap_err();
        assert_eq!(err.to_string(), "Title length should be from 3 to 3");
        assert_eq!(store.find_all_calls.load(Ordering::SeqCst), 0);

        let err = service
            .add_item(Some("expected"), Some(dec("100")))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "store offline");
        assert!(err.downcast_ref::<CatalogError>().is_none());
        assert_eq!(store.find_all_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_add_item_rejects_price_without_room_for_cents() {
        let store = Arc::new(RecordingStore::default());
        let service = service(Arc::clone(&store), Arc::new(CountingIds::starting_at(0)));

        let err = service
            .add_item(Some("huge"), Some(dec("50000000000000000000000000000")))
            .await
            .unwrap_err();

        assert_eq!(
            catalog_error(err),
            CatalogError::invalid_argument("Price is too large")
        );
        assert_eq!(store.store_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_statistics_reports_overflow() {
        let yesterday = now() - Duration::days(1);
        let huge = dec("50000000000000000000000000000");
        let store = Arc::new(RecordingStore::with_items(vec![
            Item::new(1, "huge1", huge, yesterday),
            Item::new(2, "huge2", huge, yesterday),
        ]));
        let service = service(store, Arc::new(CountingIds::starting_at(3)));

        let err = service.get_statistics().await.unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[tokio::test]
    async fn test_add_item_propagates_store_failure() {
        let store = Arc::new(RecordingStore::failing());
        let service = service(Arc::clone(&store), Arc::new(CountingIds::starting_at(0)));

        let err = service
            .add_item(Some("expected"), Some(Decimal::from(100)))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "disk full");
        assert!(err.downcast_ref::<CatalogError>().is_none());
    }

    #[tokio::test]
    async fn test_get_statistics_excludes_today() {
        let yesterday = now() - Duration::days(1);
        let store = Arc::new(RecordingStore::with_items(vec![
            Item::new(1, "title1", dec("100"), yesterday),
            Item::new(2, "title2", dec("100"), yesterday),
            Item::new(3, "title3", dec("200"), now()),
        ]));
        let service = service(store, Arc::new(CountingIds::starting_at(4)));

        let stats = service.get_statistics().await.unwrap();

        let expected = BTreeMap::from([(yesterday.date_naive(), dec("100.00"))]);
        assert_eq!(stats, expected);
    }

    #[tokio::test]
    async fn test_get_statistics_empty_when_only_today() {
        let store = Arc::new(RecordingStore::with_items(vec![Item::new(
            1,
            "title1",
            dec("200"),
            now(),
        )]));
        let service = service(store, Arc::new(CountingIds::starting_at(2)));

        assert!(service.get_statistics().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_items_sorted_by_id() {
        let store = Arc::new(RecordingStore::with_items(vec![
            Item::new(5, "later", dec("20"), now()),
            Item::new(2, "earlier", dec("30"), now()),
        ]));
        let service = service(store, Arc::new(CountingIds::starting_at(6)));

        let ids: Vec<u64> = service
            .list_items()
            .await
            .unwrap()
            .iter()
            .map(Item::id)
            .collect();
        assert_eq!(ids, vec![2, 5]);
    }
}
