use catalog_browser::config::{CatalogConfig, TableConfig};
use catalog_browser::lifecycle::CatalogSystem;
use catalog_browser::model::ProductStats;
use catalog_browser::store::{seed, MemoryStore, RecordStore, SqliteStore};
use catalog_browser::table::Completion;
use catalog_browser::transport::TransportError;
use chrono::{TimeZone, Utc};
use serde_json::json;

/// Full end-to-end scroll with a real actor behind the transport.
#[tokio::test]
async fn test_scroll_through_whole_catalog() {
    let config = CatalogConfig {
        seed_products: 120,
        ..CatalogConfig::default()
    };
    let system = CatalogSystem::from_config(&config).expect("Failed to start system");

    let mut table = system.table();
    assert_eq!(table.config().page_size, 50);
    assert!(table.initial_load());

    let mut counts = Vec::new();
    loop {
        match table.pump().await {
            Some(Ok(Completion::Loaded { total_loaded, .. })) => counts.push(total_loaded),
            Some(other) => panic!("unexpected completion: {other:?}"),
            None => break,
        }
        // jump straight to the sentinel
        let sentinel = table.loaded_count() as f64 * table.config().row_height;
        table.on_scroll(sentinel - 100.0);
    }

    assert_eq!(counts, vec![50, 100, 120]);
    assert!(!table.has_more());
    assert!(!table.on_sentinel_visible());

    let ids: Vec<i64> = table.products().map(|p| p.id.0).collect();
    assert_eq!(ids, (1..=120).collect::<Vec<_>>());

    drop(table);
    system.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_transport_procedures() {
    let system = CatalogSystem::new(
        {
            let mut store = MemoryStore::new();
            seed::populate(&mut store, 30, Utc::now()).unwrap();
            store
        },
        8,
        TableConfig::default(),
    );
    let router = system.router.clone();

    assert_eq!(router.call("healthCheck", None).await.unwrap(), json!("OK"));

    let defaults = router.call("getAllProducts", None).await.unwrap();
    let defaults = defaults.as_array().unwrap();
    assert_eq!(defaults.len(), 20);
    assert_eq!(defaults[0]["id"], json!(1));

    let tail = router
        .call("getAllProducts", Some(json!({"limit": 50, "offset": 25})))
        .await
        .unwrap();
    assert_eq!(tail.as_array().unwrap().len(), 5);

    let past_end = router
        .call("getAllProducts", Some(json!({"offset": 1000})))
        .await
        .unwrap();
    assert_eq!(past_end, json!([]));

    let stats = router.call("getLatestProductStats", None).await.unwrap();
    assert_eq!(stats["stats"]["total_products"], json!(30));

    for bad in [json!({"limit": -1}), json!({"offset": -1}), json!({"limit": 2.5})] {
        let result = router.call("getAllProducts", Some(bad)).await;
        assert!(matches!(result, Err(TransportError::Validation(_))));
    }
    assert!(matches!(
        router.call("createProduct", Some(json!({}))).await,
        Err(TransportError::UnknownProcedure(_))
    ));

    drop(router);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_latest_stats_over_sqlite() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    // newer snapshot inserted first
    store.insert_stats(&ProductStats::empty(2, t2)).unwrap();
    store.insert_stats(&ProductStats::empty(1, t1)).unwrap();

    let system = CatalogSystem::new(store, 4, TableConfig::default());
    let latest = system.catalog_client.latest_stats().await.unwrap().unwrap();
    assert_eq!(latest.created_at, t2);
    assert_eq!(latest.id, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_store() {
    let system = CatalogSystem::new(MemoryStore::new(), 4, TableConfig::default());

    assert_eq!(system.catalog_client.latest_stats().await.unwrap(), None);

    let mut table = system.table();
    table.initial_load();
    let completion = table.pump().await.unwrap().unwrap();
    assert_eq!(
        completion,
        Completion::Loaded {
            page_len: 0,
            total_loaded: 0,
            has_more: false
        }
    );

    drop(table);
    system.shutdown().await.unwrap();
}
