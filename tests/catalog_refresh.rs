mod common;

use common::{harness, sample_product, sample_seller};
use mercadito_lib::application::services::SyncScheduler;
use mercadito_lib::domain::value_objects::ProductId;

#[tokio::test]
async fn run_once_pulls_products_and_sellers() {
    let h = harness().await;
    {
        let mut remote_products = h.remote.products.lock().unwrap();
        let mut seeded = sample_product("Honey", Some(1));
        seeded.assign_id(ProductId::new(5));
        remote_products.insert(5, seeded);
    }
    h.remote
        .sellers
        .lock()
        .unwrap()
        .insert(1, sample_seller(1, "La Colmena"));

    let scheduler = SyncScheduler::new(h.products.clone(), h.sellers.clone());
    scheduler.run_once().await.expect("sync");

    let status = scheduler.status().await;
    assert_eq!(status.merged_products, 1);
    assert_eq!(status.merged_sellers, 1);
    assert!(status.last_sync.is_some());

    assert!(h
        .products
        .by_id(ProductId::new(5))
        .await
        .expect("get")
        .is_some());
}

#[tokio::test]
async fn offline_refresh_counts_an_error_without_touching_the_store() {
    let h = harness().await;
    h.remote.set_offline(true);

    let scheduler = SyncScheduler::new(h.products.clone(), h.sellers.clone());
    // The product pull swallows the failure; the seller pull surfaces it.
    assert!(scheduler.run_once().await.is_err());

    let status = scheduler.status().await;
    assert_eq!(status.sync_errors, 1);
    assert!(h.products.all().await.expect("list").is_empty());
}
