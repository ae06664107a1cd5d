use catalog_service::clients::ActorClient;
use catalog_service::config::CatalogConfig;
use catalog_service::instrument_actor::InstrumentError;
use catalog_service::lifecycle::CatalogSystem;
use catalog_service::model::{InstrumentCreate, InstrumentId, InstrumentPatch};

fn config(vars: &[(&str, &str)]) -> CatalogConfig {
    let vars: Vec<(String, String)> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    CatalogConfig::from_lookup(|name| {
        vars.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    })
    .expect("valid configuration")
}

/// End-to-end through the real actor, without HTTP.
#[tokio::test]
async fn test_catalog_system_crud() {
    let system = CatalogSystem::new(&config(&[("CATALOG_SEED", "false")]));
    let client = &system.instrument_client;

    let created = client
        .create_instrument(InstrumentCreate {
            name: "Yamaha P-45".into(),
            category: Some("Клавишные".into()),
            description: Some("Цифровое пианино".into()),
            price: 38000.0,
            stock: Some(4),
            rating: Some(0.0),
            image: None,
        })
        .await
        .expect("Failed to create instrument");

    let fetched = client
        .get(created.id.clone())
        .await
        .expect("Failed to get instrument")
        .expect("Instrument not found");
    assert_eq!(fetched, created);

    let patch = InstrumentPatch {
        stock: Some(3),
        ..Default::default()
    };
    let updated = client
        .update_instrument(created.id.clone(), patch)
        .await
        .expect("Failed to update instrument")
        .expect("Instrument not found");
    assert_eq!(updated.stock, Some(3));
    assert_eq!(updated.name, created.name);

    assert!(client.delete(created.id.clone()).await.unwrap());
    assert!(client.list_instruments().await.unwrap().is_empty());

    system.shutdown().await.expect("clean shutdown");
}

#[tokio::test]
async fn test_store_rejects_records_that_break_invariants() {
    let system = CatalogSystem::new(&config(&[("CATALOG_SEED", "false")]));
    let client = &system.instrument_client;

    let result = client
        .create_instrument(InstrumentCreate {
            name: "Free guitar".into(),
            price: 0.0,
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(InstrumentError::InvariantViolated(_))));
    assert!(client.list_instruments().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_products_seed_and_timestamp_ids() {
    let system = CatalogSystem::new(&config(&[("CATALOG_PROFILE", "products")]));
    let client = &system.instrument_client;

    let seeded = client.list_instruments().await.unwrap();
    assert_eq!(seeded.len(), 3);
    assert_eq!(seeded[0].id, InstrumentId::Numeric(1));

    let created = client
        .create_instrument(InstrumentCreate {
            name: "Раф".into(),
            price: 320.0,
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(matches!(created.id, InstrumentId::Numeric(n) if n > 3));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_waits_for_outstanding_clients() {
    let system = CatalogSystem::new(&config(&[]));
    let extra = system.instrument_client.clone();

    let shutdown = tokio::spawn(system.shutdown());
    // Still served: a clone of the client keeps the actor alive.
    assert_eq!(extra.list_instruments().await.unwrap().len(), 10);

    drop(extra);
    shutdown.await.unwrap().unwrap();
}
