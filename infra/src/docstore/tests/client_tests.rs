//! Client construction and URL shape tests

use rn_shared::config::docstore::DocStoreConfig;

use crate::docstore::DocStoreClient;
use crate::InfrastructureError;

#[test]
fn test_rejects_empty_base_url() {
    let config = DocStoreConfig::new("  ");
    let result = DocStoreClient::new(config);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_url_shapes() {
    let config = DocStoreConfig::new("https://store.example.com/");
    let client = DocStoreClient::new(config).unwrap();

    assert_eq!(
        client.url_for_tests("listings", None),
        "https://store.example.com/v1/listings"
    );
    assert_eq!(
        client.url_for_tests("listings", Some("l-1")),
        "https://store.example.com/v1/listings/l-1"
    );
}
