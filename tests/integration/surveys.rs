//! Survey endpoints against the live API.

use super::common::get_client;
use surveymonkey_rest::Query;

#[tokio::test]
#[ignore = "requires SM_ACCESS_TOKEN"]
async fn test_get_surveys_honours_per_page() {
    let client = get_client();

    let response = client
        .get_surveys(Query::new().with("per_page", 1))
        .await
        .expect("request should complete");

    assert!(response.is_success(), "{:?}", response.api_error());
    let data = response.data().expect("surveys response should be JSON");
    assert_eq!(data["per_page"], 1);
}

#[tokio::test]
#[ignore = "requires SM_ACCESS_TOKEN"]
async fn test_get_user() {
    let client = get_client();

    let response = client.get_user().await.expect("request should complete");

    assert!(response.is_success(), "{:?}", response.api_error());
    let data = response.data().expect("user response should be JSON");
    assert!(data.get("id").is_some());
    assert!(data.get("username").is_some());
}
