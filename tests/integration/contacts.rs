//! Contact list lifecycle against the live API.

use super::common::{get_client, unique_suffix};
use serde_json::json;
use surveymonkey_rest::Query;

#[tokio::test]
#[ignore = "requires SM_ACCESS_TOKEN"]
async fn test_contact_list_lifecycle() {
    let client = get_client();

    let lists = client
        .get_contact_lists(Query::new())
        .await
        .expect("list request should complete");
    assert!(lists.data().is_some_and(|d| d.get("data").is_some()));

    let name = format!("surveymonkey-api test list {}", unique_suffix());
    let created = client
        .create_contact_list(&json!({ "name": name }))
        .await
        .expect("create request should complete");
    assert!(created.is_success(), "{:?}", created.api_error());

    let created_data = created.data().expect("created list should be JSON");
    let id = created_data["id"]
        .as_str()
        .expect("created list should have an id")
        .to_string();
    assert!(created_data.get("href").is_some());

    let changed = format!("{name} Changed");
    let updated = client
        .update_contact_list(&id, &json!({ "name": changed }))
        .await
        .expect("update request should complete");
    assert_eq!(updated.data().unwrap()["name"], changed.as_str());

    let replaced_name = format!("{name} Replaced");
    let replaced = client
        .replace_contact_list(&id, &json!({ "name": replaced_name }))
        .await
        .expect("replace request should complete");
    assert_eq!(replaced.data().unwrap()["name"], replaced_name.as_str());

    let deleted = client
        .delete_contact_list(&id)
        .await
        .expect("delete request should complete");
    assert_eq!(deleted.data().unwrap()["name"], replaced_name.as_str());

    let gone = client
        .get_contact_list(&id)
        .await
        .expect("fetch request should complete");
    assert!(!gone.is_success());
    assert!(gone.is_error());
}

#[tokio::test]
#[ignore = "requires SM_ACCESS_TOKEN"]
async fn test_get_contacts() {
    let client = get_client();

    let response = client
        .get_contacts(Query::new())
        .await
        .expect("request should complete");

    assert!(response.is_success(), "{:?}", response.api_error());
    assert!(response.data().is_some_and(|d| d.get("data").is_some()));
}
