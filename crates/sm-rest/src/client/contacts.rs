use serde::Serialize;
use serde_json::json;
use tracing::instrument;

use surveymonkey_client::{Query, RequestMethod, Response};

use super::seg;
use crate::error::Result;

fn contact_list_path(list_id: &str) -> String {
    format!("contact_lists/{}", seg(list_id))
}

impl super::SurveyMonkeyRestClient {
    // Contact lists

    #[instrument(skip(self))]
    pub async fn get_contact_lists(&self, filters: Query) -> Result<Response> {
        self.list("contact_lists".to_string(), filters).await
    }

    #[instrument(skip(self, data))]
    pub async fn create_contact_list<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.send_json(RequestMethod::Post, "contact_lists".to_string(), data).await
    }

    #[instrument(skip(self))]
    pub async fn get_contact_list(&self, list_id: &str) -> Result<Response> {
        self.fetch(contact_list_path(list_id)).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_contact_list<B: Serialize + ?Sized>(
        &self,
        list_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(RequestMethod::Patch, contact_list_path(list_id), data).await
    }

    #[instrument(skip(self, data))]
    pub async fn replace_contact_list<B: Serialize + ?Sized>(
        &self,
        list_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(RequestMethod::Put, contact_list_path(list_id), data).await
    }

    #[instrument(skip(self))]
    pub async fn delete_contact_list(&self, list_id: &str) -> Result<Response> {
        self.remove(contact_list_path(list_id)).await
    }

    /// Copy a contact list; the response describes the new list.
    #[instrument(skip(self))]
    pub async fn copy_contact_list(&self, list_id: &str) -> Result<Response> {
        self.execute(self.client.post(format!("{}/copy", contact_list_path(list_id)))).await
    }

    /// Merge the list `list_id` into `into_list_id`.
    #[instrument(skip(self))]
    pub async fn merge_contact_list(&self, list_id: &str, into_list_id: &str) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("{}/merge", contact_list_path(list_id)),
            &json!({ "list_id": into_list_id }),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_contacts_in_list(&self, list_id: &str, filters: Query) -> Result<Response> {
        self.list(format!("{}/contacts", contact_list_path(list_id)), filters).await
    }

    #[instrument(skip(self, data))]
    pub async fn create_contact_in_list<B: Serialize + ?Sized>(
        &self,
        list_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("{}/contacts", contact_list_path(list_id)),
            data,
        )
        .await
    }

    /// Add many contacts to a list: `{"contacts": [...]}`.
    #[instrument(skip(self, data))]
    pub async fn create_contacts_in_list<B: Serialize + ?Sized>(
        &self,
        list_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("{}/contacts/bulk", contact_list_path(list_id)),
            data,
        )
        .await
    }

    // Contacts

    #[instrument(skip(self))]
    pub async fn get_contacts(&self, filters: Query) -> Result<Response> {
        self.list("contacts".to_string(), filters).await
    }

    #[instrument(skip(self, data))]
    pub async fn create_contact<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.send_json(RequestMethod::Post, "contacts".to_string(), data).await
    }

    #[instrument(skip(self))]
    pub async fn get_contacts_bulk(&self, filters: Query) -> Result<Response> {
        self.list("contacts/bulk".to_string(), filters).await
    }

    #[instrument(skip(self, data))]
    pub async fn create_multiple_contacts<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<Response> {
        self.send_json(RequestMethod::Post, "contacts/bulk".to_string(), data).await
    }

    #[instrument(skip(self))]
    pub async fn get_contact(&self, contact_id: &str) -> Result<Response> {
        self.fetch(format!("contacts/{}", seg(contact_id))).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_contact<B: Serialize + ?Sized>(
        &self,
        contact_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Patch,
            format!("contacts/{}", seg(contact_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn replace_contact<B: Serialize + ?Sized>(
        &self,
        contact_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Put,
            format!("contacts/{}", seg(contact_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_contact(&self, contact_id: &str) -> Result<Response> {
        self.remove(format!("contacts/{}", seg(contact_id))).await
    }

    // Contact fields

    #[instrument(skip(self))]
    pub async fn get_contact_fields(&self, filters: Query) -> Result<Response> {
        self.list("contact_fields".to_string(), filters).await
    }

    #[instrument(skip(self))]
    pub async fn get_contact_field(&self, field_id: &str) -> Result<Response> {
        self.fetch(format!("contact_fields/{}", seg(field_id))).await
    }

    /// Rename a custom contact field: `{"label": "Department"}`.
    #[instrument(skip(self, data))]
    pub async fn update_contact_field<B: Serialize + ?Sized>(
        &self,
        field_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Patch,
            format!("contact_fields/{}", seg(field_id)),
            data,
        )
        .await
    }
}
