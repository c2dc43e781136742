use serde::Serialize;
use tracing::instrument;

use surveymonkey_client::{Query, RequestMethod, Response};

use super::seg;
use crate::error::Result;

impl super::SurveyMonkeyRestClient {
    #[instrument(skip(self))]
    pub async fn get_webhooks(&self, filters: Query) -> Result<Response> {
        self.list("webhooks".to_string(), filters).await
    }

    /// Register a webhook.
    ///
    /// `data` carries `name`, `event_type`, `object_type`, `object_ids` and
    /// `subscription_url`. SurveyMonkey sends a HEAD request to the
    /// subscription URL before accepting it.
    #[instrument(skip(self, data))]
    pub async fn create_webhook<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.send_json(RequestMethod::Post, "webhooks".to_string(), data).await
    }

    #[instrument(skip(self))]
    pub async fn get_webhook(&self, webhook_id: &str) -> Result<Response> {
        self.fetch(format!("webhooks/{}", seg(webhook_id))).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_webhook<B: Serialize + ?Sized>(
        &self,
        webhook_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Patch,
            format!("webhooks/{}", seg(webhook_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn replace_webhook<B: Serialize + ?Sized>(
        &self,
        webhook_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Put,
            format!("webhooks/{}", seg(webhook_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<Response> {
        self.remove(format!("webhooks/{}", seg(webhook_id))).await
    }
}
