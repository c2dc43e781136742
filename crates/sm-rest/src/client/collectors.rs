use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::instrument;

use surveymonkey_client::{Query, RequestMethod, Response};

use super::seg;
use crate::error::Result;

fn collector_path(collector_id: &str) -> String {
    format!("collectors/{}", seg(collector_id))
}

fn message_path(collector_id: &str, message_id: &str) -> String {
    format!(
        "collectors/{}/messages/{}",
        seg(collector_id),
        seg(message_id)
    )
}

impl super::SurveyMonkeyRestClient {
    #[instrument(skip(self))]
    pub async fn get_collectors_for_survey(
        &self,
        survey_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(format!("surveys/{}/collectors", seg(survey_id)), filters).await
    }

    /// Create a collector; `data` needs at least a `type` (`weblink`, `email`).
    #[instrument(skip(self, data))]
    pub async fn create_collector_for_survey<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("surveys/{}/collectors", seg(survey_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_collector(&self, collector_id: &str) -> Result<Response> {
        self.fetch(collector_path(collector_id)).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_collector<B: Serialize + ?Sized>(
        &self,
        collector_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(RequestMethod::Patch, collector_path(collector_id), data).await
    }

    #[instrument(skip(self, data))]
    pub async fn replace_collector<B: Serialize + ?Sized>(
        &self,
        collector_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(RequestMethod::Put, collector_path(collector_id), data).await
    }

    #[instrument(skip(self))]
    pub async fn delete_collector(&self, collector_id: &str) -> Result<Response> {
        self.remove(collector_path(collector_id)).await
    }

    // Messages

    #[instrument(skip(self))]
    pub async fn get_collector_messages(
        &self,
        collector_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(format!("{}/messages", collector_path(collector_id)), filters).await
    }

    #[instrument(skip(self, data))]
    pub async fn create_collector_message<B: Serialize + ?Sized>(
        &self,
        collector_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("{}/messages", collector_path(collector_id)),
            data,
        )
        .await
    }

    /// Copy a message from another collector into this one.
    #[instrument(skip(self))]
    pub async fn copy_collector_message(
        &self,
        collector_id: &str,
        from_collector_id: &str,
        from_message_id: &str,
        include_recipients: bool,
    ) -> Result<Response> {
        let query = Query::new()
            .with("from_collector_id", from_collector_id)
            .with("from_message_id", from_message_id)
            .with("include_recipients", include_recipients);
        self.execute(
            self.client
                .post(format!("{}/messages", collector_path(collector_id)))
                .query(query),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_collector_message(
        &self,
        collector_id: &str,
        message_id: &str,
    ) -> Result<Response> {
        self.fetch(message_path(collector_id, message_id)).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_collector_message<B: Serialize + ?Sized>(
        &self,
        collector_id: &str,
        message_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Patch,
            message_path(collector_id, message_id),
            data,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn replace_collector_message<B: Serialize + ?Sized>(
        &self,
        collector_id: &str,
        message_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Put,
            message_path(collector_id, message_id),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_collector_message(
        &self,
        collector_id: &str,
        message_id: &str,
    ) -> Result<Response> {
        self.remove(message_path(collector_id, message_id)).await
    }

    /// Send a message now, or schedule it for `scheduled_date`.
    #[instrument(skip(self))]
    pub async fn send_collector_message(
        &self,
        collector_id: &str,
        message_id: &str,
        scheduled_date: Option<DateTime<Utc>>,
    ) -> Result<Response> {
        let body = scheduled_date.map(|date| {
            serde_json::json!({
                "scheduled_date": date.to_rfc3339_opts(SecondsFormat::Secs, false)
            })
        });
        self.send_json(
            RequestMethod::Post,
            format!("{}/send", message_path(collector_id, message_id)),
            &body,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_collector_message_recipients(
        &self,
        collector_id: &str,
        message_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(
            format!("{}/recipients", message_path(collector_id, message_id)),
            filters,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn create_collector_message_recipient<B: Serialize + ?Sized>(
        &self,
        collector_id: &str,
        message_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("{}/recipients", message_path(collector_id, message_id)),
            data,
        )
        .await
    }

    /// Add many recipients in one call (`{"contacts": [...]}` or
    /// `{"contact_ids": [...]}`).
    #[instrument(skip(self, data))]
    pub async fn create_collector_message_recipients_bulk<B: Serialize + ?Sized>(
        &self,
        collector_id: &str,
        message_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("{}/recipients/bulk", message_path(collector_id, message_id)),
            data,
        )
        .await
    }

    // Recipients

    #[instrument(skip(self))]
    pub async fn get_collector_recipients(
        &self,
        collector_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(
            format!("{}/recipients", collector_path(collector_id)),
            filters,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_collector_recipient(
        &self,
        collector_id: &str,
        recipient_id: &str,
    ) -> Result<Response> {
        self.fetch(format!(
            "{}/recipients/{}",
            collector_path(collector_id),
            seg(recipient_id)
        ))
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_collector_recipient(
        &self,
        collector_id: &str,
        recipient_id: &str,
    ) -> Result<Response> {
        self.remove(format!(
            "{}/recipients/{}",
            collector_path(collector_id),
            seg(recipient_id)
        ))
        .await
    }

    // Stats

    #[instrument(skip(self))]
    pub async fn get_collector_stats(&self, collector_id: &str) -> Result<Response> {
        self.fetch(format!("{}/stats", collector_path(collector_id))).await
    }

    #[instrument(skip(self))]
    pub async fn get_collector_message_stats(
        &self,
        collector_id: &str,
        message_id: &str,
    ) -> Result<Response> {
        self.fetch(format!("{}/stats", message_path(collector_id, message_id))).await
    }
}
