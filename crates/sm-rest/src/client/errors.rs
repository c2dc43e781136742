//! Error code reference endpoints.

use tracing::instrument;

use surveymonkey_client::{Query, Response};

use super::seg;
use crate::error::Result;

impl super::SurveyMonkeyRestClient {
    #[instrument(skip(self))]
    pub async fn get_errors(&self, filters: Query) -> Result<Response> {
        self.list("errors".to_string(), filters).await
    }

    #[instrument(skip(self))]
    pub async fn get_error(&self, error_id: &str) -> Result<Response> {
        self.fetch(format!("errors/{}", seg(error_id))).await
    }
}
