use tracing::instrument;

use surveymonkey_client::Response;

use crate::error::Result;

impl super::SurveyMonkeyRestClient {
    /// HEAD a resource to check that it exists without fetching it.
    ///
    /// `uri` is relative to the API base, e.g. `surveys/123`. The response
    /// carries no body, so inspect [`Response::status`] rather than
    /// [`Response::is_success`].
    #[instrument(skip(self))]
    pub async fn is_resource_available(&self, uri: &str) -> Result<Response> {
        self.execute(self.client.head(uri)).await
    }

    /// OPTIONS a resource to discover the methods it supports.
    #[instrument(skip(self))]
    pub async fn get_resource_options(&self, uri: &str) -> Result<Response> {
        self.execute(self.client.options(uri)).await
    }
}
