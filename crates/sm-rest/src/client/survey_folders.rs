use serde::Serialize;
use tracing::instrument;

use surveymonkey_client::{Query, RequestMethod, Response};

use crate::error::Result;

impl super::SurveyMonkeyRestClient {
    #[instrument(skip(self))]
    pub async fn get_survey_folders(&self, filters: Query) -> Result<Response> {
        self.list("survey_folders".to_string(), filters).await
    }

    /// Create a folder; `data` carries at least a `title`.
    #[instrument(skip(self, data))]
    pub async fn create_survey_folder<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.send_json(RequestMethod::Post, "survey_folders".to_string(), data).await
    }
}
