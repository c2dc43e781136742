use serde::Serialize;
use tracing::instrument;

use surveymonkey_client::{Query, RequestMethod, Response};

use super::seg;
use crate::error::Result;

fn translation_path(survey_id: &str, language_code: &str) -> String {
    format!(
        "surveys/{}/languages/{}",
        seg(survey_id),
        seg(language_code)
    )
}

impl super::SurveyMonkeyRestClient {
    /// List the translations that exist for a survey.
    #[instrument(skip(self))]
    pub async fn get_survey_translations(
        &self,
        survey_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(format!("surveys/{}/languages", seg(survey_id)), filters).await
    }

    #[instrument(skip(self))]
    pub async fn get_survey_translation(
        &self,
        survey_id: &str,
        language_code: &str,
    ) -> Result<Response> {
        self.fetch(translation_path(survey_id, language_code)).await
    }

    #[instrument(skip(self, data))]
    pub async fn create_survey_translation<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        language_code: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            translation_path(survey_id, language_code),
            data,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn update_survey_translation<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        language_code: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Patch,
            translation_path(survey_id, language_code),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_survey_translation(
        &self,
        survey_id: &str,
        language_code: &str,
    ) -> Result<Response> {
        self.remove(translation_path(survey_id, language_code)).await
    }
}
