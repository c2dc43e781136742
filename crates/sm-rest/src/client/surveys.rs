use serde::Serialize;
use tracing::instrument;

use surveymonkey_client::{Query, RequestMethod, Response};

use super::{merge_field, seg};
use crate::error::Result;

impl super::SurveyMonkeyRestClient {
    /// List surveys owned by or shared with the user.
    ///
    /// Common filters: `page`, `per_page`, `sort_by`, `sort_order`,
    /// `include`, `title`, `start_modified_at`, `end_modified_at`, `folder_id`.
    #[instrument(skip(self))]
    pub async fn get_surveys(&self, filters: Query) -> Result<Response> {
        self.list("surveys".to_string(), filters).await
    }

    /// Create a survey.
    #[instrument(skip(self, data))]
    pub async fn create_survey<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.send_json(RequestMethod::Post, "surveys".to_string(), data).await
    }

    /// Create a survey from a template. `data` must be a JSON object (or
    /// null); `from_template_id` is added to it.
    #[instrument(skip(self, data))]
    pub async fn create_survey_from_template<B: Serialize + ?Sized>(
        &self,
        template_id: &str,
        data: &B,
    ) -> Result<Response> {
        let body = merge_field(data, "from_template_id", template_id)?;
        self.send_json(RequestMethod::Post, "surveys".to_string(), &body).await
    }

    /// Create a survey by copying an existing one. `from_survey_id` is added
    /// to `data`.
    #[instrument(skip(self, data))]
    pub async fn create_survey_from_existing<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        data: &B,
    ) -> Result<Response> {
        let body = merge_field(data, "from_survey_id", survey_id)?;
        self.send_json(RequestMethod::Post, "surveys".to_string(), &body).await
    }

    #[instrument(skip(self))]
    pub async fn get_survey(&self, survey_id: &str) -> Result<Response> {
        self.fetch(format!("surveys/{}", seg(survey_id))).await
    }

    /// Get a survey with its pages and questions expanded.
    #[instrument(skip(self))]
    pub async fn get_survey_details(&self, survey_id: &str) -> Result<Response> {
        self.fetch(format!("surveys/{}/details", seg(survey_id))).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_survey<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Patch,
            format!("surveys/{}", seg(survey_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn replace_survey<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Put,
            format!("surveys/{}", seg(survey_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_survey(&self, survey_id: &str) -> Result<Response> {
        self.remove(format!("surveys/{}", seg(survey_id))).await
    }

    #[instrument(skip(self))]
    pub async fn get_survey_categories(&self, filters: Query) -> Result<Response> {
        self.list("survey_categories".to_string(), filters).await
    }

    #[instrument(skip(self))]
    pub async fn get_survey_templates(&self, filters: Query) -> Result<Response> {
        self.list("survey_templates".to_string(), filters).await
    }

    /// List the languages surveys can be created in.
    #[instrument(skip(self))]
    pub async fn get_survey_languages(&self, filters: Query) -> Result<Response> {
        self.list("survey_languages".to_string(), filters).await
    }

    // Pages

    #[instrument(skip(self))]
    pub async fn get_survey_pages(&self, survey_id: &str, filters: Query) -> Result<Response> {
        self.list(format!("surveys/{}/pages", seg(survey_id)), filters).await
    }

    #[instrument(skip(self, data))]
    pub async fn create_survey_page<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("surveys/{}/pages", seg(survey_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_survey_page(&self, survey_id: &str, page_id: &str) -> Result<Response> {
        self.fetch(page_path(survey_id, page_id)).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_survey_page<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        page_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(RequestMethod::Patch, page_path(survey_id, page_id), data).await
    }

    #[instrument(skip(self, data))]
    pub async fn replace_survey_page<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        page_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(RequestMethod::Put, page_path(survey_id, page_id), data).await
    }

    #[instrument(skip(self))]
    pub async fn delete_survey_page(&self, survey_id: &str, page_id: &str) -> Result<Response> {
        self.remove(page_path(survey_id, page_id)).await
    }

    // Questions

    #[instrument(skip(self))]
    pub async fn get_survey_page_questions(
        &self,
        survey_id: &str,
        page_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(
            format!("{}/questions", page_path(survey_id, page_id)),
            filters,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn create_survey_page_question<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        page_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("{}/questions", page_path(survey_id, page_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_survey_page_question(
        &self,
        survey_id: &str,
        page_id: &str,
        question_id: &str,
    ) -> Result<Response> {
        self.fetch(question_path(survey_id, page_id, question_id)).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_survey_page_question<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        page_id: &str,
        question_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Patch,
            question_path(survey_id, page_id, question_id),
            data,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn replace_survey_page_question<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        page_id: &str,
        question_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Put,
            question_path(survey_id, page_id, question_id),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_survey_page_question(
        &self,
        survey_id: &str,
        page_id: &str,
        question_id: &str,
    ) -> Result<Response> {
        self.remove(question_path(survey_id, page_id, question_id)).await
    }
}

pub(super) fn page_path(survey_id: &str, page_id: &str) -> String {
    format!("surveys/{}/pages/{}", seg(survey_id), seg(page_id))
}

pub(super) fn question_path(survey_id: &str, page_id: &str, question_id: &str) -> String {
    format!(
        "{}/questions/{}",
        page_path(survey_id, page_id),
        seg(question_id)
    )
}
