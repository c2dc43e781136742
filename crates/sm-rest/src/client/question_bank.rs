use tracing::instrument;

use surveymonkey_client::{Query, Response};

use crate::error::Result;

impl super::SurveyMonkeyRestClient {
    /// List certified question bank questions.
    ///
    /// Filters: `locale`, `search`, `custom`, `page`, `per_page`.
    #[instrument(skip(self))]
    pub async fn get_question_bank_questions(&self, filters: Query) -> Result<Response> {
        self.list("question_bank/questions".to_string(), filters).await
    }
}
