//! Benchmark bundles and per-question benchmark results.

use tracing::instrument;

use surveymonkey_client::{Query, Response};

use super::seg;
use super::surveys::question_path;
use crate::error::Result;

impl super::SurveyMonkeyRestClient {
    /// List benchmark bundles. Filters: `page`, `per_page`, `country`.
    #[instrument(skip(self))]
    pub async fn get_benchmark_bundles(&self, filters: Query) -> Result<Response> {
        self.list("benchmark_bundles".to_string(), filters).await
    }

    #[instrument(skip(self))]
    pub async fn get_benchmark_bundle(&self, bundle_id: &str) -> Result<Response> {
        self.fetch(format!("benchmark_bundles/{}", seg(bundle_id))).await
    }

    /// Compare survey questions against a benchmark bundle.
    ///
    /// `question_ids` is sent as one comma separated `question_ids` filter and
    /// overrides any value already present in `filters`.
    #[instrument(skip(self))]
    pub async fn analyze_survey_questions(
        &self,
        bundle_id: &str,
        question_ids: &[&str],
        filters: Query,
    ) -> Result<Response> {
        let query = filters.with("question_ids", question_ids.join(","));
        self.list(
            format!("benchmark_bundles/{}/analyze", seg(bundle_id)),
            query,
        )
        .await
    }

    /// Filters: `percentile_start`, `percentile_end`.
    #[instrument(skip(self))]
    pub async fn get_question_benchmark_result(
        &self,
        survey_id: &str,
        page_id: &str,
        question_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(
            format!("{}/benchmark", question_path(survey_id, page_id, question_id)),
            filters,
        )
        .await
    }
}
