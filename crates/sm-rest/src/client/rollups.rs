//! Aggregated answers (rollups) and answers over time (trends).

use tracing::instrument;

use surveymonkey_client::{Query, Response};

use super::seg;
use super::surveys::{page_path, question_path};
use crate::error::Result;

impl super::SurveyMonkeyRestClient {
    #[instrument(skip(self))]
    pub async fn get_survey_rollups(&self, survey_id: &str, filters: Query) -> Result<Response> {
        self.list(format!("surveys/{}/rollups", seg(survey_id)), filters).await
    }

    #[instrument(skip(self))]
    pub async fn get_survey_page_rollups(
        &self,
        survey_id: &str,
        page_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(format!("{}/rollups", page_path(survey_id, page_id)), filters).await
    }

    #[instrument(skip(self))]
    pub async fn get_survey_page_question_rollups(
        &self,
        survey_id: &str,
        page_id: &str,
        question_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(
            format!("{}/rollups", question_path(survey_id, page_id, question_id)),
            filters,
        )
        .await
    }

    /// Trends are bucketed by `trend_by` (`year`, `quarter`, `month`, `week`, `day`, `hour`).
    #[instrument(skip(self))]
    pub async fn get_survey_trends(&self, survey_id: &str, filters: Query) -> Result<Response> {
        self.list(format!("surveys/{}/trends", seg(survey_id)), filters).await
    }

    #[instrument(skip(self))]
    pub async fn get_survey_page_trends(
        &self,
        survey_id: &str,
        page_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(format!("{}/trends", page_path(survey_id, page_id)), filters).await
    }

    #[instrument(skip(self))]
    pub async fn get_survey_page_question_trends(
        &self,
        survey_id: &str,
        page_id: &str,
        question_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(
            format!("{}/trends", question_path(survey_id, page_id, question_id)),
            filters,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::mock_client;
    use serde_json::json;
    use surveymonkey_client::Query;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_rollups() {
        let mock_server = MockServer::start().await;

        for route in [
            "/v3/surveys/1/rollups",
            "/v3/surveys/1/pages/2/rollups",
            "/v3/surveys/1/pages/2/questions/3/rollups",
        ] {
            Mock::given(method("GET"))
                .and(path(route))
                .and(query_param("collector_ids", "c1"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"route": route})))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = mock_client(&mock_server);
        let filters = Query::new().with("collector_ids", "c1");

        let survey = client.get_survey_rollups("1", filters.clone()).await.unwrap();
        assert_eq!(survey.data().unwrap()["route"], "/v3/surveys/1/rollups");

        let page = client
            .get_survey_page_rollups("1", "2", filters.clone())
            .await
            .unwrap();
        assert_eq!(page.data().unwrap()["route"], "/v3/surveys/1/pages/2/rollups");

        let question = client
            .get_survey_page_question_rollups("1", "2", "3", filters)
            .await
            .unwrap();
        assert_eq!(
            question.data().unwrap()["route"],
            "/v3/surveys/1/pages/2/questions/3/rollups"
        );
    }

    #[tokio::test]
    async fn test_trends() {
        let mock_server = MockServer::start().await;

        for route in [
            "/v3/surveys/1/trends",
            "/v3/surveys/1/pages/2/trends",
            "/v3/surveys/1/pages/2/questions/3/trends",
        ] {
            Mock::given(method("GET"))
                .and(path(route))
                .and(query_param("trend_by", "month"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"route": route})))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = mock_client(&mock_server);
        let filters = Query::new().with("trend_by", "month");

        assert!(client
            .get_survey_trends("1", filters.clone())
            .await
            .unwrap()
            .is_success());
        assert!(client
            .get_survey_page_trends("1", "2", filters.clone())
            .await
            .unwrap()
            .is_success());
        let question = client
            .get_survey_page_question_trends("1", "2", "3", filters)
            .await
            .unwrap();
        assert_eq!(
            question.data().unwrap()["route"],
            "/v3/surveys/1/pages/2/questions/3/trends"
        );
    }
}
