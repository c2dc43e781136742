use serde::Serialize;
use tracing::instrument;

use surveymonkey_client::{Query, RequestMethod, Response};

use super::seg;
use crate::error::Result;

fn survey_response_path(survey_id: &str, response_id: &str) -> String {
    format!(
        "surveys/{}/responses/{}",
        seg(survey_id),
        seg(response_id)
    )
}

fn collector_response_path(collector_id: &str, response_id: &str) -> String {
    format!(
        "collectors/{}/responses/{}",
        seg(collector_id),
        seg(response_id)
    )
}

impl super::SurveyMonkeyRestClient {
    #[instrument(skip(self))]
    pub async fn get_survey_responses(
        &self,
        survey_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(format!("surveys/{}/responses", seg(survey_id)), filters).await
    }

    /// Responses with every answer expanded, paged like the plain listing.
    #[instrument(skip(self))]
    pub async fn get_survey_responses_bulk(
        &self,
        survey_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(
            format!("surveys/{}/responses/bulk", seg(survey_id)),
            filters,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_survey_response(
        &self,
        survey_id: &str,
        response_id: &str,
    ) -> Result<Response> {
        self.fetch(survey_response_path(survey_id, response_id)).await
    }

    #[instrument(skip(self))]
    pub async fn get_survey_response_details(
        &self,
        survey_id: &str,
        response_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(
            format!("{}/details", survey_response_path(survey_id, response_id)),
            filters,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn update_survey_response<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        response_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Patch,
            survey_response_path(survey_id, response_id),
            data,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn replace_survey_response<B: Serialize + ?Sized>(
        &self,
        survey_id: &str,
        response_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Put,
            survey_response_path(survey_id, response_id),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_survey_response(
        &self,
        survey_id: &str,
        response_id: &str,
    ) -> Result<Response> {
        self.remove(survey_response_path(survey_id, response_id)).await
    }

    // Collector responses

    #[instrument(skip(self))]
    pub async fn get_collector_responses(
        &self,
        collector_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(
            format!("collectors/{}/responses", seg(collector_id)),
            filters,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn create_collector_response<B: Serialize + ?Sized>(
        &self,
        collector_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("collectors/{}/responses", seg(collector_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_collector_responses_bulk(
        &self,
        collector_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(
            format!("collectors/{}/responses/bulk", seg(collector_id)),
            filters,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_collector_response(
        &self,
        collector_id: &str,
        response_id: &str,
    ) -> Result<Response> {
        self.fetch(collector_response_path(collector_id, response_id)).await
    }

    #[instrument(skip(self))]
    pub async fn get_collector_response_details(
        &self,
        collector_id: &str,
        response_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(
            format!(
                "{}/details",
                collector_response_path(collector_id, response_id)
            ),
            filters,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn update_collector_response<B: Serialize + ?Sized>(
        &self,
        collector_id: &str,
        response_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Patch,
            collector_response_path(collector_id, response_id),
            data,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn replace_collector_response<B: Serialize + ?Sized>(
        &self,
        collector_id: &str,
        response_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Put,
            collector_response_path(collector_id, response_id),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_collector_response(
        &self,
        collector_id: &str,
        response_id: &str,
    ) -> Result<Response> {
        self.remove(collector_response_path(collector_id, response_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::mock_client;
    use serde_json::json;
    use surveymonkey_client::Query;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_survey_responses_forward_filters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/surveys/1/responses"))
            .and(query_param("status", "completed"))
            .and(query_param("per_page", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "total": 0})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v3/surveys/1/responses/bulk"))
            .and(query_param("simple", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": "r1"}]})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server);

        let list = client
            .get_survey_responses(
                "1",
                Query::new().with("status", "completed").with("per_page", 50),
            )
            .await
            .unwrap();
        assert_eq!(list.data().unwrap()["total"], 0);

        let bulk = client
            .get_survey_responses_bulk("1", Query::new().with("simple", true))
            .await
            .unwrap();
        assert_eq!(bulk.data().unwrap()["data"][0]["id"], "r1");
    }

    #[tokio::test]
    async fn test_survey_response_crud() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/surveys/1/responses/r1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "r1"})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v3/surveys/1/responses/r1/details"))
            .and(query_param("page_ids", "p1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "r1", "pages": []})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/v3/surveys/1/responses/r1"))
            .and(body_json(json!({"custom_value": "x"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"custom_value": "x"})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/v3/surveys/1/responses/r1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"custom_value": "y"})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v3/surveys/1/responses/r1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server);

        assert!(client.get_survey_response("1", "r1").await.unwrap().is_success());
        let details = client
            .get_survey_response_details("1", "r1", Query::new().with("page_ids", "p1"))
            .await
            .unwrap();
        assert!(details.data().unwrap()["pages"].is_array());
        let updated = client
            .update_survey_response("1", "r1", &json!({"custom_value": "x"}))
            .await
            .unwrap();
        assert_eq!(updated.data().unwrap()["custom_value"], "x");
        let replaced = client
            .replace_survey_response("1", "r1", &json!({"custom_value": "y"}))
            .await
            .unwrap();
        assert_eq!(replaced.data().unwrap()["custom_value"], "y");
        assert_eq!(
            client.delete_survey_response("1", "r1").await.unwrap().status(),
            204
        );
    }

    #[tokio::test]
    async fn test_collector_responses() {
        let mock_server = MockServer::start().await;

        let routes = [
            ("GET", "/v3/collectors/c1/responses"),
            ("POST", "/v3/collectors/c1/responses"),
            ("GET", "/v3/collectors/c1/responses/bulk"),
            ("GET", "/v3/collectors/c1/responses/r1"),
            ("GET", "/v3/collectors/c1/responses/r1/details"),
            ("PATCH", "/v3/collectors/c1/responses/r1"),
            ("PUT", "/v3/collectors/c1/responses/r1"),
            ("DELETE", "/v3/collectors/c1/responses/r1"),
        ];
        for (verb, route) in routes {
            Mock::given(method(verb))
                .and(path(route))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(json!({"verb": verb, "route": route})),
                )
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = mock_client(&mock_server);
        let data = json!({"pages": []});

        let responses = vec![
            client.get_collector_responses("c1", Query::new()).await.unwrap(),
            client.create_collector_response("c1", &data).await.unwrap(),
            client
                .get_collector_responses_bulk("c1", Query::new())
                .await
                .unwrap(),
            client.get_collector_response("c1", "r1").await.unwrap(),
            client
                .get_collector_response_details("c1", "r1", Query::new())
                .await
                .unwrap(),
            client.update_collector_response("c1", "r1", &data).await.unwrap(),
            client.replace_collector_response("c1", "r1", &data).await.unwrap(),
            client.delete_collector_response("c1", "r1").await.unwrap(),
        ];

        for (response, (verb, route)) in responses.iter().zip(routes) {
            let body = response.data().unwrap();
            assert_eq!(body["verb"], verb);
            assert_eq!(body["route"], route);
        }
    }

    #[tokio::test]
    async fn test_collector_response_details_forward_filters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/collectors/c1/responses/r1/details"))
            .and(query_param("question_ids", "q1,q2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "r1"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(&mock_server);
        let response = client
            .get_collector_response_details(
                "c1",
                "r1",
                Query::new().with("question_ids", "q1,q2"),
            )
            .await
            .unwrap();
        assert!(response.is_success());
    }
}
