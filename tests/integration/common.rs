use surveymonkey_auth::ApiCredentials;
use surveymonkey_rest::SurveyMonkeyRestClient;

/// Build a REST client from `SM_ACCESS_TOKEN` / `SM_API_KEY`.
///
/// Panics with setup instructions when no token is configured.
pub fn get_client() -> SurveyMonkeyRestClient {
    let creds = ApiCredentials::from_env().unwrap_or_else(|_| {
        panic!(
            "\n\n\
            SM_ACCESS_TOKEN is not set.\n\
            \n\
            Integration tests run against a live SurveyMonkey account.\n\
            \n\
            To fix:\n\
            \x20 1. Register an app at https://developer.surveymonkey.com/apps/\n\
            \x20 2. Get a token: cargo run --bin sm-authorize\n\
            \x20 3. Export: export SM_ACCESS_TOKEN='...'\n\n"
        )
    });

    SurveyMonkeyRestClient::from_credentials(&creds).expect("Failed to create REST client")
}

/// Unique suffix so concurrent runs don't collide on names.
pub fn unique_suffix() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
