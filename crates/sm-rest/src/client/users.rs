use tracing::instrument;

use surveymonkey_client::{Query, Response};

use super::seg;
use crate::error::Result;

impl super::SurveyMonkeyRestClient {
    /// Get the user who owns the access token.
    #[instrument(skip(self))]
    pub async fn get_user(&self) -> Result<Response> {
        self.fetch("users/me".to_string()).await
    }

    /// List resources shared with a user.
    #[instrument(skip(self))]
    pub async fn get_user_shared(&self, user_id: &str, filters: Query) -> Result<Response> {
        self.list(format!("users/{}/shared", seg(user_id)), filters).await
    }

    /// List workgroups a user belongs to.
    #[instrument(skip(self))]
    pub async fn get_user_workgroups(&self, user_id: &str, filters: Query) -> Result<Response> {
        self.list(format!("users/{}/workgroups", seg(user_id)), filters).await
    }

    /// List groups (Enterprise only).
    #[instrument(skip(self))]
    pub async fn get_groups(&self, filters: Query) -> Result<Response> {
        self.list("groups".to_string(), filters).await
    }

    #[instrument(skip(self))]
    pub async fn get_group(&self, group_id: &str) -> Result<Response> {
        self.fetch(format!("groups/{}", seg(group_id))).await
    }

    #[instrument(skip(self))]
    pub async fn get_group_members(&self, group_id: &str, filters: Query) -> Result<Response> {
        self.list(format!("groups/{}/members", seg(group_id)), filters).await
    }

    #[instrument(skip(self))]
    pub async fn get_group_member(&self, group_id: &str, member_id: &str) -> Result<Response> {
        self.fetch(format!(
            "groups/{}/members/{}",
            seg(group_id),
            seg(member_id)
        ))
        .await
    }
}
