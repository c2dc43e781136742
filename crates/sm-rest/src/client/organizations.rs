//! Workgroups, their members and shares, and roles (Enterprise accounts).

use serde::Serialize;
use tracing::instrument;

use surveymonkey_client::{Query, RequestMethod, Response};

use super::seg;
use crate::error::Result;

fn workgroup_path(workgroup_id: &str) -> String {
    format!("workgroups/{}", seg(workgroup_id))
}

impl super::SurveyMonkeyRestClient {
    #[instrument(skip(self))]
    pub async fn get_workgroups(&self, filters: Query) -> Result<Response> {
        self.list("workgroups".to_string(), filters).await
    }

    #[instrument(skip(self, data))]
    pub async fn create_workgroup<B: Serialize + ?Sized>(&self, data: &B) -> Result<Response> {
        self.send_json(RequestMethod::Post, "workgroups".to_string(), data).await
    }

    #[instrument(skip(self))]
    pub async fn get_workgroup(&self, workgroup_id: &str) -> Result<Response> {
        self.fetch(workgroup_path(workgroup_id)).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_workgroup<B: Serialize + ?Sized>(
        &self,
        workgroup_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(RequestMethod::Patch, workgroup_path(workgroup_id), data).await
    }

    #[instrument(skip(self))]
    pub async fn delete_workgroup(&self, workgroup_id: &str) -> Result<Response> {
        self.remove(workgroup_path(workgroup_id)).await
    }

    // Members

    #[instrument(skip(self))]
    pub async fn get_workgroup_members(
        &self,
        workgroup_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(format!("{}/members", workgroup_path(workgroup_id)), filters).await
    }

    #[instrument(skip(self, data))]
    pub async fn create_workgroup_member<B: Serialize + ?Sized>(
        &self,
        workgroup_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("{}/members", workgroup_path(workgroup_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn create_workgroup_members<B: Serialize + ?Sized>(
        &self,
        workgroup_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("{}/members/bulk", workgroup_path(workgroup_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_workgroup_member(
        &self,
        workgroup_id: &str,
        member_id: &str,
    ) -> Result<Response> {
        self.fetch(format!(
            "{}/members/{}",
            workgroup_path(workgroup_id),
            seg(member_id)
        ))
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn update_workgroup_member<B: Serialize + ?Sized>(
        &self,
        workgroup_id: &str,
        member_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Patch,
            format!("{}/members/{}", workgroup_path(workgroup_id), seg(member_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_workgroup_member(
        &self,
        workgroup_id: &str,
        member_id: &str,
    ) -> Result<Response> {
        self.remove(format!(
            "{}/members/{}",
            workgroup_path(workgroup_id),
            seg(member_id)
        ))
        .await
    }

    // Shares

    #[instrument(skip(self))]
    pub async fn get_workgroup_shares(
        &self,
        workgroup_id: &str,
        filters: Query,
    ) -> Result<Response> {
        self.list(format!("{}/shares", workgroup_path(workgroup_id)), filters).await
    }

    #[instrument(skip(self, data))]
    pub async fn create_workgroup_share<B: Serialize + ?Sized>(
        &self,
        workgroup_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("{}/shares", workgroup_path(workgroup_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self, data))]
    pub async fn create_workgroup_shares<B: Serialize + ?Sized>(
        &self,
        workgroup_id: &str,
        data: &B,
    ) -> Result<Response> {
        self.send_json(
            RequestMethod::Post,
            format!("{}/shares/bulk", workgroup_path(workgroup_id)),
            data,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_workgroup_share(
        &self,
        workgroup_id: &str,
        share_id: &str,
    ) -> Result<Response> {
        self.fetch(format!(
            "{}/shares/{}",
            workgroup_path(workgroup_id),
            seg(share_id)
        ))
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_workgroup_share(
        &self,
        workgroup_id: &str,
        share_id: &str,
    ) -> Result<Response> {
        self.remove(format!(
            "{}/shares/{}",
            workgroup_path(workgroup_id),
            seg(share_id)
        ))
        .await
    }

    #[instrument(skip(self))]
    pub async fn get_roles(&self, filters: Query) -> Result<Response> {
        self.list("roles".to_string(), filters).await
    }
}
