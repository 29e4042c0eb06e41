use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::types::*;
use super::{ApiError, Endpoint, GymApi};
use crate::auth::session::SessionUser;

/// Thin REST wrapper over the club backend.
///
/// No timeout and no retry are configured: a failed call is terminal for that
/// one request and the caller decides what to render.
#[derive(Clone)]
pub struct HttpGymApi {
    client: Client,
    base_url: String,
}

impl HttpGymApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn authorize(req: RequestBuilder, user: &SessionUser) -> RequestBuilder {
        match &user.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        user: &SessionUser,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut req = self.client.get(self.url(endpoint));
        if !query.is_empty() {
            req = req.query(query);
        }
        let resp = Self::authorize(req, user).send().await?;
        Self::decode(endpoint, resp).await
    }

    async fn decode<T: DeserializeOwned>(endpoint: Endpoint, resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status: status.as_u16() });
        }
        let body = resp.text().await?;
        let decode_err = |e: serde_json::Error| ApiError::Decode { endpoint, message: e.to_string() };

        let body: serde_json::Value = serde_json::from_str(&body).map_err(decode_err)?;
        let payload =
            open_envelope(body).map_err(|message| ApiError::Rejected { endpoint, message })?;
        serde_json::from_value(payload).map_err(decode_err)
    }
}

#[async_trait]
impl GymApi for HttpGymApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let resp = self
            .client
            .post(self.url(Endpoint::Login))
            .json(credentials)
            .send()
            .await?;
        Self::decode(Endpoint::Login, resp).await
    }

    async fn logout(&self, user: &SessionUser) -> Result<(), ApiError> {
        let req = self.client.post(self.url(Endpoint::Logout));
        let resp = Self::authorize(req, user).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint: Endpoint::Logout, status: status.as_u16() });
        }
        Ok(())
    }

    async fn member_dashboard(&self, user: &SessionUser) -> Result<MemberDashboardPayload, ApiError> {
        self.get(Endpoint::MemberDashboard, user, &[]).await
    }

    async fn trainer_dashboard(&self, user: &SessionUser) -> Result<TrainerDashboardPayload, ApiError> {
        self.get(Endpoint::TrainerDashboard, user, &[]).await
    }

    async fn staff_dashboard(&self, user: &SessionUser) -> Result<StaffStatsPayload, ApiError> {
        self.get(Endpoint::StaffDashboard, user, &[]).await
    }

    async fn leads(&self, user: &SessionUser) -> Result<Vec<LeadPayload>, ApiError> {
        self.get(Endpoint::Leads, user, &[]).await
    }

    async fn manager_dashboard(&self, user: &SessionUser) -> Result<ManagerStatsPayload, ApiError> {
        self.get(Endpoint::ManagerDashboard, user, &[]).await
    }

    async fn invoices(
        &self,
        user: &SessionUser,
        status: Option<&str>,
    ) -> Result<Vec<InvoicePayload>, ApiError> {
        match status {
            Some(s) => self.get(Endpoint::Invoices, user, &[("status", s)]).await,
            None => self.get(Endpoint::Invoices, user, &[]).await,
        }
    }

    async fn branch_stats(&self, user: &SessionUser) -> Result<BranchStatsPayload, ApiError> {
        self.get(Endpoint::BranchStats, user, &[]).await
    }

    async fn branch_activities(&self, user: &SessionUser) -> Result<Vec<ActivityPayload>, ApiError> {
        self.get(Endpoint::BranchActivities, user, &[]).await
    }

    async fn branch_trainers(&self, user: &SessionUser) -> Result<Vec<TrainerStatusPayload>, ApiError> {
        self.get(Endpoint::BranchTrainers, user, &[]).await
    }

    async fn network_stats(&self, user: &SessionUser) -> Result<NetworkStatsPayload, ApiError> {
        self.get(Endpoint::NetworkStats, user, &[]).await
    }

    async fn branches(&self, user: &SessionUser) -> Result<Vec<BranchSummaryPayload>, ApiError> {
        self.get(Endpoint::Branches, user, &[]).await
    }
}
