//! The seam between the dashboard and wherever presence data comes from.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::model::{MeanTimeRow, PresenceDayRow, StartEndRow, TableValue, User};

/// Anything that can answer the `/api/v1` GET endpoints.
///
/// Implementors only provide [`PresenceSource::fetch_json`]; the typed
/// accessors decode on top of it so every source shares one decoding path.
/// Futures are not `Send` because the browser build runs on a single thread.
#[async_trait(?Send)]
pub trait PresenceSource {
    async fn fetch_json(&self, endpoint: Endpoint) -> ApiResult<Value>;

    async fn users(&self) -> ApiResult<Vec<User>> {
        decode(Endpoint::Users, self.fetch_json(Endpoint::Users).await?)
    }

    async fn users_data(&self) -> ApiResult<Vec<User>> {
        decode(Endpoint::UsersData, self.fetch_json(Endpoint::UsersData).await?)
    }

    async fn mean_time_weekday(&self, user_id: u32) -> ApiResult<Vec<MeanTimeRow>> {
        let endpoint = Endpoint::MeanTimeWeekday(user_id);
        decode(endpoint, self.fetch_json(endpoint).await?)
    }

    async fn presence_weekday(&self, user_id: u32) -> ApiResult<Vec<Vec<TableValue>>> {
        let endpoint = Endpoint::PresenceWeekday(user_id);
        decode(endpoint, self.fetch_json(endpoint).await?)
    }

    async fn presence_start_end(&self, user_id: u32) -> ApiResult<Vec<StartEndRow>> {
        let endpoint = Endpoint::PresenceStartEnd(user_id);
        decode(endpoint, self.fetch_json(endpoint).await?)
    }

    async fn presence_days(&self, user_id: u32) -> ApiResult<Vec<PresenceDayRow>> {
        let endpoint = Endpoint::PresenceDays(user_id);
        decode(endpoint, self.fetch_json(endpoint).await?)
    }
}

fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: Value) -> ApiResult<T> {
    serde_json::from_value(body).map_err(|err| {
        tracing::warn!(%endpoint, %err, "unexpected response shape");
        ApiError::Decode(format!("{endpoint}: {err}"))
    })
}
