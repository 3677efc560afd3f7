//! Vercel HTTP 请求方法

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::{HttpResponse, HttpUtils};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::CursorParams;

use super::{MAX_PAGE_SIZE, VercelErrorBody, VercelProvider};

impl VercelProvider {
    /// 构建请求：Bearer token + 可选 teamId
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self
            .client
            .request(method, url)
            .bearer_auth(&self.credentials.api_token);
        match &self.credentials.team_id {
            Some(team) => builder.query(&[("teamId", team.as_str())]),
            None => builder,
        }
    }

    /// 分页查询参数
    pub(crate) fn cursor_query(params: &CursorParams) -> Vec<(&'static str, String)> {
        let params = params.validated(MAX_PAGE_SIZE);
        let mut query = vec![("limit", params.limit.to_string())];
        if let Some(until) = params.until {
            query.push(("until", until.to_string()));
        }
        query
    }

    /// 非 2xx 响应转为 [`ProviderError`](crate::ProviderError)
    fn check_status(&self, resp: HttpResponse, context: ErrorContext) -> Result<HttpResponse> {
        if resp.is_success() {
            return Ok(resp);
        }

        let raw = match serde_json::from_str::<VercelErrorBody>(&resp.body) {
            Ok(VercelErrorBody { error }) => {
                let message = error
                    .message
                    .unwrap_or_else(|| format!("HTTP {}", resp.status));
                let code = if error.invalid_token {
                    Some("invalid_token".to_string())
                } else {
                    error.code
                };
                RawApiError {
                    status: resp.status,
                    code,
                    message,
                }
            }
            Err(_) => RawApiError::new(resp.status, format!("HTTP {}", resp.status)),
        };

        let err = self.map_error(raw, context);
        if err.is_expected() {
            log::warn!("{err}");
        } else {
            log::error!("{err}");
        }
        Err(err)
    }

    /// GET（带重试）
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        context: ErrorContext,
    ) -> Result<T> {
        let builder = self.request(Method::GET, path).query(query);
        let resp = HttpUtils::execute_request_with_retry(
            builder,
            self.provider_name(),
            "GET",
            path,
            self.max_retries,
        )
        .await?;
        let resp = self.check_status(resp, context)?;
        HttpUtils::parse_json(&resp.body, self.provider_name())
    }

    /// POST（写操作，不重试）
    pub(crate) async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let builder = self.request(Method::POST, path).json(body);
        let resp =
            HttpUtils::execute_request(builder, self.provider_name(), "POST", path).await?;
        let resp = self.check_status(resp, context)?;
        HttpUtils::parse_json(&resp.body, self.provider_name())
    }

    /// PATCH（写操作，不重试，忽略响应体）
    pub(crate) async fn patch<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<()> {
        let builder = self.request(Method::PATCH, path).json(body);
        let resp =
            HttpUtils::execute_request(builder, self.provider_name(), "PATCH", path).await?;
        self.check_status(resp, context).map(|_| ())
    }

    /// DELETE（写操作，不重试）
    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<()> {
        let builder = self.request(Method::DELETE, path);
        let resp =
            HttpUtils::execute_request(builder, self.provider_name(), "DELETE", path).await?;
        self.check_status(resp, context).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_query_clamps_limit_and_adds_until() {
        let q = VercelProvider::cursor_query(&CursorParams {
            limit: 500,
            until: Some(42),
        });
        assert_eq!(
            q,
            vec![("limit", "100".to_string()), ("until", "42".to_string())]
        );

        let q = VercelProvider::cursor_query(&CursorParams::first(20));
        assert_eq!(q, vec![("limit", "20".to_string())]);
    }
}
