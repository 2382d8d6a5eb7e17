//! Caller identity.
//!
//! The HTTP layer never authenticates users itself: it hands the bearer token
//! to an [`IdentityProvider`] and scopes every operation by the id it returns.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::bail;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::api_error::ApiError;
use crate::AppState;

/// Resolves a bearer token to the owning user id.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `None` means the token is unknown; the request is unauthenticated.
    async fn user_for_token(&self, token: &str) -> Option<String>;
}

/// Fixed token table, configured from `LINKSAVER_TOKENS` (`token:user_id,...`).
#[derive(Debug, Clone, Default)]
pub struct StaticTokenIdentity {
    tokens: HashMap<String, String>,
}

impl StaticTokenIdentity {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let mut tokens = HashMap::new();
        for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let Some((token, user_id)) = pair.split_once(':') else {
                bail!("token entry '{pair}' is not in token:user_id form");
            };
            let (token, user_id) = (token.trim(), user_id.trim());
            if token.is_empty() || user_id.is_empty() {
                bail!("token entry '{pair}' has an empty token or user id");
            }
            tokens.insert(token.to_owned(), user_id.to_owned());
        }
        Ok(Self { tokens })
    }

    /// Reads `LINKSAVER_TOKENS`. Unset yields an empty table that rejects
    /// every request.
    pub fn from_env() -> anyhow::Result<Self> {
        match linksaver_core::env_non_empty("LINKSAVER_TOKENS") {
            Some(raw) => Self::parse(&raw),
            None => {
                tracing::warn!("LINKSAVER_TOKENS not set, every API request will be unauthorized");
                Ok(Self::default())
            },
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl IdentityProvider for StaticTokenIdentity {
    async fn user_for_token(&self, token: &str) -> Option<String> {
        self.tokens.get(token).cloned()
    }
}

/// The authenticated caller's user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerId(pub String);

impl FromRequestParts<Arc<AppState>> for CallerId {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::Unauthorized)?;
        state.identity.user_for_token(token).await.map(Self).ok_or(ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parse_token_table() {
        let identity = StaticTokenIdentity::parse(" alpha:user-1 , beta:user-2,").unwrap();
        assert_eq!(identity.len(), 2);
        assert_eq!(identity.user_for_token("alpha").await.as_deref(), Some("user-1"));
        assert_eq!(identity.user_for_token("beta").await.as_deref(), Some("user-2"));
        assert_eq!(identity.user_for_token("gamma").await, None);
    }

    #[test]
    fn test_parse_rejects_malformed_entries() {
        assert!(StaticTokenIdentity::parse("alpha").is_err());
        assert!(StaticTokenIdentity::parse("alpha:").is_err());
        assert!(StaticTokenIdentity::parse(":user-1").is_err());
    }

    #[test]
    fn test_parse_empty_is_empty_table() {
        assert!(StaticTokenIdentity::parse("").unwrap().is_empty());
    }
}
