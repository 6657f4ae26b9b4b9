//! Wallet extension reached over HTTP JSON-RPC

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::domain::actions::{WalletExtension, WatchAssetRequest};
use crate::shared::errors::WalletError;

/// EIP-1193 "user rejected request"
const USER_REJECTED: i64 = 4001;

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: String,
    method: &'static str,
    params: &'a WatchAssetRequest,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<serde_json::Value>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

pub struct JsonRpcWallet {
    client: Client,
    url: String,
}

impl JsonRpcWallet {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, WalletError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WalletError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

fn interpret(response: RpcResponse) -> Result<bool, WalletError> {
    if let Some(error) = response.error {
        return Err(if error.code == USER_REJECTED {
            WalletError::Rejected(error.message)
        } else {
            WalletError::InvalidResponse(format!("{}: {}", error.code, error.message))
        });
    }

    match response.result {
        Some(serde_json::Value::Bool(added)) => Ok(added),
        Some(other) => Err(WalletError::InvalidResponse(format!("unexpected result {}", other))),
        None => Err(WalletError::InvalidResponse("missing result".to_string())),
    }
}

#[async_trait]
impl WalletExtension for JsonRpcWallet {
    async fn watch_asset(&self, request: &WatchAssetRequest) -> Result<bool, WalletError> {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: uuid::Uuid::new_v4().to_string(),
            method: "wallet_watchAsset",
            params: request,
        };
        debug!("wallet_watchAsset -> {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| WalletError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WalletError::NetworkError(format!("HTTP {}", response.status())));
        }

        let parsed: RpcResponse = response
            .json()
            .await
            .map_err(|e| WalletError::InvalidResponse(e.to_string()))?;
        interpret(parsed)
    }
}
