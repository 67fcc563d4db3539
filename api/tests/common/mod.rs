#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use axum::{body::Body, Router};
use http::{Request, StatusCode};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_rpc_client_api::{
    request::RpcRequest,
    response::{Response, RpcBlockhash, RpcResponseContext},
};
use solana_sdk::{hash::Hash, pubkey::Pubkey};
use stake_delegation_api::router::{get_routes, RouterState};
use stake_delegation_sdk::models::config::StakeConfig;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub stake_config: StakeConfig,
}

impl TestApp {
    /// App whose RPC node answers `getLatestBlockhash` with the given lifetime.
    pub fn with_blockhash(blockhash: Hash, last_valid_block_height: u64) -> Self {
        let stake_config = StakeConfig::new(Pubkey::new_unique());
        Self::with_stake_config(stake_config, blockhash, last_valid_block_height)
    }

    /// Same as [`TestApp::with_blockhash`], serving the given validator settings.
    pub fn with_stake_config(
        stake_config: StakeConfig,
        blockhash: Hash,
        last_valid_block_height: u64,
    ) -> Self {
        let mut mocks = HashMap::new();
        mocks.insert(
            RpcRequest::GetLatestBlockhash,
            serde_json::to_value(Response {
                context: RpcResponseContext {
                    slot: 1,
                    api_version: None,
                },
                value: RpcBlockhash {
                    blockhash: blockhash.to_string(),
                    last_valid_block_height,
                },
            })
            .unwrap(),
        );
        Self::new(
            RpcClient::new_mock_with_mocks("succeeds".to_string(), mocks),
            stake_config,
        )
    }

    /// App whose RPC node fails every request.
    pub fn with_failing_rpc() -> Self {
        Self::new(
            RpcClient::new_mock("fails".to_string()),
            StakeConfig::new(Pubkey::new_unique()),
        )
    }

    fn new(rpc_client: RpcClient, stake_config: StakeConfig) -> Self {
        let router = get_routes(Arc::new(RouterState {
            stake_config: stake_config.clone(),
            rpc_client,
        }));
        Self {
            router,
            stake_config,
        }
    }

    pub async fn post(self, uri: &str, body: impl Into<String>) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.into()))
            .unwrap();
        Self::send(self.router, request).await
    }

    pub async fn get(self, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        Self::send(self.router, request).await
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        (status, body.to_vec())
    }
}
