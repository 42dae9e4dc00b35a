//! Contract reads against a JSON-RPC endpoint served by mockito

use alloy::{
    primitives::{address, hex, keccak256, Address, U256},
    providers::ProviderBuilder,
    sol_types::SolValue,
    transports::http::reqwest::Url,
};
use mockito::{Matcher, Mock, Request, Server, ServerGuard};
use pool_details::{
    pools::{PoolDataSource, RpcPoolSource},
    ConcreteProvider, PoolError,
};
use serde_json::{json, Value};
use std::sync::Arc;

const POOL: Address = address!("5555555555555555555555555555555555555555");
const VAULT: Address = address!("7777777777777777777777777777777777777777");

fn selector_hex(signature: &str) -> String {
    hex::encode(&keccak256(signature)[..4])
}

fn source(server: &ServerGuard) -> RpcPoolSource {
    let url = server.url().parse::<Url>().expect("mock server url");
    let provider: Arc<ConcreteProvider> = Arc::new(ProviderBuilder::new().on_http(url).boxed());
    RpcPoolSource::new(provider)
}

/// JSON-RPC reply echoing the request id; `payload` holds `result` or `error`.
fn rpc_reply(payload: Value) -> impl Fn(&Request) -> Vec<u8> + Send + Sync + 'static {
    move |request: &Request| {
        let id = request
            .body()
            .ok()
            .and_then(|body| serde_json::from_slice::<Value>(body).ok())
            .map(|body| body["id"].clone())
            .unwrap_or(json!(0));
        let mut reply = payload.clone();
        reply["jsonrpc"] = json!("2.0");
        reply["id"] = id;
        serde_json::to_vec(&reply).unwrap_or_default()
    }
}

fn returns(data: Vec<u8>) -> Value {
    json!({ "result": hex::encode_prefixed(data) })
}

fn reverts() -> Value {
    json!({ "error": { "code": 3, "message": "execution reverted", "data": "0x" } })
}

async fn mock_call(server: &mut ServerGuard, signature: &str, payload: Value) -> Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::Regex(selector_hex(signature)))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body_from_request(rpc_reply(payload))
        .create_async()
        .await
}

fn one_token() -> U256 {
    U256::from(10u64).pow(U256::from(18u64))
}

#[tokio::test]
async fn decodes_every_field() {
    let mut server = Server::new_async().await;
    let _name = mock_call(&mut server, "name()", returns("Weighted Pool".to_string().abi_encode())).await;
    let _symbol = mock_call(&mut server, "symbol()", returns("80BAL-20WETH".to_string().abi_encode())).await;
    let _supply = mock_call(&mut server, "totalSupply()", returns(one_token().abi_encode())).await;
    let _decimals = mock_call(&mut server, "decimals()", returns(18u8.abi_encode())).await;
    let _vault = mock_call(&mut server, "getVault()", returns(VAULT.abi_encode())).await;

    let data = tokio_test::assert_ok!(source(&server).fetch(POOL).await);

    assert_eq!(data.name.as_deref(), Some("Weighted Pool"));
    assert_eq!(data.symbol.as_deref(), Some("80BAL-20WETH"));
    assert_eq!(data.total_supply, Some(one_token()));
    assert_eq!(data.decimals, Some(18));
    assert_eq!(data.vault_address, Some(VAULT));
    assert_eq!(data.address, Some(POOL));
}

#[tokio::test]
async fn failed_reads_leave_other_fields_populated() {
    let mut server = Server::new_async().await;
    let _name = mock_call(&mut server, "name()", returns("Weighted Pool".to_string().abi_encode())).await;
    let _symbol = mock_call(&mut server, "symbol()", returns("80BAL-20WETH".to_string().abi_encode())).await;
    let _supply = mock_call(&mut server, "totalSupply()", returns(one_token().abi_encode())).await;
    // Too short to hold an ABI word.
    let _decimals = mock_call(&mut server, "decimals()", json!({ "result": "0x1234" })).await;
    let _vault = mock_call(&mut server, "getVault()", reverts()).await;

    let data = tokio_test::assert_ok!(source(&server).fetch(POOL).await);

    assert_eq!(data.name.as_deref(), Some("Weighted Pool"));
    assert_eq!(data.symbol.as_deref(), Some("80BAL-20WETH"));
    assert_eq!(data.total_supply, Some(one_token()));
    assert_eq!(data.decimals, None);
    assert_eq!(data.vault_address, None);
    assert_eq!(data.address, Some(POOL));
}

#[tokio::test]
async fn every_read_reverting_is_a_contract_error() {
    let mut server = Server::new_async().await;
    let _any = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body_from_request(rpc_reply(reverts()))
        .create_async()
        .await;

    let error = tokio_test::assert_err!(source(&server).fetch(POOL).await);

    assert_eq!(error.kind(), "contract");
    assert!(matches!(error, PoolError::Contract { contract, .. } if contract == POOL));
}
