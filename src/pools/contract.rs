//! Pool contract reads

use alloy::{
    primitives::{keccak256, Address, Bytes, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol_types::SolValue,
};
use std::future::Future;
use std::sync::Arc;
use tracing::debug;
use crate::{
    errors::{PoolError, PoolResult},
    types::PoolData,
    ConcreteProvider,
};

/// Anything that can produce pool metadata for an address.
pub trait PoolDataSource: Send + Sync + 'static {
    fn fetch(&self, address: Address) -> impl Future<Output = PoolResult<PoolData>> + Send;
}

/// Reads pool metadata with raw `eth_call`s against a JSON-RPC provider.
#[derive(Clone)]
pub struct RpcPoolSource {
    provider: Arc<ConcreteProvider>,
}

impl RpcPoolSource {
    pub fn new(provider: Arc<ConcreteProvider>) -> Self {
        Self { provider }
    }
}

impl PoolDataSource for RpcPoolSource {
    async fn fetch(&self, address: Address) -> PoolResult<PoolData> {
        get_pool_data(self.provider.as_ref(), address).await
    }
}

fn selector(signature: &str) -> Bytes {
    Bytes::copy_from_slice(&keccak256(signature)[..4])
}

async fn call_view(provider: &dyn Provider, address: Address, signature: &str) -> PoolResult<Bytes> {
    let tx = TransactionRequest::default()
        .to(address)
        .input(selector(signature).into());

    provider.call(&tx).await
        .map_err(|e| PoolError::Contract {
            contract: address,
            message: format!("Failed to call {}", signature),
            source: e.into(),
        })
}

async fn read_value<T: SolValue>(provider: &dyn Provider, address: Address, signature: &str) -> PoolResult<T>
where
    T: From<<T::SolType as alloy::sol_types::SolType>::RustType>,
{
    let raw = call_view(provider, address, signature).await?;
    T::abi_decode(&raw, true)
        .map_err(|e| PoolError::DataParsing {
            context: format!("Failed to decode {} from {}", signature, address),
            source: e.into(),
        })
}

async fn read<T: SolValue>(provider: &dyn Provider, address: Address, signature: &str) -> Option<T>
where
    T: From<<T::SolType as alloy::sol_types::SolType>::RustType>,
{
    match read_value::<T>(provider, address, signature).await {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(pool = %address, call = signature, kind = e.kind(), error = %e, "Pool read failed");
            None
        }
    }
}

/// Reads every metadata field independently. A failed read leaves only its
/// own field empty; the fetch fails only when nothing could be read.
pub async fn get_pool_data(provider: &dyn Provider, address: Address) -> PoolResult<PoolData> {
    debug!("Getting pool data at {}", address);

    let name = read::<String>(provider, address, "name()").await;
    let symbol = read::<String>(provider, address, "symbol()").await;
    let total_supply = read::<U256>(provider, address, "totalSupply()").await;
    let decimals = read::<u8>(provider, address, "decimals()").await;
    let vault_address = read::<Address>(provider, address, "getVault()").await;

    let data = PoolData {
        name,
        symbol,
        address: Some(address),
        vault_address,
        total_supply,
        decimals,
    };

    if !has_contract_fields(&data) {
        return Err(PoolError::Contract {
            contract: address,
            message: "No pool metadata could be read".to_string(),
            source: anyhow::anyhow!("all contract reads failed"),
        });
    }

    Ok(data)
}

fn has_contract_fields(data: &PoolData) -> bool {
    data.name.is_some()
        || data.symbol.is_some()
        || data.total_supply.is_some()
        || data.decimals.is_some()
        || data.vault_address.is_some()
}
