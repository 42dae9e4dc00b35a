//! Pool-related types and structures

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pool metadata as read from chain. Every field may be absent while a
/// fetch is pending or when an individual read failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolData {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub address: Option<Address>,
    pub vault_address: Option<Address>,
    pub total_supply: Option<U256>,
    pub decimals: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    #[default]
    Idle,
    Pending,
    Resolved,
    Failed,
}

/// Observable state of a pool query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySnapshot {
    pub address: String,
    pub status: QueryStatus,
    pub data: Option<PoolData>,
    /// `PoolError::kind` of the last failure, cleared on success.
    pub error_kind: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl QuerySnapshot {
    pub fn pending(address: &str) -> Self {
        Self {
            address: address.to_string(),
            status: QueryStatus::Pending,
            data: None,
            error_kind: None,
            updated_at: None,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.status, QueryStatus::Resolved | QueryStatus::Failed)
    }
}
