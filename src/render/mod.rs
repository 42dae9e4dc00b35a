//! HTML rendering for pool details

pub mod address;
pub mod details;
pub mod page;

pub use address::*;
pub use details::*;
pub use page::*;

use crate::{config::Config, types::AddressSize};

/// Presentation knobs shared by the renderers.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub address_size: AddressSize,
    pub block_explorer_url: Option<String>,
}

impl RenderOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            address_size: config.address_size,
            block_explorer_url: config.block_explorer_url.clone(),
        }
    }
}
