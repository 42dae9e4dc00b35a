//! Address widget

use alloy::primitives::Address;
use maud::{html, Markup};
use crate::types::AddressSize;

/// `0x1234...abcd` from a checksummed address.
pub fn shorten_address(checksummed: &str) -> String {
    if checksummed.len() <= 10 {
        return checksummed.to_string();
    }
    format!("{}...{}", &checksummed[..6], &checksummed[checksummed.len() - 4..])
}

pub fn address_widget(
    address: Option<Address>,
    size: AddressSize,
    block_explorer_url: Option<&str>,
) -> Markup {
    let Some(address) = address else {
        return html! {
            div class="animate-pulse flex space-x-4" {
                div class="rounded-md bg-slate-300 h-6 w-6" {}
                div class="flex items-center space-y-6" {
                    div class="h-2 w-28 bg-slate-300 rounded" {}
                }
            }
        };
    };

    let checksummed = address.to_checksum(None);
    let display = shorten_address(&checksummed);
    let text_class = format!("ml-1.5 font-normal {}", size.text_class());

    html! {
        div class="flex items-center" title=(checksummed) {
            @if let Some(explorer) = block_explorer_url {
                a class=(text_class) target="_blank" rel="noopener noreferrer"
                    href=(format!("{}/address/{}", explorer, checksummed)) {
                    (display)
                }
            } @else {
                span class=(text_class) { (display) }
            }
        }
    }
}
