//! Pool details table

use alloy::primitives::U256;
use maud::{html, Markup};
use crate::{
    render::{address_widget, RenderOptions},
    types::PoolData,
    utils::{format_units, DEFAULT_DECIMALS},
};

const ROW_BORDER: &str = "border-b border-accent";

pub struct DetailRow {
    pub attribute: &'static str,
    pub detail: Markup,
}

/// Builds the five display rows. Absent fields render blank, or as zero for
/// the total supply.
pub fn detail_rows(pool: Option<&PoolData>, opts: &RenderOptions) -> Vec<DetailRow> {
    let explorer = opts.block_explorer_url.as_deref();
    let text = |value: Option<&String>| html! { (value.map(String::as_str).unwrap_or_default()) };

    let total_supply = format_units(
        pool.and_then(|p| p.total_supply).unwrap_or(U256::ZERO),
        pool.and_then(|p| p.decimals).unwrap_or(DEFAULT_DECIMALS),
    );

    vec![
        DetailRow {
            attribute: "Name",
            detail: text(pool.and_then(|p| p.name.as_ref())),
        },
        DetailRow {
            attribute: "Symbol",
            detail: text(pool.and_then(|p| p.symbol.as_ref())),
        },
        DetailRow {
            attribute: "Contract Address",
            detail: address_widget(pool.and_then(|p| p.address), opts.address_size, explorer),
        },
        DetailRow {
            attribute: "Vault Address",
            detail: address_widget(pool.and_then(|p| p.vault_address), opts.address_size, explorer),
        },
        DetailRow {
            attribute: "Total Supply",
            detail: html! { (total_supply) },
        },
    ]
}

pub fn render_pool_details(pool: Option<&PoolData>, opts: &RenderOptions) -> Markup {
    let rows = detail_rows(pool, opts);
    let last = rows.len().saturating_sub(1);

    html! {
        div class="w-full" {
            h5 class="text-2xl font-bold mb-3" { "Details" }
            div class="overflow-x-auto rounded-lg" {
                table class="table text-lg" {
                    thead {
                        tr class="text-lg bg-base-100 border-b border-accent" {
                            th class="border-r border-accent" { "Attribute" }
                            th { "Details" }
                        }
                    }
                    tbody class="bg-base-200" {
                        @for (index, row) in rows.iter().enumerate() {
                            tr class=[(index < last).then_some(ROW_BORDER)] {
                                td class="border-r border-accent" { (row.attribute) }
                                td { (row.detail) }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, Address};

    const POOL: Address = address!("1111111111111111111111111111111111111111");
    const VAULT: Address = address!("2222222222222222222222222222222222222222");

    fn full_pool() -> PoolData {
        PoolData {
            name: Some("Balancer Constant Product Pool".to_string()),
            symbol: Some("B-50WETH-50USDC".to_string()),
            address: Some(POOL),
            vault_address: Some(VAULT),
            total_supply: Some(U256::from(10u64).pow(U256::from(18u64))),
            decimals: Some(18),
        }
    }

    fn attributes(rows: &[DetailRow]) -> Vec<&'static str> {
        rows.iter().map(|r| r.attribute).collect()
    }

    const ORDER: [&str; 5] = ["Name", "Symbol", "Contract Address", "Vault Address", "Total Supply"];

    #[test]
    fn full_pool_has_five_rows_in_order() {
        let pool = full_pool();
        let rows = detail_rows(Some(&pool), &RenderOptions::default());
        assert_eq!(attributes(&rows), ORDER);
        assert_eq!(rows[0].detail.0, "Balancer Constant Product Pool");
        assert_eq!(rows[1].detail.0, "B-50WETH-50USDC");
        assert_eq!(rows[4].detail.0, "1");
    }

    #[test]
    fn absent_pool_renders_blank_rows() {
        let rows = detail_rows(None, &RenderOptions::default());
        assert_eq!(attributes(&rows), ORDER);
        assert_eq!(rows[0].detail.0, "");
        assert_eq!(rows[1].detail.0, "");
        assert!(rows[2].detail.0.contains("animate-pulse"));
        assert!(rows[3].detail.0.contains("animate-pulse"));
        assert_eq!(rows[4].detail.0, "0");
    }

    #[test]
    fn missing_decimals_default_to_eighteen() {
        let pool = PoolData {
            decimals: None,
            ..full_pool()
        };
        let rows = detail_rows(Some(&pool), &RenderOptions::default());
        assert_eq!(rows[4].detail.0, "1");
    }

    #[test]
    fn explicit_decimals_are_used() {
        let pool = PoolData {
            total_supply: Some(U256::from(2_500_000u64)),
            decimals: Some(6),
            ..full_pool()
        };
        let rows = detail_rows(Some(&pool), &RenderOptions::default());
        assert_eq!(rows[4].detail.0, "2.5");
    }

    #[test]
    fn zero_decimals_are_kept_not_defaulted() {
        let pool = PoolData {
            total_supply: Some(U256::from(1_000u64)),
            decimals: Some(0),
            ..full_pool()
        };
        let rows = detail_rows(Some(&pool), &RenderOptions::default());
        assert_eq!(rows[4].detail.0, "1000");
    }

    #[test]
    fn missing_supply_is_zero() {
        let pool = PoolData {
            total_supply: None,
            ..full_pool()
        };
        let rows = detail_rows(Some(&pool), &RenderOptions::default());
        assert_eq!(rows[4].detail.0, "0");
    }

    #[test]
    fn only_last_row_lacks_bottom_border() {
        let html = render_pool_details(Some(&full_pool()), &RenderOptions::default()).into_string();
        let body = html.split("<tbody").nth(1).expect("table body");
        let rows: Vec<&str> = body.split("<tr").skip(1).collect();

        assert_eq!(rows.len(), 5);
        for row in &rows[..4] {
            assert!(row.starts_with(r#" class="border-b border-accent">"#), "{row}");
        }
        assert!(rows[4].starts_with("><td"), "{}", rows[4]);
    }

    #[test]
    fn renders_header_and_escapes_text() {
        let pool = PoolData {
            name: Some("<script>".to_string()),
            ..full_pool()
        };
        let html = render_pool_details(Some(&pool), &RenderOptions::default()).into_string();
        assert!(html.contains(r#"<th class="border-r border-accent">Attribute</th><th>Details</th>"#));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
