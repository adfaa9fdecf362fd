//! Report builder — flattens ranked stats into output records.
//!
//! Pure formatting: rounding to cents and top-products truncation.
//! No new figures are computed here.

use crate::{
    accumulator::{ProductTally, SellerStat},
    config::{TopProductKey, TopProductsConfig},
    types::{round_cents, Money, SellerId, Sku},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku:      Sku,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name:     Option<String>,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue:  Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id:    SellerId,
    pub name:         String,
    pub revenue:      Money,
    pub profit:       Money,
    pub sales_count:  u64,
    pub top_products: Vec<TopProduct>,
    pub bonus:        Money,
}

pub fn build_report(ranked: &[SellerStat], config: &TopProductsConfig) -> Vec<SellerReport> {
    ranked
        .iter()
        .map(|stat| SellerReport {
            seller_id:    stat.seller_id.clone(),
            name:         stat.name.clone(),
            revenue:      round_cents(stat.revenue),
            profit:       round_cents(stat.profit),
            sales_count:  stat.sales_count,
            top_products: top_products(stat.product_tallies(), config),
            bonus:        round_cents(stat.bonus),
        })
        .collect()
}

fn top_products(tallies: &[ProductTally], config: &TopProductsConfig) -> Vec<TopProduct> {
    let mut sorted: Vec<&ProductTally> = tallies.iter().collect();
    match config.key {
        TopProductKey::Quantity => sorted.sort_by(|a, b| b.quantity.total_cmp(&a.quantity)),
        TopProductKey::Revenue => sorted.sort_by(|a, b| b.revenue.total_cmp(&a.revenue)),
    }

    sorted
        .into_iter()
        .take(config.limit)
        .map(|tally| TopProduct {
            sku:      tally.sku.clone(),
            name:     config.include_name.then(|| tally.name.clone()),
            quantity: tally.quantity,
            revenue:  config.include_revenue.then(|| round_cents(tally.revenue)),
        })
        .collect()
}
