//! Accumulator — walks purchase records and builds per-seller totals.
//!
//! Tolerance policy (never raised to the caller):
//!   - a record whose seller_id is unknown is dropped whole
//!   - a line item whose SKU is unknown is dropped
//!   - missing or non-numeric discount counts as 0
//!   - missing price or quantity is left to the revenue strategy
//!
//! Stats live in an arena ordered like the seller index; each stat's
//! product tallies are likewise a Vec keyed through a SKU map.

use crate::{
    index::CatalogIndex,
    model::PurchaseRecord,
    strategy::{AnalysisOptions, SaleLine},
    types::{round_cents, Money, SellerId, Sku},
};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductTally {
    pub sku:      Sku,
    pub name:     String,
    pub quantity: f64,
    pub revenue:  Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SellerStat {
    pub seller_id:    SellerId,
    pub name:         String,
    pub sales_count:  u64,
    pub revenue:      Money,
    pub profit:       Money,
    pub bonus:        Money,
    top_products:     Vec<ProductTally>,
    product_slots:    HashMap<Sku, usize>,
}

impl SellerStat {
    pub fn new(seller_id: SellerId, name: String) -> Self {
        Self {
            seller_id,
            name,
            sales_count: 0,
            revenue: 0.0,
            profit: 0.0,
            bonus: 0.0,
            top_products: Vec::new(),
            product_slots: HashMap::new(),
        }
    }

    /// Product tallies in first-sold order.
    pub fn product_tallies(&self) -> &[ProductTally] {
        &self.top_products
    }

    fn record_product(&mut self, sku: &str, name: &str, quantity: f64, revenue: Money) {
        let slot = match self.product_slots.get(sku) {
            Some(&slot) => slot,
            None => {
                self.product_slots.insert(sku.to_string(), self.top_products.len());
                self.top_products.push(ProductTally {
                    sku:      sku.to_string(),
                    name:     name.to_string(),
                    quantity: 0.0,
                    revenue:  0.0,
                });
                self.top_products.len() - 1
            }
        };
        let tally = &mut self.top_products[slot];
        tally.quantity += quantity;
        tally.revenue += revenue;
    }
}

/// Counters for the pass summary log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccumulationSummary {
    pub records_attributed: u64,
    pub records_skipped:    u64,
    pub items_attributed:   u64,
    pub items_skipped:      u64,
}

pub struct Accumulation {
    pub stats:   Vec<SellerStat>,
    pub summary: AccumulationSummary,
}

pub fn accumulate(
    records: &[PurchaseRecord],
    index: &CatalogIndex<'_>,
    options: &AnalysisOptions,
) -> Accumulation {
    let mut stats: Vec<SellerStat> = index
        .sellers()
        .iter()
        .map(|seller| SellerStat::new(seller.id.clone(), seller.display_name()))
        .collect();
    let mut summary = AccumulationSummary::default();

    for record in records {
        let Some(slot) = index.seller_slot(&record.seller_id) else {
            log::debug!("skipping purchase record for unknown seller '{}'", record.seller_id);
            summary.records_skipped += 1;
            continue;
        };
        let stat = &mut stats[slot];
        stat.sales_count += 1;
        summary.records_attributed += 1;

        for item in &record.items {
            let Some(product) = index.product(&item.sku) else {
                log::debug!(
                    "skipping line item with unknown SKU '{}' (seller '{}')",
                    item.sku,
                    record.seller_id
                );
                summary.items_skipped += 1;
                continue;
            };

            let line = SaleLine::from_item(item);
            let revenue = options.revenue.revenue(&line, product);
            let profit = options.line_profit(&line, product, revenue);

            stat.revenue += if options.round_line_revenue {
                round_cents(revenue)
            } else {
                revenue
            };
            stat.profit += profit;
            stat.record_product(&product.sku, &product.name, line.units(), revenue);
            summary.items_attributed += 1;
        }
    }

    Accumulation { stats, summary }
}
