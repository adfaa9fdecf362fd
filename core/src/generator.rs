//! Synthetic dataset generator.
//!
//! Produces a reproducible SalesData snapshot for demos, benchmarks
//! and tests. With a non-zero anomaly rate it also emits the inputs
//! the accumulator is expected to tolerate: purchase records for
//! unknown sellers, unknown SKUs, missing discounts and missing prices.

use crate::{
    error::{ReportError, ReportResult},
    model::{LineItem, Product, PurchaseRecord, SalesData, Seller},
    name_generator::NameGenerator,
    rng::{RngBank, StreamRng, StreamSlot},
    types::round_cents,
};
use serde::{Deserialize, Serialize};

const DISCOUNT_STEPS: &[f64] = &[0.0, 0.0, 0.0, 5.0, 10.0, 15.0, 20.0, 25.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub sellers:              usize,
    pub products:             usize,
    pub purchase_records:     usize,
    pub max_items_per_record: u64,
    pub max_quantity:         u64,
    /// Probability in [0, 1] that a record or line item is malformed.
    pub anomaly_rate:         f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sellers:              5,
            products:             40,
            purchase_records:     200,
            max_items_per_record: 4,
            max_quantity:         10,
            anomaly_rate:         0.0,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> ReportResult<()> {
        let counts = [
            ("sellers", self.sellers as u64),
            ("products", self.products as u64),
            ("purchase_records", self.purchase_records as u64),
            ("max_items_per_record", self.max_items_per_record),
            ("max_quantity", self.max_quantity),
        ];
        for (field, count) in counts {
            if count == 0 {
                return Err(ReportError::Config {
                    reason: format!("generator.{field} must be at least 1"),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.anomaly_rate) {
            return Err(ReportError::Config {
                reason: format!("generator.anomaly_rate must be in [0, 1], got {}", self.anomaly_rate),
            });
        }
        Ok(())
    }
}

pub struct DatasetGenerator {
    seed:   u64,
    config: GeneratorConfig,
}

impl DatasetGenerator {
    pub fn new(seed: u64, config: GeneratorConfig) -> Self {
        Self { seed, config }
    }

    pub fn generate(&self) -> ReportResult<SalesData> {
        self.config.validate()?;

        let bank = RngBank::new(self.seed);
        let sellers = self.sellers(&mut bank.for_slot(StreamSlot::Sellers));
        let products = self.products(&mut bank.for_slot(StreamSlot::Products));
        let purchase_records = self.purchase_records(
            &sellers,
            &products,
            &mut bank.for_slot(StreamSlot::Purchases),
            &mut bank.for_slot(StreamSlot::Anomalies),
        );

        log::debug!(
            "generated dataset seed={}: {} sellers, {} products, {} records",
            self.seed,
            sellers.len(),
            products.len(),
            purchase_records.len()
        );

        Ok(SalesData {
            sellers,
            products,
            purchase_records,
        })
    }

    fn sellers(&self, rng: &mut StreamRng) -> Vec<Seller> {
        (1..=self.config.sellers)
            .map(|n| {
                let (first, last) = NameGenerator::seller_name(rng);
                Seller {
                    id:         format!("seller_{n}"),
                    first_name: first.to_string(),
                    last_name:  last.to_string(),
                }
            })
            .collect()
    }

    fn products(&self, rng: &mut StreamRng) -> Vec<Product> {
        (1..=self.config.products)
            .map(|n| Product {
                sku:            format!("SKU_{n:03}"),
                name:           NameGenerator::product_name(rng),
                purchase_price: round_cents(rng.uniform(1.0, 200.0)),
            })
            .collect()
    }

    fn purchase_records(
        &self,
        sellers: &[Seller],
        products: &[Product],
        rng: &mut StreamRng,
        anomalies: &mut StreamRng,
    ) -> Vec<PurchaseRecord> {
        let rate = self.config.anomaly_rate;
        let mut records = Vec::with_capacity(self.config.purchase_records);

        for n in 0..self.config.purchase_records {
            let seller_id = if anomalies.chance(rate) {
                format!("unknown_seller_{n}")
            } else {
                sellers[rng.pick(sellers.len())].id.clone()
            };

            let item_count = rng.range_inclusive(1, self.config.max_items_per_record);
            let items = (0..item_count)
                .map(|_| {
                    let product = &products[rng.pick(products.len())];
                    let mut item = LineItem {
                        sku:        product.sku.clone(),
                        sale_price: Some(round_cents(product.purchase_price * rng.uniform(0.9, 1.8))),
                        quantity:   Some(rng.range_inclusive(1, self.config.max_quantity) as f64),
                        discount:   Some(DISCOUNT_STEPS[rng.pick(DISCOUNT_STEPS.len())]),
                    };
                    if anomalies.chance(rate) {
                        match anomalies.next_u64_below(3) {
                            0 => item.sku = format!("UNLISTED_{n}"),
                            1 => item.discount = None,
                            _ => item.sale_price = None,
                        }
                    }
                    item
                })
                .collect();

            records.push(PurchaseRecord { seller_id, items });
        }
        records
    }
}
