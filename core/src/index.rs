//! Lookup tables over the input snapshot.
//!
//! Sellers keep their input order: the accumulator creates one
//! stat per entry in this order, and that order is what a stable
//! ranking falls back to on profit ties.

use crate::model::{Product, SalesData, Seller};
use std::collections::HashMap;

pub struct CatalogIndex<'a> {
    sellers:      Vec<&'a Seller>,
    seller_slots: HashMap<&'a str, usize>,
    products:     HashMap<&'a str, &'a Product>,
}

impl<'a> CatalogIndex<'a> {
    /// Index sellers by id and products by SKU.
    ///
    /// Duplicate ids replace the earlier entry but keep its position.
    /// Emptiness is rejected by the pipeline before indexing.
    pub fn build(data: &'a SalesData) -> Self {
        let mut sellers: Vec<&Seller> = Vec::with_capacity(data.sellers.len());
        let mut seller_slots = HashMap::with_capacity(data.sellers.len());
        for seller in &data.sellers {
            match seller_slots.get(seller.id.as_str()) {
                Some(&slot) => {
                    log::warn!("duplicate seller id '{}' in input; keeping last entry", seller.id);
                    sellers[slot] = seller;
                }
                None => {
                    seller_slots.insert(seller.id.as_str(), sellers.len());
                    sellers.push(seller);
                }
            }
        }

        let mut products = HashMap::with_capacity(data.products.len());
        for product in &data.products {
            if products.insert(product.sku.as_str(), product).is_some() {
                log::warn!("duplicate SKU '{}' in catalog; keeping last entry", product.sku);
            }
        }

        Self {
            sellers,
            seller_slots,
            products,
        }
    }

    /// Distinct sellers in first-seen order.
    pub fn sellers(&self) -> &[&'a Seller] {
        &self.sellers
    }

    /// Position of a seller in `sellers()`.
    pub fn seller_slot(&self, seller_id: &str) -> Option<usize> {
        self.seller_slots.get(seller_id).copied()
    }

    pub fn product(&self, sku: &str) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }
}
