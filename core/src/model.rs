//! Input snapshot — sellers, product catalog, purchase records.
//!
//! These are read-only for the duration of an analysis pass.
//! Numeric line item fields are lenient: anything that is not a
//! finite number (or a string holding one) deserializes to None.

use crate::{
    error::ReportResult,
    types::{Money, SellerId, Sku},
};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id:         SellerId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name:  String,
}

impl Seller {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku:            Sku,
    #[serde(default)]
    pub name:           String,
    #[serde(default)]
    pub purchase_price: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: Sku,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sale_price: Option<Money>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub quantity:   Option<f64>,
    /// Percentage in 0..=100.
    #[serde(default, deserialize_with = "lenient_number")]
    pub discount:   Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: SellerId,
    #[serde(default)]
    pub items:     Vec<LineItem>,
}

/// The full snapshot handed to `analyze`.
/// Missing collections deserialize as empty and are rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub sellers:          Vec<Seller>,
    #[serde(default)]
    pub products:         Vec<Product>,
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    pub fn from_json(json: &str) -> ReportResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let number = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}
