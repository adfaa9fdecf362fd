#![allow(dead_code)]

use sales_report_core::{LineItem, Product, PurchaseRecord, SalesData, Seller};

pub fn seller(id: &str, first: &str, last: &str) -> Seller {
    Seller {
        id:         id.into(),
        first_name: first.into(),
        last_name:  last.into(),
    }
}

pub fn product(sku: &str, name: &str, cost: f64) -> Product {
    Product {
        sku:            sku.into(),
        name:           name.into(),
        purchase_price: cost,
    }
}

pub fn item(sku: &str, price: f64, quantity: f64, discount: f64) -> LineItem {
    LineItem {
        sku:        sku.into(),
        sale_price: Some(price),
        quantity:   Some(quantity),
        discount:   Some(discount),
    }
}

pub fn record(seller_id: &str, items: Vec<LineItem>) -> PurchaseRecord {
    PurchaseRecord {
        seller_id: seller_id.into(),
        items,
    }
}

/// Four sellers, three products, records spread so profits differ.
pub fn small_shop() -> SalesData {
    SalesData {
        sellers: vec![
            seller("s1", "Ada", "Byron"),
            seller("s2", "Boris", "Kent"),
            seller("s3", "Cleo", "Marsh"),
            seller("s4", "Dan", "Ortiz"),
        ],
        products: vec![
            product("A", "Anvil", 10.0),
            product("B", "Bolt", 1.0),
            product("C", "Crate", 50.0),
        ],
        purchase_records: vec![
            record("s1", vec![item("A", 20.0, 2.0, 0.0), item("B", 2.0, 10.0, 0.0)]),
            record("s2", vec![item("C", 100.0, 1.0, 10.0)]),
            record("s2", vec![item("A", 15.0, 4.0, 0.0)]),
            record("s3", vec![item("B", 3.0, 5.0, 0.0)]),
            record("s4", vec![item("C", 40.0, 1.0, 0.0)]),
        ],
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
