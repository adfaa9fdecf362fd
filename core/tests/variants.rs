//! Pipeline variants selected through AnalysisOptions.

mod common;

use common::*;
use sales_report_core::{
    analyze,
    config::{ProfitMode, ReportConfig, TopProductKey, TopProductsConfig},
    strategy::{CostBasisProfit, DiscountedRevenue, TieredBonus},
    AnalysisOptions, Product, SaleLine, SalesData,
};

fn revenue_vs_quantity_shop() -> SalesData {
    SalesData {
        sellers:          vec![seller("s1", "A", "B")],
        products:         vec![
            product("CHEAP", "Pencil", 0.1),
            product("PRICEY", "Laptop", 500.0),
            product("MID", "Lamp", 10.0),
        ],
        purchase_records: vec![
            record("s1", vec![item("CHEAP", 0.5, 100.0, 0.0), item("PRICEY", 900.0, 1.0, 0.0)]),
            record("s1", vec![item("MID", 25.0, 4.0, 0.0), item("CHEAP", 0.5, 20.0, 0.0)]),
        ],
    }
}

#[test]
fn explicit_profit_strategy_replaces_fallback() {
    let options = AnalysisOptions::builder()
        .revenue(DiscountedRevenue)
        .profit(|line: &SaleLine, _: &Product| line.units() * 3.0)
        .bonus(TieredBonus::default())
        .build()
        .unwrap();

    let report = analyze(&revenue_vs_quantity_shop(), &options).unwrap();

    // 125 units at 3.0 each, cost basis ignored.
    assert_eq!(report[0].profit, 375.0);
}

#[test]
fn cost_basis_profit_matches_fallback() {
    let with_strategy = AnalysisOptions::builder()
        .revenue(DiscountedRevenue)
        .profit(CostBasisProfit::new(DiscountedRevenue))
        .bonus(TieredBonus::default())
        .build()
        .unwrap();
    let data = small_shop();

    let explicit = analyze(&data, &with_strategy).unwrap();
    let derived = analyze(&data, &AnalysisOptions::default()).unwrap();

    assert_eq!(explicit, derived);
}

fn two_per_unit(line: &SaleLine, _: &Product) -> f64 {
    2.0 * line.units()
}

#[test]
fn cost_basis_profit_follows_custom_revenue() {
    let options = AnalysisOptions::builder()
        .revenue(two_per_unit)
        .profit(CostBasisProfit::new(two_per_unit))
        .bonus(TieredBonus::default())
        .build()
        .unwrap();

    let report = analyze(&revenue_vs_quantity_shop(), &options).unwrap();

    // 125 units at 2.0, against a cost basis of 552.
    assert_eq!(report[0].revenue, 250.0);
    assert_eq!(report[0].profit, -302.0, "profit must be derived from the same revenue");
}

#[test]
fn top_products_by_revenue_include_name_and_revenue() {
    let options = AnalysisOptions::builder()
        .revenue(DiscountedRevenue)
        .bonus(TieredBonus::default())
        .top_products(TopProductsConfig {
            key:             TopProductKey::Revenue,
            limit:           10,
            include_name:    true,
            include_revenue: true,
        })
        .build()
        .unwrap();

    let report = analyze(&revenue_vs_quantity_shop(), &options).unwrap();

    let top = &report[0].top_products;
    let skus: Vec<&str> = top.iter().map(|p| p.sku.as_str()).collect();
    assert_eq!(skus, ["PRICEY", "MID", "CHEAP"]);
    assert_eq!(top[0].name.as_deref(), Some("Laptop"));
    assert_eq!(top[0].revenue, Some(900.0));
    assert_eq!(top[2].revenue, Some(60.0));
    assert_eq!(top[2].quantity, 120.0);
}

#[test]
fn top_products_by_quantity_is_default() {
    let report = analyze(&revenue_vs_quantity_shop(), &AnalysisOptions::default()).unwrap();

    let skus: Vec<&str> = report[0].top_products.iter().map(|p| p.sku.as_str()).collect();
    assert_eq!(skus, ["CHEAP", "MID", "PRICEY"]);
}

/// Rounding each line before summing can differ from rounding the total.
#[test]
fn line_revenue_rounding_variant() {
    let data = SalesData {
        sellers:          vec![seller("s1", "A", "B")],
        products:         vec![product("X", "Widget", 0.0)],
        purchase_records: vec![record(
            "s1",
            vec![
                item("X", 0.004, 1.0, 0.0),
                item("X", 0.004, 1.0, 0.0),
                item("X", 0.004, 1.0, 0.0),
            ],
        )],
    };
    let per_line = AnalysisOptions::builder()
        .revenue(DiscountedRevenue)
        .bonus(TieredBonus::default())
        .round_line_revenue(true)
        .build()
        .unwrap();

    let rounded = analyze(&data, &per_line).unwrap();
    let exact = analyze(&data, &AnalysisOptions::default()).unwrap();

    assert_eq!(rounded[0].revenue, 0.0);
    assert_eq!(exact[0].revenue, 0.01);
    assert_eq!(rounded[0].profit, exact[0].profit, "profit always uses exact line revenue");
}

#[test]
fn custom_bonus_strategy_receives_stats() {
    let options = AnalysisOptions::builder()
        .revenue(DiscountedRevenue)
        .bonus(|rank: usize, _total: usize, stat: &sales_report_core::accumulator::SellerStat| {
            if rank == 0 { stat.revenue * 0.01 } else { stat.sales_count as f64 }
        })
        .build()
        .unwrap();

    let report = analyze(&small_shop(), &options).unwrap();

    assert_eq!(report[0].seller_id, "s2");
    assert_eq!(report[0].bonus, 1.5);
    assert_eq!(report[1].bonus, 1.0);
}

#[test]
fn options_from_config_follow_each_section() {
    let mut config = ReportConfig::default();
    config.bonus.leader = 0.5;
    config.top_products.limit = 1;
    config.profit = ProfitMode::Strategy;

    let options = AnalysisOptions::from_config(&config).unwrap();
    assert!(options.has_profit_strategy());

    let report = analyze(&small_shop(), &options).unwrap();
    assert_eq!(report[0].bonus, 30.0);
    assert!(report.iter().all(|r| r.top_products.len() <= 1));
}

#[test]
fn options_from_invalid_config_rejected() {
    let mut config = ReportConfig::default();
    config.top_products.limit = 0;

    assert!(AnalysisOptions::from_config(&config).is_err());
}
