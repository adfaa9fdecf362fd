//! report-runner: headless driver for the seller performance report.
//!
//! Usage:
//!   report-runner --input data.json [--config report.json] [--format table]
//!   report-runner --generate --seed 12345 --sellers 8 --records 500
//!   report-runner --generate --seed 7 --anomaly-rate 0.05 --output data.json

use anyhow::{bail, Context, Result};
use sales_report_core::{
    analyze,
    config::ReportConfig,
    generator::{DatasetGenerator, GeneratorConfig},
    AnalysisOptions, SalesData, SellerReport,
};
use std::env;

#[derive(serde::Serialize)]
struct ReportEnvelope<'a> {
    report_id:    String,
    generated_at: chrono::DateTime<chrono::Utc>,
    source:       String,
    seller_count: usize,
    sellers:      &'a [SellerReport],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let generate = args.iter().any(|a| a == "--generate");
    let input = flag_value(&args, "--input");
    let output = flag_value(&args, "--output");
    let format = flag_value(&args, "--format").unwrap_or("json");

    let config = match flag_value(&args, "--config") {
        Some(path) => {
            ReportConfig::load(path).with_context(|| format!("Cannot load config {path}"))?
        }
        None => ReportConfig::default(),
    };

    let (data, source) = match (generate, input) {
        (true, _) => {
            let seed = parse_arg(&args, "--seed", 42u64);
            let defaults = GeneratorConfig::default();
            let gen_config = GeneratorConfig {
                sellers:          parse_arg(&args, "--sellers", defaults.sellers),
                products:         parse_arg(&args, "--products", defaults.products),
                purchase_records: parse_arg(&args, "--records", defaults.purchase_records),
                anomaly_rate:     parse_arg(&args, "--anomaly-rate", defaults.anomaly_rate),
                ..defaults
            };
            let data = DatasetGenerator::new(seed, gen_config).generate()?;
            (data, format!("generated:seed={seed}"))
        }
        (false, Some(path)) => (load_data(path)?, path.to_string()),
        (false, None) => bail!("either --input <file> or --generate is required"),
    };

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&data)?;
        std::fs::write(path, json).with_context(|| format!("Cannot write {path}"))?;
        log::info!("dataset written to {path}");
    }

    let options = AnalysisOptions::from_config(&config)?;
    let report = analyze(&data, &options)?;

    match format {
        "json" => print_json(&report, source)?,
        "table" => print_table(&report, &source),
        other => bail!("unknown --format '{other}' (expected json or table)"),
    }
    Ok(())
}

fn load_data(path: &str) -> Result<SalesData> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Cannot read {path}"))?;
    let data = SalesData::from_json(&content).with_context(|| format!("Cannot parse {path}"))?;
    Ok(data)
}

fn print_json(report: &[SellerReport], source: String) -> Result<()> {
    let envelope = ReportEnvelope {
        report_id: uuid::Uuid::new_v4().to_string(),
        generated_at: chrono::Utc::now(),
        source,
        seller_count: report.len(),
        sellers: report,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

fn print_table(report: &[SellerReport], source: &str) {
    println!("=== SELLER REPORT ===");
    println!("  source:  {source}");
    println!("  sellers: {}", report.len());
    println!();
    println!(
        "  {:>4}  {:<12} {:<24} {:>6} {:>12} {:>12} {:>10}  top product",
        "rank", "seller", "name", "sales", "revenue", "profit", "bonus"
    );
    for (rank, seller) in report.iter().enumerate() {
        let top = seller
            .top_products
            .first()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .unwrap_or_else(|| "-".into());
        println!(
            "  {:>4}  {:<12} {:<24} {:>6} {:>12.2} {:>12.2} {:>10.2}  {}",
            rank + 1,
            seller.seller_id,
            seller.name,
            seller.sales_count,
            seller.revenue,
            seller.profit,
            seller.bonus,
            top
        );
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
