//! The analysis pass — the single entry point of the crate.
//!
//! STAGE ORDER (fixed, strictly forward):
//!   1. Validate  (reject empty collections up front)
//!   2. Index     (sellers by id, products by SKU)
//!   3. Accumulate
//!   4. Rank      (profit descending, bonus per rank)
//!   5. Report    (round to cents, truncate top products)
//!
//! No stage re-enters an earlier one and no state outlives the call.

use crate::{
    accumulator::accumulate,
    error::{InvalidInputError, ReportResult},
    index::CatalogIndex,
    model::SalesData,
    ranker::rank,
    report::{build_report, SellerReport},
    strategy::AnalysisOptions,
};

pub fn analyze(data: &SalesData, options: &AnalysisOptions) -> ReportResult<Vec<SellerReport>> {
    validate(data)?;

    let index = CatalogIndex::build(data);
    let accumulation = accumulate(&data.purchase_records, &index, options);
    let summary = accumulation.summary;

    let ranked = rank(accumulation.stats, &*options.bonus);
    let report = build_report(&ranked, &options.top_products);

    log::info!(
        "analysis complete: sellers={} records={} (skipped {}) items={} (skipped {})",
        report.len(),
        summary.records_attributed,
        summary.records_skipped,
        summary.items_attributed,
        summary.items_skipped,
    );
    Ok(report)
}

/// Same as `analyze`, for callers holding inputs that may be absent.
pub fn analyze_optional(
    data: Option<&SalesData>,
    options: Option<&AnalysisOptions>,
) -> ReportResult<Vec<SellerReport>> {
    match (data, options) {
        (Some(data), Some(options)) => analyze(data, options),
        _ => Err(InvalidInputError::MissingData.into()),
    }
}

fn validate(data: &SalesData) -> Result<(), InvalidInputError> {
    let collections = [
        ("sellers", data.sellers.is_empty()),
        ("products", data.products.is_empty()),
        ("purchase_records", data.purchase_records.is_empty()),
    ];
    for (collection, empty) in collections {
        if empty {
            return Err(InvalidInputError::EmptyCollection { collection });
        }
    }
    Ok(())
}
