//! Strategy contracts — the three capability slots of an analysis pass.
//!
//! RULE: the pipeline never hard-codes a revenue or bonus formula.
//! The only built-in arithmetic is the profit fallback
//! (revenue - purchase_price * quantity) used when no profit
//! strategy is supplied.
//!
//! Each slot is a trait with a single method. Closures with the
//! matching signature implement the traits directly.

use crate::{
    accumulator::SellerStat,
    config::{BonusTierConfig, ProfitMode, ReportConfig, TopProductsConfig},
    error::{InvalidInputError, ReportResult},
    model::{LineItem, Product},
    types::{Money, Sku},
};

/// A line item after normalization, as handed to strategies.
/// `discount` is already defaulted to 0 when missing or non-numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleLine {
    pub sku:        Sku,
    pub sale_price: Option<Money>,
    pub quantity:   Option<f64>,
    pub discount:   f64,
}

impl SaleLine {
    pub fn from_item(item: &LineItem) -> Self {
        Self {
            sku:        item.sku.clone(),
            sale_price: item.sale_price,
            quantity:   item.quantity,
            discount:   item.discount.unwrap_or(0.0),
        }
    }

    /// Units sold, with a missing quantity counting as zero.
    pub fn units(&self) -> f64 {
        self.quantity.unwrap_or(0.0)
    }
}

pub trait RevenueStrategy {
    fn revenue(&self, line: &SaleLine, product: &Product) -> Money;
}

pub trait ProfitStrategy {
    fn profit(&self, line: &SaleLine, product: &Product) -> Money;
}

pub trait BonusStrategy {
    /// `rank` is zero-based; `total` is the number of ranked sellers.
    fn bonus(&self, rank: usize, total: usize, stat: &SellerStat) -> Money;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&SaleLine, &Product) -> Money,
{
    fn revenue(&self, line: &SaleLine, product: &Product) -> Money {
        self(line, product)
    }
}

impl<F> ProfitStrategy for F
where
    F: Fn(&SaleLine, &Product) -> Money,
{
    fn profit(&self, line: &SaleLine, product: &Product) -> Money {
        self(line, product)
    }
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStat) -> Money,
{
    fn bonus(&self, rank: usize, total: usize, stat: &SellerStat) -> Money {
        self(rank, total, stat)
    }
}

// ── Standard strategies ──────────────────────────────────────────────────────

/// sale_price * quantity * (1 - discount / 100).
/// Zero when price or quantity is missing or zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountedRevenue;

impl RevenueStrategy for DiscountedRevenue {
    fn revenue(&self, line: &SaleLine, _product: &Product) -> Money {
        match (line.sale_price, line.quantity) {
            (Some(price), Some(qty)) if price != 0.0 && qty != 0.0 => {
                price * qty * (1.0 - line.discount / 100.0)
            }
            _ => 0.0,
        }
    }
}

/// Revenue from the wrapped strategy minus the cost basis of the units sold.
///
/// Pair it with the same revenue strategy the options use, otherwise
/// reported profit and revenue describe different formulas.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostBasisProfit<R = DiscountedRevenue> {
    pub revenue: R,
}

impl<R: RevenueStrategy> CostBasisProfit<R> {
    pub fn new(revenue: R) -> Self {
        Self { revenue }
    }
}

impl<R: RevenueStrategy> ProfitStrategy for CostBasisProfit<R> {
    fn profit(&self, line: &SaleLine, product: &Product) -> Money {
        self.revenue.revenue(line, product) - product.purchase_price * line.units()
    }
}

/// Rank-banded share of profit.
///
/// Precedence: leader, then last, then runner-up, then standard.
/// A single seller is both first and last and receives the leader rate;
/// with two or more sellers the last one always receives the last rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredBonus {
    pub tiers: BonusTierConfig,
}

impl TieredBonus {
    pub fn new(tiers: BonusTierConfig) -> Self {
        Self { tiers }
    }

    pub fn rate_for(&self, rank: usize, total: usize) -> f64 {
        if rank == 0 {
            self.tiers.leader
        } else if rank + 1 >= total {
            self.tiers.last
        } else if rank <= 2 {
            self.tiers.runner_up
        } else {
            self.tiers.standard
        }
    }
}

impl BonusStrategy for TieredBonus {
    fn bonus(&self, rank: usize, total: usize, stat: &SellerStat) -> Money {
        stat.profit * self.rate_for(rank, total)
    }
}

// ── Options bundle ───────────────────────────────────────────────────────────

/// Strategies plus the flags that select between pipeline variants.
pub struct AnalysisOptions {
    pub(crate) revenue:     Box<dyn RevenueStrategy>,
    pub(crate) profit:      Option<Box<dyn ProfitStrategy>>,
    pub(crate) bonus:       Box<dyn BonusStrategy>,
    pub top_products:       TopProductsConfig,
    pub round_line_revenue: bool,
}

impl AnalysisOptions {
    pub fn builder() -> AnalysisOptionsBuilder {
        AnalysisOptionsBuilder::default()
    }

    /// Standard strategies wired from configuration.
    pub fn from_config(config: &ReportConfig) -> ReportResult<Self> {
        config.validate()?;

        let mut builder = Self::builder()
            .revenue(DiscountedRevenue)
            .bonus(TieredBonus::new(config.bonus))
            .top_products(config.top_products)
            .round_line_revenue(config.round_line_revenue);

        if config.profit == ProfitMode::Strategy {
            builder = builder
                .profit(CostBasisProfit::new(DiscountedRevenue))
                .require_profit_strategy(true);
        }
        Ok(builder.build()?)
    }

    pub fn has_profit_strategy(&self) -> bool {
        self.profit.is_some()
    }

    /// Profit for one line: explicit strategy when present, otherwise
    /// revenue minus cost basis.
    pub(crate) fn line_profit(&self, line: &SaleLine, product: &Product, revenue: Money) -> Money {
        match &self.profit {
            Some(strategy) => strategy.profit(line, product),
            None => revenue - product.purchase_price * line.units(),
        }
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            revenue:            Box::new(DiscountedRevenue),
            profit:             None,
            bonus:              Box::new(TieredBonus::default()),
            top_products:       TopProductsConfig::default(),
            round_line_revenue: false,
        }
    }
}

#[derive(Default)]
pub struct AnalysisOptionsBuilder {
    revenue:                 Option<Box<dyn RevenueStrategy>>,
    profit:                  Option<Box<dyn ProfitStrategy>>,
    bonus:                   Option<Box<dyn BonusStrategy>>,
    top_products:            TopProductsConfig,
    round_line_revenue:      bool,
    require_profit_strategy: bool,
}

impl AnalysisOptionsBuilder {
    pub fn revenue(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.revenue = Some(Box::new(strategy));
        self
    }

    pub fn profit(mut self, strategy: impl ProfitStrategy + 'static) -> Self {
        self.profit = Some(Box::new(strategy));
        self
    }

    pub fn bonus(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.bonus = Some(Box::new(strategy));
        self
    }

    pub fn top_products(mut self, top_products: TopProductsConfig) -> Self {
        self.top_products = top_products;
        self
    }

    pub fn round_line_revenue(mut self, enabled: bool) -> Self {
        self.round_line_revenue = enabled;
        self
    }

    pub fn require_profit_strategy(mut self, required: bool) -> Self {
        self.require_profit_strategy = required;
        self
    }

    pub fn build(self) -> Result<AnalysisOptions, InvalidInputError> {
        let revenue = self
            .revenue
            .ok_or(InvalidInputError::MissingStrategy { slot: "calculate_revenue" })?;
        let bonus = self
            .bonus
            .ok_or(InvalidInputError::MissingStrategy { slot: "calculate_bonus" })?;
        if self.require_profit_strategy && self.profit.is_none() {
            return Err(InvalidInputError::MissingStrategy { slot: "calculate_profit" });
        }

        Ok(AnalysisOptions {
            revenue,
            profit: self.profit,
            bonus,
            top_products: self.top_products,
            round_line_revenue: self.round_line_revenue,
        })
    }
}
