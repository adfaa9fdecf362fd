use crate::error::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Percentage of profit paid out per rank band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusTierConfig {
    /// Rank 0.
    pub leader:    f64,
    /// Ranks 1 and 2.
    pub runner_up: f64,
    /// Rank 3 up to, but excluding, the last seller.
    pub standard:  f64,
    /// The last seller, when there is more than one.
    pub last:      f64,
}

impl Default for BonusTierConfig {
    fn default() -> Self {
        Self {
            leader:    0.15,
            runner_up: 0.10,
            standard:  0.05,
            last:      0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopProductKey {
    Quantity,
    Revenue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopProductsConfig {
    pub key:             TopProductKey,
    pub limit:           usize,
    pub include_name:    bool,
    pub include_revenue: bool,
}

impl Default for TopProductsConfig {
    fn default() -> Self {
        Self {
            key:             TopProductKey::Quantity,
            limit:           10,
            include_name:    false,
            include_revenue: false,
        }
    }
}

/// Where per-line profit comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitMode {
    /// revenue - purchase_price * quantity
    #[default]
    Derived,
    /// An explicit profit strategy must be supplied.
    Strategy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub bonus:              BonusTierConfig,
    pub top_products:       TopProductsConfig,
    pub profit:             ProfitMode,
    pub round_line_revenue: bool,
}

impl ReportConfig {
    /// Load from a JSON file. Missing sections fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> ReportResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ReportConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ReportResult<()> {
        if self.top_products.limit == 0 {
            return Err(ReportError::Config {
                reason: "top_products.limit must be at least 1".into(),
            });
        }

        let rates = [
            ("bonus.leader", self.bonus.leader),
            ("bonus.runner_up", self.bonus.runner_up),
            ("bonus.standard", self.bonus.standard),
            ("bonus.last", self.bonus.last),
        ];
        for (field, rate) in rates {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ReportError::Config {
                    reason: format!("{field} must be a non-negative rate, got {rate}"),
                });
            }
        }
        Ok(())
    }
}
