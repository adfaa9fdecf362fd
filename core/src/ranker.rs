//! Ranker — orders sellers by profit and assigns bonuses.
//!
//! The sort is stable: sellers with equal profit keep their seller
//! index order. Exact tie order is not part of the contract.

use crate::{accumulator::SellerStat, strategy::BonusStrategy};

pub fn rank(mut stats: Vec<SellerStat>, bonus: &dyn BonusStrategy) -> Vec<SellerStat> {
    stats.sort_by(|a, b| b.profit.total_cmp(&a.profit));

    let total = stats.len();
    for (rank, stat) in stats.iter_mut().enumerate() {
        stat.bonus = bonus.bonus(rank, total, stat);
    }
    stats
}
