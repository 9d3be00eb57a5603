//! Ranking and pagination by open-interest notional.

use crate::core::types::{JoinedInstrument, RankedPage};

/// Default split between `head` and `rest`
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Sort by open-interest notional descending (stable, so ties keep input
/// order), assign 1-based ranks, and split after `page_size` entries.
pub fn rank_and_page(mut instruments: Vec<JoinedInstrument>, page_size: usize) -> RankedPage {
    instruments.sort_by(|a, b| b.open_interest.cmp(&a.open_interest));

    for (index, instrument) in instruments.iter_mut().enumerate() {
        instrument.rank = index + 1;
    }

    let split = page_size.min(instruments.len());
    let rest = instruments.split_off(split);
    RankedPage {
        head: instruments,
        rest,
    }
}
