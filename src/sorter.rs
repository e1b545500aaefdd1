use crate::models::TagEntry;
use rayon::prelude::*;

/// Orders entries by count, highest first.
///
/// The sort is stable: entries with the same count keep their input order.
pub fn sort_by_count(entries: &mut [TagEntry]) {
    entries.par_sort_by(|a, b| b.count.cmp(&a.count));
}

pub fn sorted_by_count(mut entries: Vec<TagEntry>) -> Vec<TagEntry> {
    sort_by_count(&mut entries);
    entries
}
