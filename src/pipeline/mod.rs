//! Filter → group → summarize over an in-memory budget dataset.

pub(crate) mod aggregate;
pub(crate) mod filter;
pub(crate) mod summary;

pub(crate) use aggregate::{
    bottom_n, group_by, percentage_of, percentage_of_total, ranking, saturating_sum, top_n,
};
pub(crate) use summary::{derive_headline, extremes, totals, HeadlineText, Totals};
