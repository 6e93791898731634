mod aggregate;
mod filter_spec;
mod record;

pub use aggregate::{AggregateRow, Field, GroupDimension, GroupKey, Share};
pub use filter_spec::{FilterSpec, TotalRange};
pub use record::{BudgetRecord, Dataset};

#[cfg(test)]
mod tests;
