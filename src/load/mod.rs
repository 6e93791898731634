mod columns;
mod csv_load;

pub(crate) use csv_load::{reconcile_tolerance, CsvLoader};
