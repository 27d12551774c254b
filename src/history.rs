pub mod range;
pub mod store;

pub use range::{DateRange, filter_records, parse_range};
pub use store::HistoryStore;
