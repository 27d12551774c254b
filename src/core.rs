pub mod anonymize;
pub mod backup;
pub mod recommend;
pub mod sentiment;
pub mod stress;
