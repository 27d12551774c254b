pub mod mood;
pub mod record;

pub use mood::Mood;
pub use record::{MoodRecord, RecordSource};
