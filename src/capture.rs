pub mod camera;
pub mod classifier;
pub mod pipeline;

pub use camera::{CommandCamera, DirectoryCamera, Frame, FrameSource};
pub use classifier::{CommandClassifier, FixedClassifier, MoodClassifier};
pub use pipeline::{CaptureOptions, CaptureSummary, Detection, process_detection, run_capture};
