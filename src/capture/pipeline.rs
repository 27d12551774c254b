use super::camera::FrameSource;
use super::classifier::MoodClassifier;
use crate::core::recommend::recommend;
use crate::core::stress::{check_stress, notify_hr, stress_run};
use crate::errors::{AppError, AppResult};
use crate::history::HistoryStore;
use crate::models::{Mood, MoodRecord, RecordSource};
use crate::ui::messages::{info, warning};
use crate::ui::prompt::ask;
use std::io::BufRead;

/// Outcome of recording one mood.
#[derive(Debug, Clone)]
pub struct Detection {
    pub record: MoodRecord,
    pub alert: bool,
    pub stress_run: usize,
    pub recommendation: &'static str,
}

/// record → check-stress → recommend, for one detected mood.
pub fn process_detection(
    store: &HistoryStore,
    employee_ref: &str,
    mood: Mood,
    source: RecordSource,
    threshold: usize,
) -> AppResult<Detection> {
    let record = MoodRecord::now(employee_ref, mood, source);
    store.append(&record)?;

    let history = store.load_all()?;
    let alert = check_stress(employee_ref, &history, threshold);
    let run = stress_run(employee_ref, &history);
    if alert {
        notify_hr(employee_ref, run);
    }

    let recommendation = recommend(&record.mood);

    println!("Employee: {} | Detected Mood: {}", employee_ref, record.mood);
    println!("Recommended Task: {}", recommendation);

    Ok(Detection {
        record,
        alert,
        stress_run: run,
        recommendation,
    })
}

#[derive(Debug, Clone)]
pub struct CaptureOptions {
    pub threshold: usize,
    pub max_frames: Option<usize>,
    /// Ask for the quit key after every frame
    pub prompt: bool,
}

#[derive(Debug, Default)]
pub struct CaptureSummary {
    pub frames: usize,
    pub alerts: usize,
    pub detections: Vec<Detection>,
}

/// Frame loop: runs until the quit key, the end of the source or
/// `max_frames`. Failing to get the very first frame is fatal; later
/// failures end the loop like a closed camera would.
pub fn run_capture<R: BufRead>(
    store: &HistoryStore,
    employee_ref: &str,
    source: &mut dyn FrameSource,
    classifier: &dyn MoodClassifier,
    opts: &CaptureOptions,
    input: &mut R,
) -> AppResult<CaptureSummary> {
    info(format!("Capturing from {}", source.describe()));
    let mut summary = CaptureSummary::default();

    loop {
        if let Some(max) = opts.max_frames
            && summary.frames >= max
        {
            break;
        }

        let frame = match source.next_frame() {
            Ok(Some(f)) => f,
            Ok(None) if summary.frames == 0 => {
                return Err(AppError::CameraUnavailable(format!(
                    "{} produced no frames",
                    source.describe()
                )));
            }
            Ok(None) => break,
            Err(e) if summary.frames == 0 => return Err(e),
            Err(e) => {
                warning(format!("Camera stopped: {}", e));
                break;
            }
        };

        log::debug!(
            "frame #{} {} ({}x{})",
            frame.index,
            frame.path.display(),
            frame.width,
            frame.height
        );

        let mood = classifier.classify(&frame)?;
        let detection = process_detection(
            store,
            employee_ref,
            mood,
            RecordSource::Camera,
            opts.threshold,
        )?;

        summary.frames += 1;
        if detection.alert {
            summary.alerts += 1;
        }
        summary.detections.push(detection);

        if opts.prompt && quit_requested(input)? {
            break;
        }
    }

    Ok(summary)
}

/// `q`/`Q` or end of input stops the loop.
fn quit_requested<R: BufRead>(input: &mut R) -> AppResult<bool> {
    let answer = ask("[Enter] next frame, [q] quit: ", input)?;
    Ok(answer.is_none_or(|a| a.eq_ignore_ascii_case("q")))
}
