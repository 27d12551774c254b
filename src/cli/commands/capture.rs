use super::employee_ref;
use crate::capture::{
    CaptureOptions, CommandCamera, CommandClassifier, DirectoryCamera, FixedClassifier,
    FrameSource, MoodClassifier, run_capture,
};
use crate::chart::show_chart;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::history::HistoryStore;
use crate::models::Mood;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::io;

/// collect → classify → record → check-stress → recommend → visualize
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Capture {
        employee,
        source,
        classifier,
        mood,
        max_frames,
        no_prompt,
        no_chart,
        threshold,
    } = cmd
    {
        let who = employee_ref(employee, cfg)?;

        let mut camera = open_camera(source, cfg)?;
        let classifier = build_classifier(classifier, mood, cfg)?;

        let store = HistoryStore::new(&cfg.history_file);
        let opts = CaptureOptions {
            threshold: threshold.unwrap_or(cfg.stress_threshold),
            max_frames: *max_frames,
            prompt: !*no_prompt,
        };

        let mut input = io::stdin().lock();
        let summary = run_capture(
            &store,
            &who,
            camera.as_mut(),
            classifier.as_ref(),
            &opts,
            &mut input,
        )?;

        success(format!(
            "Captured {} frames ({} stress alerts)",
            summary.frames, summary.alerts
        ));

        if !*no_chart {
            show_chart(&store.load_all()?, cfg.chart_width);
        }
    }

    Ok(())
}

/// `--source` wins, then the configured camera command, then the configured
/// frame directory.
fn open_camera(source: &Option<String>, cfg: &Config) -> AppResult<Box<dyn FrameSource>> {
    if let Some(dir) = source {
        return Ok(Box::new(DirectoryCamera::open(&expand_tilde(dir))?));
    }
    if let Some(command) = &cfg.camera_command {
        let workdir = std::env::temp_dir().join("moodtasker_frames");
        return Ok(Box::new(CommandCamera::new(command, workdir)?));
    }
    if let Some(dir) = &cfg.camera_dir {
        return Ok(Box::new(DirectoryCamera::open(&expand_tilde(dir))?));
    }

    Err(AppError::CameraUnavailable(
        "no camera configured: pass --source or set camera_command / camera_dir".into(),
    ))
}

fn build_classifier(
    classifier: &Option<String>,
    mood: &Option<String>,
    cfg: &Config,
) -> AppResult<Box<dyn MoodClassifier>> {
    if let Some(label) = mood {
        return Ok(Box::new(FixedClassifier(Mood::parse(label))));
    }

    match classifier.as_ref().or(cfg.classifier_command.as_ref()) {
        Some(command) => Ok(Box::new(CommandClassifier::new(command)?)),
        None => Err(AppError::Classifier(
            "no classifier configured: pass --classifier or set classifier_command".into(),
        )),
    }
}
