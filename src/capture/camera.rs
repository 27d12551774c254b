//! Frame sources. Decoding only checks that a frame is a readable image;
//! pixels are handed to the classifier untouched, by path.

use crate::errors::{AppError, AppResult};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const FRAME_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

#[derive(Debug, Clone)]
pub struct Frame {
    pub index: usize,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    fn probe(index: usize, path: PathBuf) -> AppResult<Self> {
        let (width, height) = image::image_dimensions(&path).map_err(|e| {
            AppError::CameraUnavailable(format!("unreadable frame {}: {}", path.display(), e))
        })?;
        Ok(Self {
            index,
            path,
            width,
            height,
        })
    }
}

pub trait FrameSource {
    /// Next frame, or `None` once the source is exhausted.
    fn next_frame(&mut self) -> AppResult<Option<Frame>>;

    fn describe(&self) -> String;
}

/// Frames already captured to disk, read in file-name order.
pub struct DirectoryCamera {
    dir: PathBuf,
    pending: VecDeque<PathBuf>,
    served: usize,
}

impl DirectoryCamera {
    pub fn open(dir: &Path) -> AppResult<Self> {
        let entries = fs::read_dir(dir).map_err(|e| {
            AppError::CameraUnavailable(format!("cannot open {}: {}", dir.display(), e))
        })?;

        let mut frames: Vec<PathBuf> = Vec::new();
        for ent in entries {
            let path = ent?.path();
            let is_frame = path
                .extension()
                .map(|ext| {
                    let ext = ext.to_string_lossy().to_lowercase();
                    FRAME_EXTENSIONS.contains(&ext.as_str())
                })
                .unwrap_or(false);
            if path.is_file() && is_frame {
                frames.push(path);
            }
        }

        if frames.is_empty() {
            return Err(AppError::CameraUnavailable(format!(
                "no frames found in {}",
                dir.display()
            )));
        }

        frames.sort();
        log::debug!("{} frames queued from {}", frames.len(), dir.display());

        Ok(Self {
            dir: dir.to_path_buf(),
            pending: frames.into(),
            served: 0,
        })
    }
}

impl FrameSource for DirectoryCamera {
    fn next_frame(&mut self) -> AppResult<Option<Frame>> {
        let Some(path) = self.pending.pop_front() else {
            return Ok(None);
        };
        self.served += 1;
        Frame::probe(self.served, path).map(Some)
    }

    fn describe(&self) -> String {
        format!("frames in {}", self.dir.display())
    }
}

/// Runs an external grabber (fswebcam, ffmpeg, imagesnap, ...) once per frame.
/// Every `{out}` in the command is replaced by the path the frame must be
/// written to.
pub struct CommandCamera {
    program: String,
    args: Vec<String>,
    workdir: PathBuf,
    served: usize,
}

impl CommandCamera {
    pub fn new(command: &str, workdir: PathBuf) -> AppResult<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| AppError::CameraUnavailable("empty camera command".into()))?;
        fs::create_dir_all(&workdir)?;

        Ok(Self {
            program,
            args: parts.collect(),
            workdir,
            served: 0,
        })
    }
}

impl FrameSource for CommandCamera {
    fn next_frame(&mut self) -> AppResult<Option<Frame>> {
        let index = self.served + 1;
        let out = self.workdir.join(format!("frame_{index:05}.png"));
        let out_str = out.to_string_lossy().to_string();

        let args: Vec<String> = self
            .args
            .iter()
            .map(|a| a.replace("{out}", &out_str))
            .collect();

        let status = Command::new(&self.program).args(&args).status().map_err(|e| {
            AppError::CameraUnavailable(format!("cannot run '{}': {}", self.program, e))
        })?;

        if !status.success() || !out.exists() {
            return Err(AppError::CameraUnavailable(format!(
                "'{}' did not produce a frame ({})",
                self.program, status
            )));
        }

        self.served = index;
        Frame::probe(index, out).map(Some)
    }

    fn describe(&self) -> String {
        format!("camera command '{}'", self.program)
    }
}
