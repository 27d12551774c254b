use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::history::HistoryStore;
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the history file to `dest_file`, optionally compressing it.
    /// Returns the path of the final artifact.
    pub fn backup(
        store: &HistoryStore,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = store.path();
        let dest = Path::new(dest_file);

        // 1️⃣ Check history exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("History file not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Ask before overwriting
        ensure_writable(dest, force)?;

        // 4️⃣ Copy history
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        if !compress {
            return Ok(dest.to_path_buf());
        }

        // 5️⃣ Optional compression
        let compressed = compress_backup(dest)?;

        if compressed != dest {
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            } else {
                log::info!("removed uncompressed backup {}", dest.display());
            }
        }

        Ok(compressed)
    }
}

fn entry_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("Invalid backup path: {}", path.display())))
}

/// Compress a backup: .zip on Windows
#[cfg(target_os = "windows")]
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name(path)?, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}

/// Compress a backup: .tar.gz everywhere else
#[cfg(not(target_os = "windows"))]
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let mut name = path.as_os_str().to_os_string();
    name.push(".tar.gz");
    let tgz_path = PathBuf::from(name);

    let file = fs::File::create(&tgz_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    builder.append_path_with_name(path, entry_name(path)?)?;
    builder.into_inner()?.finish()?;

    success(format!("Compressed: {}", tgz_path.display()));

    Ok(tgz_path)
}
