//! Size-rotating file writer

use crate::logger::config::FileConfig;
use crate::logger::error::LoggerError;
use flate2::Compression;
use flate2::write::GzEncoder;
use jiff::Zoned;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// File writer that rotates by size and prunes old files
#[derive(Clone)]
pub struct RotatingFileWriter {
    state: Arc<Mutex<WriterState>>,
}

struct WriterState {
    path: PathBuf,
    file: BufWriter<File>,
    current_size: u64,
    max_size: u64,
    max_files: usize,
    compress: bool,
    /// Set after an unrecoverable write error; output then goes to stderr
    fallback_mode: bool,
}

impl RotatingFileWriter {
    pub fn new(config: &FileConfig) -> Result<Self, LoggerError> {
        if let Some(parent) = config.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = open_log_file(&config.path, config.append)?;
        let current_size = if config.append {
            fs::metadata(&config.path).map(|m| m.len()).unwrap_or(0)
        } else {
            0
        };

        Ok(Self {
            state: Arc::new(Mutex::new(WriterState {
                path: config.path.clone(),
                file,
                current_size,
                max_size: config.max_size,
                max_files: config.max_files,
                compress: config.compress,
                fallback_mode: false,
            })),
        })
    }

    pub fn is_in_fallback_mode(&self) -> bool {
        self.state.lock().map(|s| s.fallback_mode).unwrap_or(false)
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = RotatingWriterGuard;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingWriterGuard {
            state: self.state.clone(),
        }
    }
}

/// Per-event handle returned by [`RotatingFileWriter::make_writer`]
pub struct RotatingWriterGuard {
    state: Arc<Mutex<WriterState>>,
}

impl Write for RotatingWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("Failed to acquire writer lock"))?;

        if state.fallback_mode {
            return io::stderr().write(buf);
        }

        if state.current_size >= state.max_size
            && let Err(e) = state.rotate()
        {
            return state.fall_back(buf, &e.to_string());
        }

        match state.file.write(buf) {
            Ok(written) => {
                state.current_size += written as u64;
                Ok(written)
            }
            Err(e) => state.fall_back(buf, &e.to_string()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("Failed to acquire writer lock"))?;

        if state.fallback_mode {
            return io::stderr().flush();
        }
        state.file.flush()
    }
}

impl Drop for RotatingWriterGuard {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            let _ = state.file.flush();
        }
    }
}

impl WriterState {
    fn fall_back(&mut self, buf: &[u8], reason: &str) -> io::Result<usize> {
        self.fallback_mode = true;
        eprintln!("[Logger] File write failed, falling back to stderr: {}", reason);
        io::stderr().write(buf)
    }

    fn rotate(&mut self) -> Result<(), LoggerError> {
        self.file.flush()?;

        if self.path.exists() {
            let rotated = rotated_path(&self.path);
            fs::rename(&self.path, &rotated)?;
            if self.compress {
                compress_file(&rotated)?;
            }
        }

        self.file = open_log_file(&self.path, false)?;
        self.current_size = 0;
        cleanup_rotated_files(&self.path, self.max_files)
    }
}

fn open_log_file(path: &Path, append: bool) -> io::Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;

    Ok(BufWriter::new(file))
}

/// `logs/azkar.log` becomes `logs/azkar.20250101T120000.log`, with a numeric
/// suffix on the timestamp when that name is already taken.
fn rotated_path(base: &Path) -> PathBuf {
    let timestamp = Zoned::now().strftime("%Y%m%dT%H%M%S").to_string();
    let stem = base.file_stem().unwrap_or_default().to_string_lossy();
    let ext = base.extension().map(|e| e.to_string_lossy());

    let name_for = |tag: &str| match &ext {
        Some(ext) => format!("{}.{}.{}", stem, tag, ext),
        None => format!("{}.{}", stem, tag),
    };

    let mut candidate = base.with_file_name(name_for(&timestamp));
    let mut seq = 1;
    while candidate.exists() || gz_path(&candidate).exists() {
        candidate = base.with_file_name(name_for(&format!("{}-{}", timestamp, seq)));
        seq += 1;
    }
    candidate
}

fn gz_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".gz");
    PathBuf::from(name)
}

/// Gzips `path` into `path.gz` and removes the original.
pub(crate) fn compress_file(path: &Path) -> Result<PathBuf, LoggerError> {
    let input = fs::read(path)?;
    let target = gz_path(path);

    let mut encoder = GzEncoder::new(File::create(&target)?, Compression::default());
    encoder.write_all(&input)?;
    encoder.finish()?;
    fs::remove_file(path)?;

    Ok(target)
}

/// Keeps the newest `max_files` rotated siblings of `base`.
pub(crate) fn cleanup_rotated_files(base: &Path, max_files: usize) -> Result<(), LoggerError> {
    let parent = match base.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let prefix = format!(
        "{}.",
        base.file_stem().unwrap_or_default().to_string_lossy()
    );
    let base_name = base.file_name().unwrap_or_default();

    let mut rotated: Vec<(Option<std::time::SystemTime>, PathBuf)> = fs::read_dir(parent)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let name = entry.file_name();
            name != base_name && name.to_string_lossy().starts_with(&prefix)
        })
        .map(|entry| {
            let modified = entry.metadata().and_then(|m| m.modified()).ok();
            (modified, entry.path())
        })
        .collect();

    if rotated.len() <= max_files {
        return Ok(());
    }

    rotated.sort();
    let excess = rotated.len() - max_files;
    for (_, path) in rotated.into_iter().take(excess) {
        fs::remove_file(&path).map_err(|e| {
            LoggerError::rotation(format!("failed to remove {}: {}", path.display(), e))
        })?;
    }

    Ok(())
}
