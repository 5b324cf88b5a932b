use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// `RUST_LOG` wins over the CLI level when set.
fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_level).unwrap_or_else(|_| {
            eprintln!("Invalid log level: {}. Using INFO level.", default_level);
            EnvFilter::new("info")
        })
    })
}

pub fn init_logging(default_level: &str, log_file: Option<&str>) {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_filter(build_filter(default_level));

    let file_layer = log_file.map(|path| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(CappedFile::new(PathBuf::from(path), LOG_FILE_MAX_BYTES))
            .with_filter(build_filter(default_level))
    });

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .init();
}

/// Append-only log file that keeps its newest half once it reaches `max_len`.
#[derive(Clone)]
struct CappedFile {
    path: PathBuf,
    max_len: u64,
    lock: Arc<Mutex<()>>,
}

impl CappedFile {
    fn new(path: PathBuf, max_len: u64) -> Self {
        Self { path, max_len, lock: Arc::new(Mutex::new(())) }
    }

    fn shrink_if_full(&self) -> io::Result<()> {
        let size = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(_) => return Ok(()),
        };
        if size < self.max_len {
            return Ok(());
        }

        let keep = self.max_len / 2;
        let mut tail = Vec::new();
        let mut rf = OpenOptions::new().read(true).open(&self.path)?;
        rf.seek(SeekFrom::Start(size.saturating_sub(keep)))?;
        rf.read_to_end(&mut tail)?;

        let mut wf = OpenOptions::new().write(true).truncate(true).open(&self.path)?;
        wf.write_all(&tail)
    }
}

impl Write for CappedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.shrink_if_full()?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CappedFile {
    type Writer = CappedFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
