use std::{
    fs::File,
    io::{self, Write},
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

/// Standard output sink. Every write goes through a fresh stdout lock.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogStdout;

impl Write for LogStdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Append-only file sink.
/// The file is created if it does not exist and appended to if it does.
#[derive(Debug)]
pub struct LogFile {
    file: File,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, io::Error> {
        let file = File::options().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl Write for LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// In-memory sink. Clones share the same buffer, so one clone can be handed
/// to a logger while another reads back what was written.
#[derive(Default, Debug, Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&inner).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    /// Returns the contents and empties the buffer.
    pub fn take(&self) -> String {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let bytes = std::mem::take(&mut *inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_log_file() {
    let path = std::env::temp_dir().join("itlog_test_log_file.log");
    std::fs::remove_file(&path).ok();
    let mut log_file = LogFile::new(&path).unwrap();
    log_file.write_all(b"Hello, world!\n").unwrap();
    drop(log_file);
    let mut log_file = LogFile::new(&path).unwrap();
    log_file.write_all(b"rust is awesome !\n").unwrap();
    log_file.flush().unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Hello, world!\nrust is awesome !\n"
    );
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_log_file_missing_directory() {
    let path = std::env::temp_dir()
        .join("itlog_no_such_dir")
        .join("nested")
        .join("app.log");
    assert!(LogFile::new(path).is_err());
}

#[test]
fn test_log_buffer_shared_between_clones() {
    let buffer = LogBuffer::new();
    let mut writer = buffer.clone();
    assert!(buffer.is_empty());
    writer.write_all(b"lorem ").unwrap();
    writer.write_all(b"ipsum\n").unwrap();
    assert_eq!(buffer.contents(), "lorem ipsum\n");
    assert_eq!(buffer.take(), "lorem ipsum\n");
    assert!(buffer.is_empty());
    writer.write_all(b"x").unwrap();
    buffer.clear();
    assert_eq!(buffer.contents(), "");
}

#[test]
fn test_log_stdout() {
    let mut log_stdout = LogStdout;
    log_stdout.write_all(b"Hello, world!\n").unwrap();
    log_stdout.flush().unwrap();
}
