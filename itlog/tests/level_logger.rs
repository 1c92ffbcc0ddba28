use std::{path::Path, sync::Arc, thread};

use itlog::{FormatFlags, Level, LevelLogger, LogBuffer, LogFile, Logger};
use regex::Regex;

fn log_once(flags: &[FormatFlags]) -> String {
    let buffer = LogBuffer::new();
    let logger = LevelLogger::new(buffer.clone(), flags, Level::Trace);
    logger.log(Level::Trace, "test");
    buffer.contents()
}

#[test]
fn test_single_flags_layout() {
    let date = r"\d{4}/\d{2}/\d{2}";
    let time = r"\d{2}:\d{2}:\d{2}";
    let cases = [
        (FormatFlags::DATE, format!("^TRACE {date} test\n$")),
        (FormatFlags::TIME, format!("^TRACE {time} test\n$")),
        (FormatFlags::UTC, "^TRACE test\n$".to_string()),
        (FormatFlags::MSG_PREFIX, "^TRACE test\n$".to_string()),
        (FormatFlags::STD, format!("^TRACE {date} {time} test\n$")),
    ];
    for (flag, pattern) in cases {
        let output = log_once(&[flag]);
        let re = Regex::new(&pattern).unwrap();
        assert!(re.is_match(&output), "flag {flag}: {output:?} !~ {pattern}");
    }
}

#[test]
fn test_flags_combination_layout() {
    let output = log_once(&[
        FormatFlags::DATE,
        FormatFlags::TIME,
        FormatFlags::MICROSECONDS,
        FormatFlags::MSG_PREFIX,
    ]);
    let re = Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}\.\d{6} TRACE test\n$").unwrap();
    assert!(re.is_match(&output), "{output:?}");
}

#[test]
fn test_default_flags_layout() {
    let output = log_once(&[]);
    let re = Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} TRACE test\n$").unwrap();
    assert!(re.is_match(&output), "{output:?}");
}

#[test]
fn test_utc_date() {
    let output = log_once(&[FormatFlags::UTC, FormatFlags::DATE, FormatFlags::MSG_PREFIX]);
    let today = chrono::Utc::now().format("%Y/%m/%d").to_string();
    assert!(output.starts_with(&today), "{output:?} does not start with {today}");
}

#[test]
fn test_duplicate_flags() {
    assert_eq!(
        log_once(&[FormatFlags::MSG_PREFIX, FormatFlags::MSG_PREFIX]),
        log_once(&[FormatFlags::MSG_PREFIX])
    );
    assert_eq!(
        log_once(&[FormatFlags::UTC, FormatFlags::DATE, FormatFlags::DATE, FormatFlags::UTC]),
        log_once(&[FormatFlags::UTC, FormatFlags::DATE])
    );
}

#[test]
fn test_with_file() {
    let b1 = LogBuffer::new();
    let b2 = LogBuffer::new();
    let l1 = LevelLogger::new(b1.clone(), &[FormatFlags::LONG_FILE], Level::Debug);
    let l2 = LevelLogger::new(b2.clone(), &[FormatFlags::SHORT_FILE], Level::Debug);

    l1.log(Level::Debug, "");
    let long_line = line!() - 1;
    l2.debug("");
    let short_line = line!() - 1;

    let short_name = Path::new(file!()).file_name().unwrap().to_str().unwrap();
    assert_eq!(b1.contents(), format!("DEBUG {}:{long_line}: \n", file!()));
    assert_eq!(b2.contents(), format!("DEBUG {short_name}:{short_line}: \n"));
}

#[test]
fn test_with_file_through_dyn_logger() {
    let buffer = LogBuffer::new();
    let logger: Arc<dyn Logger> = Arc::new(LevelLogger::new(
        buffer.clone(),
        &[FormatFlags::LONG_FILE, FormatFlags::MSG_PREFIX],
        Level::Debug,
    ));

    logger.info("via dyn");
    let info_line = line!() - 1;
    logger.log(Level::Error, "direct");
    let error_line = line!() - 1;

    assert_eq!(
        buffer.contents(),
        format!(
            "{file}:{info_line}: INFO via dyn\n{file}:{error_line}: ERROR direct\n",
            file = file!()
        )
    );
}

#[test]
fn test_ignore_small_log_level() {
    let buffer = LogBuffer::new();
    let logger = LevelLogger::new_default(buffer.clone(), Level::Debug);
    logger.trace("test");
    assert_eq!(buffer.contents(), "");
    logger.debug("test");
    assert!(buffer.contents().contains("test"));
}

#[test]
fn test_threshold_filtering() {
    for threshold in Level::ALL {
        for level in Level::ALL {
            let buffer = LogBuffer::new();
            let logger = LevelLogger::new(buffer.clone(), &[FormatFlags::MSG_PREFIX], threshold);
            logger.log(level, "x");
            if level >= threshold {
                assert_eq!(buffer.contents(), format!("{level} x\n"));
            } else {
                assert!(buffer.is_empty(), "{level} logged at threshold {threshold}");
            }
        }
    }
}

#[test]
fn test_levels_functions() {
    let buffer = LogBuffer::new();
    let logger = LevelLogger::new_default(buffer.clone(), Level::Trace);
    let calls: [(fn(&LevelLogger, &str), Level); 6] = [
        (LevelLogger::trace, Level::Trace),
        (LevelLogger::debug, Level::Debug),
        (LevelLogger::info, Level::Info),
        (LevelLogger::warn, Level::Warning),
        (LevelLogger::error, Level::Error),
        (LevelLogger::fatal, Level::Fatal),
    ];
    for (call, level) in calls {
        call(&logger, "test");
        let output = buffer.take();
        assert!(output.ends_with(&format!("{level} test\n")), "{output:?}");
    }
}

#[test]
fn test_fatal_does_not_exit() {
    let buffer = LogBuffer::new();
    let logger = LevelLogger::new(buffer.clone(), &[FormatFlags::MSG_PREFIX], Level::Trace);
    logger.fatal("first");
    logger.fatal("second");
    assert_eq!(buffer.contents(), "FATAL first\nFATAL second\n");
}

#[test]
fn test_concurrent_lines_do_not_interleave() {
    let buffer = LogBuffer::new();
    let logger = Arc::new(LevelLogger::new(
        buffer.clone(),
        &[FormatFlags::MSG_PREFIX],
        Level::Info,
    ));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for j in 0..200 {
                    logger.info(&format!("thread {i} line {j}"));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let re = Regex::new(r"^INFO thread \d line \d{1,3}$").unwrap();
    let contents = buffer.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 8 * 200);
    assert!(lines.iter().all(|line| re.is_match(line)));
}

#[test]
fn test_log_to_file() {
    let path = std::env::temp_dir().join("itlog_test_log_to_file.log");
    std::fs::remove_file(&path).ok();
    let logger = LevelLogger::new(
        LogFile::new(&path).unwrap(),
        &[FormatFlags::MSG_PREFIX],
        Level::Info,
    );
    logger.info("Hello, world!");
    logger.debug("hidden");
    logger.error("rust is awesome !");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "INFO Hello, world!\nERROR rust is awesome !\n"
    );
    std::fs::remove_file(&path).ok();
}
