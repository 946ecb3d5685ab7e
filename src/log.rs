use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, RevscrapeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    fn glyph(&self) -> &'static str {
        match self {
            LogLevel::Info => "🟢",
            LogLevel::Error => "🔴",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub domain: Option<String>,
    pub event: String,
    pub details: Option<String>,
}

impl LogEntry {
    fn line(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.level.glyph(),
            self.event,
            self.domain.as_deref().unwrap_or("*"),
            self.details.as_deref().unwrap_or("")
        )
    }
}

/// Append-only run history, one line per scrape.
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    /// Logger writing to `~/.revscrape/activity.log`.
    pub fn new() -> Result<Self> {
        let user_dirs = directories::UserDirs::new().ok_or(RevscrapeError::MissingDir("home"))?;
        let dir = user_dirs.home_dir().join(".revscrape");
        fs::create_dir_all(&dir)?;
        Ok(Self::at(dir.join("activity.log")))
    }

    /// Logger writing to an explicit file.
    pub fn at(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    pub fn log(
        &self,
        level: LogLevel,
        domain: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            domain: domain.map(|d| d.to_string()),
            event: event.to_string(),
            details: details.map(|d| d.to_string()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{}", entry.line())?;
        Ok(())
    }

    pub fn info(&self, domain: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.log(LogLevel::Info, domain, event, details)
    }

    pub fn error(&self, domain: Option<&str>, event: &str, details: Option<&str>) -> Result<()> {
        self.log(LogLevel::Error, domain, event, details)
    }

    /// Matching lines, most recent first.
    pub fn read_logs(&self, domain_filter: Option<&str>, errors_only: bool) -> Result<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(vec![]);
        }

        let reader = BufReader::new(fs::File::open(&self.log_path)?);
        let mut matching = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if errors_only && !line.contains(LogLevel::Error.glyph()) {
                continue;
            }
            if let Some(domain) = domain_filter {
                if !line.contains(domain) {
                    continue;
                }
            }
            matching.push(line);
        }

        matching.reverse();
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger() -> (tempfile::TempDir, ActivityLogger) {
        let dir = tempfile::tempdir().unwrap();
        let logger = ActivityLogger::at(dir.path().join("activity.log"));
        (dir, logger)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let (_dir, logger) = logger();
        assert!(logger.read_logs(None, false).unwrap().is_empty());
    }

    #[test]
    fn test_line_format_and_order() {
        let (_dir, logger) = logger();
        logger
            .info(Some("www.amazon.in"), "scrape", Some("12 reviews"))
            .unwrap();
        logger.error(None, "scrape", Some("fetch_failed")).unwrap();

        let lines = logger.read_logs(None, false).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("🔴 scrape * fetch_failed"));
        assert!(lines[1].ends_with("🟢 scrape www.amazon.in 12 reviews"));
        assert!(lines[1].contains(" UTC "));
    }

    #[test]
    fn test_filters() {
        let (_dir, logger) = logger();
        logger.info(Some("www.flipkart.com"), "scrape", None).unwrap();
        logger.error(Some("www.amazon.in"), "scrape", None).unwrap();
        logger.info(Some("www.amazon.in"), "scrape", None).unwrap();

        assert_eq!(logger.read_logs(Some("amazon"), false).unwrap().len(), 2);
        assert_eq!(logger.read_logs(None, true).unwrap().len(), 1);
        assert_eq!(logger.read_logs(Some("flipkart"), true).unwrap().len(), 0);
    }
}
