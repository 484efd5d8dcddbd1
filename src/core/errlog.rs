//! Append-only run failure log
//!
//! Fatal run failures are appended as timestamped lines to a local log
//! file. The file is never read back by the tool; it exists so a failed
//! unattended run leaves a trace. Failures to write the log itself are
//! ignored.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Utc;

/// Default log file name, created in the process working directory.
pub const ERROR_LOG_FILE: &str = "error_log.txt";

/// Append one timestamped line to the given log file.
pub fn append_to(path: &Path, message: &str) {
    let line = format!(
        "{}  {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        message
    );
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(line.as_bytes());
    }
}
