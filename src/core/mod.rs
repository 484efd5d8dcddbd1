//! Core module - the worklist generation engine

pub mod config;
pub mod errlog;
pub mod error;
pub mod partfile;
pub mod project;
pub mod session;
pub mod sorter;
pub mod workflow;
pub mod worklist;

pub use config::{Config, DEFAULT_MACHINE_ROOT};
pub use errlog::ERROR_LOG_FILE;
pub use error::WorklistError;
pub use partfile::{extract_description, scan_cabinet, PartFile, PART_EXTENSION};
pub use project::{classify, Cabinet, Layout, OUTPUT_DIR_NAME};
pub use session::{parse_quantity, Direction, ReviewSession};
pub use sorter::sort_files;
pub use workflow::{
    Mode, NoticeKind, OperatorUi, ReviewAction, ReviewScreen, RunSummary, Workflow,
};
pub use worklist::{build_entries, write_worklist, WorklistEntry, WORKLIST_EXTENSION};
