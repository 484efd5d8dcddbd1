//! Batch workflow controller
//!
//! Drives one generation run over a selected folder: classify it as a
//! single cabinet or a project of cabinets, then either generate every
//! document directly or walk the cabinets through an interactive review
//! session. The operator-facing surface is behind the [`OperatorUi`]
//! trait; the controller is the single place that logs run failures and
//! emits the final notification.

use std::path::{Path, PathBuf};

use console::style;

use crate::core::errlog::{self, ERROR_LOG_FILE};
use crate::core::partfile::scan_cabinet;
use crate::core::project::{classify, Cabinet, Layout, OUTPUT_DIR_NAME};
use crate::core::session::{Direction, ReviewSession};
use crate::core::sorter::sort_files;
use crate::core::worklist::write_worklist;
use crate::core::WorklistError;

/// Whether cabinets are reviewed interactively before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Direct,
    Review,
}

/// Kind of operator notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One action emitted by the review screen. Indices are 0-based into
/// the screen's part list; names are the full part file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    MoveUp(usize),
    MoveDown(usize),
    SetQuantity { name: String, raw: String },
    AdjustQuantity { name: String, delta: i32 },
    SaveAndContinue,
    SaveAndFinish,
}

/// Everything the review screen needs to render one cabinet.
#[derive(Debug)]
pub struct ReviewScreen<'a> {
    pub cabinet: &'a str,
    pub parts: &'a [String],
    /// Quantity per part, same index as `parts`
    pub quantities: Vec<u32>,
    /// 1-based position of this cabinet in the run
    pub current: usize,
    pub total: usize,
}

/// The operator interaction boundary: notifications in one direction,
/// review actions in the other. The CLI binds this to the terminal;
/// tests script it.
pub trait OperatorUi {
    fn notify(&mut self, kind: NoticeKind, message: &str);
    fn review(&mut self, screen: &ReviewScreen<'_>) -> Result<ReviewAction, WorklistError>;
}

/// What one completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub layout: Layout,
    /// Written documents, in generation order
    pub documents: Vec<PathBuf>,
}

/// One generation run over a selected folder.
pub struct Workflow {
    root: PathBuf,
    mode: Mode,
    machine_root: String,
    error_log: PathBuf,
}

impl Workflow {
    pub fn new(root: &Path, mode: Mode, machine_root: &str) -> Self {
        Workflow {
            root: root.to_path_buf(),
            mode,
            machine_root: machine_root.to_string(),
            error_log: PathBuf::from(ERROR_LOG_FILE),
        }
    }

    /// Redirect the failure log, mainly for tests.
    pub fn with_error_log(mut self, path: &Path) -> Self {
        self.error_log = path.to_path_buf();
        self
    }

    /// Run to completion. Exactly one notification is emitted: success
    /// after the last document, or the aggregate failure. A failure is
    /// also appended to the error log; documents already written stay.
    pub fn run(&self, ui: &mut dyn OperatorUi) -> Result<RunSummary, WorklistError> {
        match self.execute(ui) {
            Ok(summary) => {
                let message = match summary.layout {
                    Layout::SingleCabinet => "Worklist for the cabinet was created successfully.",
                    Layout::Project { .. } => "Worklists for the order were created successfully.",
                };
                ui.notify(NoticeKind::Info, message);
                Ok(summary)
            }
            Err(err) => {
                errlog::append_to(
                    &self.error_log,
                    &format!("run failed for {}: {}", self.root.display(), err),
                );
                ui.notify(NoticeKind::Error, &format!("Run failed: {}", err));
                Err(err)
            }
        }
    }

    fn execute(&self, ui: &mut dyn OperatorUi) -> Result<RunSummary, WorklistError> {
        let layout = classify(&self.root)?;
        let output_dir = self.root.join(OUTPUT_DIR_NAME);

        let documents = match (&layout, self.mode) {
            (Layout::SingleCabinet, Mode::Direct) => {
                vec![write_worklist(
                    &Cabinet::with_defaults(&self.root),
                    &output_dir,
                    &self.machine_root,
                )?]
            }
            (Layout::SingleCabinet, Mode::Review) => {
                self.run_review(Vec::new(), &output_dir, ui)?
            }
            (Layout::Project { cabinets }, Mode::Direct) => {
                self.warn_loose_parts();
                let mut written = Vec::new();
                for name in cabinets {
                    written.push(write_worklist(
                        &Cabinet::with_defaults(&self.root.join(name)),
                        &output_dir,
                        &self.machine_root,
                    )?);
                }
                written
            }
            (Layout::Project { cabinets }, Mode::Review) => {
                self.warn_loose_parts();
                self.run_review(cabinets.clone(), &output_dir, ui)?
            }
        };

        Ok(RunSummary { layout, documents })
    }

    /// Interactive review over the given cabinets; an empty list means
    /// the selected folder itself is the one cabinet.
    fn run_review(
        &self,
        cabinets: Vec<String>,
        output_dir: &Path,
        ui: &mut dyn OperatorUi,
    ) -> Result<Vec<PathBuf>, WorklistError> {
        let first_dir = match cabinets.first() {
            Some(name) => self.root.join(name),
            None => self.root.clone(),
        };
        let mut session = ReviewSession::new(cabinets, self.default_order(&first_dir)?);
        let mut documents = Vec::new();

        loop {
            let cabinet_dir = self.session_cabinet_dir(&session);
            let cabinet_name = cabinet_dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();

            let action = {
                let screen = ReviewScreen {
                    cabinet: &cabinet_name,
                    parts: &session.working_order,
                    quantities: session
                        .working_order
                        .iter()
                        .map(|part| session.quantity(part))
                        .collect(),
                    current: session.current_index + 1,
                    total: session.total(),
                };
                ui.review(&screen)?
            };

            match action {
                ReviewAction::MoveUp(index) => session.reorder(index, Direction::Up),
                ReviewAction::MoveDown(index) => session.reorder(index, Direction::Down),
                ReviewAction::SetQuantity { name, raw } => session.set_quantity(&name, &raw),
                ReviewAction::AdjustQuantity { name, delta } => {
                    session.adjust_quantity(&name, delta)
                }
                ReviewAction::SaveAndContinue => {
                    documents.push(self.write_from_session(&cabinet_dir, &session, output_dir)?);
                    if session.cabinets.is_empty() {
                        break;
                    }
                    let next_index = session.current_index + 1;
                    let next_order = match session.cabinets.get(next_index) {
                        Some(name) => self.default_order(&self.root.join(name))?,
                        None => Vec::new(),
                    };
                    if !session.advance(next_order) {
                        break;
                    }
                }
                ReviewAction::SaveAndFinish => {
                    documents.push(self.write_from_session(&cabinet_dir, &session, output_dir)?);
                    // Remaining cabinets go out untouched: default order,
                    // every quantity 1.
                    for name in session.cabinets.iter().skip(session.current_index + 1) {
                        documents.push(write_worklist(
                            &Cabinet::with_defaults(&self.root.join(name)),
                            output_dir,
                            &self.machine_root,
                        )?);
                    }
                    break;
                }
            }
        }

        Ok(documents)
    }

    fn session_cabinet_dir(&self, session: &ReviewSession) -> PathBuf {
        match session.current_cabinet() {
            Some(name) => self.root.join(name),
            None => self.root.clone(),
        }
    }

    fn write_from_session(
        &self,
        cabinet_dir: &Path,
        session: &ReviewSession,
        output_dir: &Path,
    ) -> Result<PathBuf, WorklistError> {
        let cabinet = Cabinet::reviewed(
            cabinet_dir,
            session.working_order.clone(),
            session.quantities(),
        );
        write_worklist(&cabinet, output_dir, &self.machine_root)
    }

    fn default_order(&self, cabinet_dir: &Path) -> Result<Vec<String>, WorklistError> {
        Ok(sort_files(scan_cabinet(cabinet_dir)?))
    }

    /// Part files sitting next to cabinet subfolders are ignored at the
    /// project level; make that visible instead of silent.
    fn warn_loose_parts(&self) {
        if let Ok(loose) = scan_cabinet(&self.root) {
            if !loose.is_empty() {
                eprintln!(
                    "{}",
                    style(format!(
                        "warning: {} part file(s) directly in {} are ignored; only cabinet subfolders are processed",
                        loose.len(),
                        self.root.display()
                    ))
                    .yellow()
                );
            }
        }
    }
}
