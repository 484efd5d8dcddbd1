//! Folder classification and cabinet structure
//!
//! A selected folder is either one cabinet (part files only) or a whole
//! order containing cabinet subfolders. The generated documents always
//! land in a `worklists` subfolder of the selected folder, which is
//! excluded from classification.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::WorklistError;

/// Name of the output subfolder inside the selected folder.
pub const OUTPUT_DIR_NAME: &str = "worklists";

/// How the selected folder is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// The folder holds part files directly
    SingleCabinet,
    /// The folder holds cabinet subfolders, listed by name
    Project { cabinets: Vec<String> },
}

/// Classify the selected folder.
///
/// Any subfolder other than the output folder makes it a project; with
/// none it is a single cabinet. Subfolder names come back sorted so runs
/// behave the same on every filesystem.
pub fn classify(root: &Path) -> Result<Layout, WorklistError> {
    if !root.is_dir() {
        return Err(WorklistError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let entries = fs::read_dir(root).map_err(|e| WorklistError::Classify {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut cabinets = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| WorklistError::Classify {
            path: root.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name != OUTPUT_DIR_NAME {
                cabinets.push(name.to_string());
            }
        }
    }
    cabinets.sort();

    if cabinets.is_empty() {
        Ok(Layout::SingleCabinet)
    } else {
        Ok(Layout::Project { cabinets })
    }
}

/// One cabinet queued for document generation.
///
/// `order` is `None` until a review supplies an explicit machining
/// order; the builder then falls back to the default priority sort.
/// Quantities are keyed by file name; absent entries mean 1.
#[derive(Debug, Clone)]
pub struct Cabinet {
    pub folder_path: PathBuf,
    /// Cabinet folder name; also the output document's stem
    pub name: String,
    /// Parent folder's name, used in the synthetic reference path
    pub project_name: String,
    pub order: Option<Vec<String>>,
    pub quantities: BTreeMap<String, u32>,
}

impl Cabinet {
    /// A cabinet with default order and all quantities at 1.
    pub fn with_defaults(folder_path: &Path) -> Self {
        Cabinet {
            folder_path: folder_path.to_path_buf(),
            name: folder_component(folder_path),
            project_name: folder_path
                .parent()
                .map(folder_component)
                .unwrap_or_default(),
            order: None,
            quantities: BTreeMap::new(),
        }
    }

    /// A cabinet carrying a reviewed order and entered quantities.
    pub fn reviewed(
        folder_path: &Path,
        order: Vec<String>,
        quantities: BTreeMap<String, u32>,
    ) -> Self {
        Cabinet {
            order: Some(order),
            quantities,
            ..Cabinet::with_defaults(folder_path)
        }
    }
}

fn folder_component(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}
