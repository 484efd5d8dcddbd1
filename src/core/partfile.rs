//! Part-program file access
//!
//! A part file is an XML document in the machine's `Programm` namespace.
//! Only the `Description` field is read; everything else is opaque to
//! this tool. Unreadable or malformed part files degrade to an empty
//! description so a single bad part never aborts a run.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::core::WorklistError;

/// Namespace of the per-part machine programs.
pub const PROGRAM_NS: &str = "http://tempuri.org/Programm.xsd";

/// Extension of part-program files, without the dot.
pub const PART_EXTENSION: &str = "ganx";

/// One discovered part-program file.
#[derive(Debug, Clone)]
pub struct PartFile {
    /// File stem, unique within the cabinet folder
    pub name: String,
    pub path: PathBuf,
    /// Extracted description; empty if absent or unreadable
    pub description: String,
}

impl PartFile {
    /// Read one part file, extracting its description.
    pub fn read(path: &Path) -> Self {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        PartFile {
            name,
            path: path.to_path_buf(),
            description: extract_description(path),
        }
    }
}

/// Extract the `Description` text from a part file.
///
/// Returns an empty string on any failure (missing file, malformed XML,
/// absent element). A dim diagnostic goes to stderr; the failure is
/// absorbed here and never propagates.
pub fn extract_description(path: &Path) -> String {
    match try_extract_description(path) {
        Ok(Some(description)) => description,
        Ok(None) => String::new(),
        Err(message) => {
            eprintln!(
                "{}",
                style(format!("warning: {}: {}", path.display(), message)).dim()
            );
            String::new()
        }
    }
}

fn try_extract_description(path: &Path) -> Result<Option<String>, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let mut reader = NsReader::from_str(&content);
    reader.config_mut().trim_text(true);

    let mut in_description = false;
    let mut text = String::new();
    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) => {
                if in_description {
                    // A child element ends the text; only leading text counts.
                    return Ok(Some(text));
                }
                let (ns, local) = reader.resolve_element(e.name());
                if local.as_ref() == b"Description"
                    && matches!(ns, ResolveResult::Bound(Namespace(n)) if n == PROGRAM_NS.as_bytes())
                {
                    in_description = true;
                    text.clear();
                }
            }
            Event::Empty(_) if in_description => {
                return Ok(Some(text));
            }
            Event::Text(t) if in_description => {
                text.push_str(&t.unescape().map_err(|e| e.to_string())?);
            }
            Event::End(_) if in_description => {
                return Ok(Some(text));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// List the part-file names in a cabinet folder, lexicographically.
///
/// Only files with the recognized extension count; subfolders and other
/// files are ignored.
pub fn scan_cabinet(dir: &Path) -> Result<Vec<String>, WorklistError> {
    let entries = fs::read_dir(dir).map_err(|e| WorklistError::CabinetScan {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| WorklistError::CabinetScan {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == PART_EXTENSION) {
            if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(file_name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_part(dir: &Path, name: &str, description: &str) -> PathBuf {
        let path = dir.join(name);
        let content = format!(
            r#"<?xml version="1.0"?>
<Programm xmlns="http://tempuri.org/Programm.xsd">
  <Header>
    <Description>{}</Description>
  </Header>
</Programm>"#,
            description
        );
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_extract_description() {
        let dir = tempdir().unwrap();
        let path = write_part(dir.path(), "BOK1.ganx", "Left side panel");
        assert_eq!(extract_description(&path), "Left side panel");
    }

    #[test]
    fn test_extract_description_missing_element() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("BOK1.ganx");
        fs::write(
            &path,
            r#"<Programm xmlns="http://tempuri.org/Programm.xsd"><Name>x</Name></Programm>"#,
        )
        .unwrap();
        assert_eq!(extract_description(&path), "");
    }

    #[test]
    fn test_extract_description_wrong_namespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("BOK1.ganx");
        fs::write(
            &path,
            r#"<Programm xmlns="http://example.org/other"><Description>nope</Description></Programm>"#,
        )
        .unwrap();
        assert_eq!(extract_description(&path), "");
    }

    #[test]
    fn test_extract_description_stops_at_child_element() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("BOK1.ganx");
        fs::write(
            &path,
            r#"<Programm xmlns="http://tempuri.org/Programm.xsd"><Description>A<Sub>B</Sub>C</Description></Programm>"#,
        )
        .unwrap();
        assert_eq!(extract_description(&path), "A");
    }

    #[test]
    fn test_extract_description_malformed_xml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("BAD.ganx");
        fs::write(&path, "<Programm><oops").unwrap();
        assert_eq!(extract_description(&path), "");
    }

    #[test]
    fn test_extract_description_missing_file() {
        assert_eq!(extract_description(Path::new("/no/such/file.ganx")), "");
    }

    #[test]
    fn test_scan_cabinet_filters_and_sorts() {
        let dir = tempdir().unwrap();
        write_part(dir.path(), "DNO1.ganx", "");
        write_part(dir.path(), "BOK1.ganx", "");
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let names = scan_cabinet(dir.path()).unwrap();
        assert_eq!(names, vec!["BOK1.ganx".to_string(), "DNO1.ganx".to_string()]);
    }

    #[test]
    fn test_scan_cabinet_missing_dir() {
        assert!(scan_cabinet(Path::new("/no/such/dir")).is_err());
    }

    #[test]
    fn test_part_file_read() {
        let dir = tempdir().unwrap();
        let path = write_part(dir.path(), "STR1.ganx", "Center panel");
        let part = PartFile::read(&path);
        assert_eq!(part.name, "STR1");
        assert_eq!(part.description, "Center panel");
    }
}
