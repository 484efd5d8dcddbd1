//! Worklist document assembly and output
//!
//! Builds one `Joblst` XML document per cabinet and writes it as
//! `<cabinet>.jblx` in the output folder. The `File` field of each entry
//! is a synthetic path under the configured machine root, not the real
//! source path; the CNC controller resolves programs from its own disk.

use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;

use crate::core::partfile::{extract_description, scan_cabinet};
use crate::core::project::Cabinet;
use crate::core::sorter::sort_files;
use crate::core::WorklistError;

/// Namespace of the generated job-list documents.
pub const JOBLST_NS: &str = "http://tempuri.org/Joblst.xsd";

/// Extension of the generated documents, without the dot.
pub const WORKLIST_EXTENSION: &str = "jblx";

/// One row of the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklistEntry {
    /// File stem of the part program
    pub name: String,
    /// Synthetic path the machine expects
    pub file: String,
    pub description: String,
    pub quantity: u32,
}

/// Assemble the ordered, quantified entry list for one cabinet.
///
/// The explicit order from a review is used verbatim when present;
/// otherwise the cabinet folder is scanned and priority-sorted. Every
/// recognized part file yields exactly one entry.
pub fn build_entries(cabinet: &Cabinet, machine_root: &str) -> Result<Vec<WorklistEntry>, WorklistError> {
    let file_names = match &cabinet.order {
        Some(order) => order.clone(),
        None => sort_files(scan_cabinet(&cabinet.folder_path)?),
    };

    let mut entries = Vec::with_capacity(file_names.len());
    for file_name in &file_names {
        let name = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name.as_str())
            .to_string();
        // Backslash-joined on every platform; the consumer is Windows-hosted.
        let file = format!(
            "{}\\{}\\{}\\{}",
            machine_root, cabinet.project_name, cabinet.name, file_name
        );
        let description = extract_description(&cabinet.folder_path.join(file_name));
        let quantity = cabinet.quantities.get(file_name).copied().unwrap_or(1);
        entries.push(WorklistEntry {
            name,
            file,
            description,
            quantity,
        });
    }
    Ok(entries)
}

/// Write the worklist document for one cabinet.
///
/// Creates the output folder if needed and overwrites any existing
/// document without warning; identical inputs produce byte-identical
/// output. Returns the path of the written document.
pub fn write_worklist(
    cabinet: &Cabinet,
    output_dir: &Path,
    machine_root: &str,
) -> Result<PathBuf, WorklistError> {
    fs::create_dir_all(output_dir).map_err(|e| WorklistError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let entries = build_entries(cabinet, machine_root)?;
    let document = render_joblst(&entries)?;

    let output_file = output_dir.join(format!("{}.{}", cabinet.name, WORKLIST_EXTENSION));
    fs::write(&output_file, document).map_err(|e| WorklistError::WriteDocument {
        path: output_file.clone(),
        source: e,
    })?;
    Ok(output_file)
}

/// Serialize entries as indented `Joblst` XML.
fn render_joblst(entries: &[WorklistEntry]) -> Result<Vec<u8>, WorklistError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(xml_error)?;

    let mut root = BytesStart::new("Joblst");
    root.push_attribute(("xmlns", JOBLST_NS));
    writer.write_event(Event::Start(root)).map_err(xml_error)?;

    for entry in entries {
        writer
            .write_event(Event::Start(BytesStart::new("JobLstTable")))
            .map_err(xml_error)?;
        write_leaf(&mut writer, "Name", &entry.name)?;
        write_leaf(&mut writer, "File", &entry.file)?;
        write_leaf(&mut writer, "Description", &entry.description)?;
        write_leaf(&mut writer, "Stueck", &entry.quantity.to_string())?;
        writer
            .write_event(Event::End(BytesEnd::new("JobLstTable")))
            .map_err(xml_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("Joblst")))
        .map_err(xml_error)?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

fn write_leaf(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> Result<(), WorklistError> {
    if text.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new(tag)))
            .map_err(xml_error)?;
        return Ok(());
    }
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(xml_error)?;
    Ok(())
}

fn xml_error<E: std::fmt::Display>(e: E) -> WorklistError {
    WorklistError::Xml {
        message: e.to_string(),
    }
}
