/*!
 * XML writer implementation for projdump
 */

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::config::Config;
use crate::error::Result;
use crate::report::FileReportInfo;
use crate::scanner::Scanner;
use crate::types::ScanEntry;

/// Name of the document's root element
pub const ROOT_TAG: &str = "project";

/// Name of the per-file element
pub const FILE_TAG: &str = "file";

/// Totals gathered while serializing
#[derive(Debug, Clone, Default)]
pub struct WriteSummary {
    /// Files written to the document
    pub files_included: usize,
    /// Files skipped because reading them failed
    pub files_failed: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each included file, keyed by relative path
    pub file_details: HashMap<String, FileReportInfo>,
}

/// XML writer for the project snapshot
pub struct XmlWriter {
    /// Destination file
    output_path: PathBuf,
    /// Progress bar, suspended while product lines are printed
    progress: Arc<ProgressBar>,
}

impl XmlWriter {
    /// Create a new XML writer
    pub fn new(config: &Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            output_path: config.output_path.clone(),
            progress,
        }
    }

    /// Drive the scanner and write the document to the configured output file
    pub fn write(&self, scanner: &Scanner) -> Result<WriteSummary> {
        let file = File::create(&self.output_path)?;
        let mut writer = BufWriter::new(file);
        let summary = self.write_to(scanner, &mut writer)?;
        writer.flush()?;
        Ok(summary)
    }

    /// Drive the scanner and write the document to any sink
    pub fn write_to<W: Write>(&self, scanner: &Scanner, sink: W) -> Result<WriteSummary> {
        let mut xml_writer = Writer::new(sink);
        let mut summary = WriteSummary::default();

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        xml_writer.get_mut().write_all(b"\n")?;
        xml_writer.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;
        xml_writer.get_mut().write_all(b"\n")?;

        for entry in scanner.scan() {
            match entry? {
                ScanEntry::Text(candidate) => match fs::read_to_string(&candidate.abs_path) {
                    Ok(content) => {
                        self.write_file(&candidate.rel_path, &content, &mut xml_writer)?;
                        self.record_included(&candidate.rel_path, &content, &mut summary);
                    }
                    Err(e) => self.record_failure(&candidate.abs_path, &e, &mut summary),
                },
                ScanEntry::Unreadable { abs_path, error } => {
                    self.record_failure(&abs_path, &error, &mut summary)
                }
            }
        }

        xml_writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;
        xml_writer.get_mut().write_all(b"\n")?;

        Ok(summary)
    }

    /// Write a single file element
    fn write_file<W: Write>(
        &self,
        rel_path: &Path,
        content: &str,
        writer: &mut Writer<W>,
    ) -> io::Result<()> {
        let mut start_tag = BytesStart::new(FILE_TAG);
        start_tag.push_attribute(("path", rel_path.to_string_lossy().as_ref()));

        writer.get_mut().write_all(b"  ")?;
        writer.write_event(Event::Start(start_tag))?;
        writer.get_mut().write_all(b"\n    ")?;
        for section in cdata_sections(content) {
            writer.write_event(Event::CData(BytesCData::new(section)))?;
        }
        writer.get_mut().write_all(b"\n  ")?;
        writer.write_event(Event::End(BytesEnd::new(FILE_TAG)))?;
        writer.get_mut().write_all(b"\n")?;

        Ok(())
    }

    fn record_included(&self, rel_path: &Path, content: &str, summary: &mut WriteSummary) {
        let lines = content.lines().count();
        let chars = content.chars().count();

        summary.files_included += 1;
        summary.total_lines += lines;
        summary.total_chars += chars;
        summary.file_details.insert(
            rel_path.to_string_lossy().to_string(),
            FileReportInfo {
                lines,
                chars,
                bytes: content.len() as u64,
            },
        );

        self.progress
            .suspend(|| println!("Included: {}", rel_path.display()));
    }

    fn record_failure(&self, abs_path: &Path, error: &io::Error, summary: &mut WriteSummary) {
        summary.files_failed += 1;
        self.progress
            .suspend(|| eprintln!("Error reading {}: {}", abs_path.display(), error));
    }
}

/// Split content so no section contains the CDATA terminator
///
/// Each `]]>` is broken after `]]`, so writing every section as its own CDATA
/// block yields `]]]]><![CDATA[>` and concatenating the sections gives back
/// the original text.
pub fn cdata_sections(content: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut rest = content;
    while let Some(pos) = rest.find("]]>") {
        sections.push(&rest[..pos + 2]);
        rest = &rest[pos + 2..];
    }
    sections.push(rest);
    sections
}
