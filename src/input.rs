//! Input boundary: file validation and the load/analyze/reset lifecycle.
//!
//! The engine holds no state. A [`Session`] is where the presentation side
//! keeps the currently loaded file and the last report; loading a new file
//! replaces both, and `reset` clears them.

use std::path::Path;

use tracing::{info, warn};

use crate::checks::AnalysisInput;
use crate::dom::HtmlDocument;
use crate::encoding::decode_html;
use crate::error::{Error, Result};
use crate::report::format_file_size;
use crate::result::AnalysisReport;
use crate::Options;

const HTML_EXTENSIONS: [&str; 2] = [".html", ".htm"];

/// Accept only `.html` / `.htm` file names.
///
/// The comparison is case-sensitive unless
/// [`Options::case_insensitive_extension`] is set.
pub fn validate_file_name(name: &str, options: &Options) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::NoFileSelected);
    }

    let accepted = if options.case_insensitive_extension {
        let lower = name.to_lowercase();
        HTML_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    } else {
        HTML_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
    };

    if accepted {
        Ok(())
    } else {
        warn!(file = name, "rejected non-HTML file");
        Err(Error::InvalidFileKind(name.to_string()))
    }
}

/// Name and display size of the loaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub size_bytes: u64,
    /// E.g. `"12.4 KB"`.
    pub size_label: String,
}

/// A decoded file and its parsed tree, built once per load.
#[derive(Debug)]
struct LoadedInput {
    info: FileInfo,
    html: String,
    document: HtmlDocument,
}

/// Holds the currently loaded email and its latest report.
#[derive(Debug, Default)]
pub struct Session {
    options: Options,
    loaded: Option<LoadedInput>,
    report: Option<AnalysisReport>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Load a file from its name and raw bytes.
    ///
    /// A rejected file leaves the previous state untouched. An accepted one
    /// replaces it entirely, including any previous report.
    pub fn load(&mut self, name: &str, bytes: &[u8]) -> Result<&FileInfo> {
        validate_file_name(name, &self.options)?;

        let (html, encoding) = decode_html(bytes, self.options.sniff_meta_charset);
        let document = HtmlDocument::parse(&html);
        let size_bytes = bytes.len() as u64;
        let info = FileInfo {
            name: name.to_string(),
            size_bytes,
            size_label: format_file_size(size_bytes),
        };
        info!(file = name, size = %info.size_label, encoding = encoding.name(), "email loaded");

        self.report = None;
        let loaded = self.loaded.insert(LoadedInput { info, html, document });
        Ok(&loaded.info)
    }

    /// Read and load a file from disk.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<&FileInfo> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or(Error::NoFileSelected)?;
        validate_file_name(&name, &self.options)?;

        let bytes = std::fs::read(path)?;
        self.load(&name, &bytes)
    }

    /// Analyze the loaded email, replacing any previous report.
    ///
    /// A loaded file whose markup is empty counts as nothing loaded.
    pub fn analyze(&mut self) -> Result<&AnalysisReport> {
        let loaded = self
            .loaded
            .as_ref()
            .filter(|loaded| !loaded.html.is_empty())
            .ok_or(Error::NothingLoaded)?;
        let input = AnalysisInput::new(&loaded.html, &loaded.document);
        let report = crate::analyze(&input);
        Ok(self.report.insert(report))
    }

    /// Forget the loaded file and its report. Safe to call at any time.
    pub fn reset(&mut self) {
        if self.loaded.is_some() {
            info!("session reset");
        }
        self.loaded = None;
        self.report = None;
    }

    /// Details of the loaded file, if any.
    #[must_use]
    pub fn file_info(&self) -> Option<&FileInfo> {
        self.loaded.as_ref().map(|loaded| &loaded.info)
    }

    /// Decoded markup of the loaded file, if any.
    #[must_use]
    pub fn html(&self) -> Option<&str> {
        self.loaded.as_ref().map(|loaded| loaded.html.as_str())
    }

    /// The latest report, if the loaded file has been analyzed.
    #[must_use]
    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }
}
