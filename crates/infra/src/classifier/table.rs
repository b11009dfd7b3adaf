// crates/infra/src/classifier/table.rs
use std::collections::HashMap;

use filedesc_ports::TypeClassifier;
use filedesc_shared_kernel::{FileType, InfraResult};

use super::config::{ClassifierConfig, normalize_key};

/// Label returned for extensions the table does not know.
pub const DEFAULT_FALLBACK: &str = "File";

const BUILTIN_LABELS: &[(&str, &str)] = &[
    // text
    ("txt", "Text Document"),
    ("md", "Markdown Document"),
    ("markdown", "Markdown Document"),
    ("rst", "reStructuredText Document"),
    ("log", "Log File"),
    ("csv", "CSV Document"),
    ("tsv", "TSV Document"),
    // structured data / config
    ("json", "JSON Document"),
    ("yaml", "YAML Document"),
    ("yml", "YAML Document"),
    ("toml", "TOML Document"),
    ("xml", "XML Document"),
    ("ini", "Configuration File"),
    ("cfg", "Configuration File"),
    ("conf", "Configuration File"),
    // source code
    ("rs", "Rust Source"),
    ("c", "C Source"),
    ("h", "C Header"),
    ("cpp", "C++ Source"),
    ("hpp", "C++ Header"),
    ("go", "Go Source"),
    ("java", "Java Source"),
    ("js", "JavaScript Source"),
    ("ts", "TypeScript Source"),
    ("py", "Python Source"),
    ("rb", "Ruby Source"),
    ("sh", "Shell Script"),
    ("html", "HTML Document"),
    ("htm", "HTML Document"),
    ("css", "CSS Stylesheet"),
    // documents
    ("pdf", "PDF Document"),
    ("doc", "Word Document"),
    ("docx", "Word Document"),
    ("xls", "Excel Spreadsheet"),
    ("xlsx", "Excel Spreadsheet"),
    ("ppt", "PowerPoint Presentation"),
    ("pptx", "PowerPoint Presentation"),
    // images
    ("png", "PNG Image"),
    ("jpg", "JPEG Image"),
    ("jpeg", "JPEG Image"),
    ("gif", "GIF Image"),
    ("svg", "SVG Image"),
    ("webp", "WebP Image"),
    ("bmp", "Bitmap Image"),
    ("ico", "Icon"),
    // audio / video
    ("mp3", "MP3 Audio"),
    ("wav", "WAV Audio"),
    ("flac", "FLAC Audio"),
    ("mp4", "MP4 Video"),
    ("mkv", "Matroska Video"),
    ("mov", "QuickTime Video"),
    // archives
    ("zip", "ZIP Archive"),
    ("tar", "Tar Archive"),
    ("gz", "Gzip Archive"),
    ("7z", "7-Zip Archive"),
    ("rar", "RAR Archive"),
    // executables / binaries
    ("exe", "Application"),
    ("dll", "Dynamic Library"),
    ("so", "Shared Library"),
    ("bin", "Binary File"),
];

/// Case-insensitive extension → label lookup with a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionTable {
    labels: HashMap<String, FileType>,
    fallback: FileType,
}

impl ExtensionTable {
    /// A table with no mappings; every lookup yields `fallback`.
    pub fn empty(fallback: impl Into<FileType>) -> Self {
        Self { labels: HashMap::new(), fallback: fallback.into() }
    }

    /// The shipped table of well-known extensions.
    pub fn builtin() -> Self {
        let mut table = Self::empty(DEFAULT_FALLBACK);
        for (ext, label) in BUILTIN_LABELS {
            table.labels.insert((*ext).to_string(), FileType::new(*label));
        }
        table
    }

    pub fn from_config(config: &ClassifierConfig) -> InfraResult<Self> {
        config.validate()?;
        let mut table = if config.use_builtin { Self::builtin() } else { Self::empty(DEFAULT_FALLBACK) };
        table.fallback = FileType::new(config.fallback.as_str());
        for (key, label) in &config.mappings {
            table.labels.insert(normalize_key(key)?, FileType::new(label.as_str()));
        }
        Ok(table)
    }

    /// Adds or replaces a mapping. The key is matched case-insensitively.
    pub fn insert(&mut self, extension: &str, label: impl Into<FileType>) {
        self.labels.insert(extension.to_ascii_lowercase(), label.into());
    }

    #[must_use]
    pub fn with_mapping(mut self, extension: &str, label: impl Into<FileType>) -> Self {
        self.insert(extension, label);
        self
    }

    pub fn fallback(&self) -> &FileType {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TypeClassifier for ExtensionTable {
    fn classify(&self, extension: &str) -> FileType {
        self.labels
            .get(extension.to_ascii_lowercase().as_str())
            .unwrap_or(&self.fallback)
            .clone()
    }
}
