// crates/ports/src/classifier.rs
use filedesc_shared_kernel::FileType;

/// Port for labelling a file by its extension.
///
/// Implementations must be total: every extension, including the empty one,
/// maps to some label.
pub trait TypeClassifier: Send + Sync {
    fn classify(&self, extension: &str) -> FileType;
}

impl<F> TypeClassifier for F
where
    F: Fn(&str) -> FileType + Send + Sync,
{
    fn classify(&self, extension: &str) -> FileType {
        self(extension)
    }
}
