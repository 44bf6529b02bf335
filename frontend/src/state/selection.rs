//! File selection for the upload form.
//!
//! Holds the PDFs picked through the file input or dropped on the
//! drop zone, and validates the count before any request is built.

use crate::config::{MAX_FILES, MIN_FILES, MSG_FILE_COUNT, PDF_MIME_TYPE};
use crate::{AppError, AppResult};

/// A file handle the selection can inspect.
pub trait PendingFile: Clone {
    fn name(&self) -> String;
    fn mime_type(&self) -> String;

    fn is_pdf(&self) -> bool {
        self.mime_type() == PDF_MIME_TYPE
    }
}

impl PendingFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Currently selected reports, in pick order.
#[derive(Clone, Debug)]
pub struct FileSelection<F> {
    files: Vec<F>,
}

impl<F> Default for FileSelection<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F: PendingFile> FileSelection<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with the PDFs among `files`.
    ///
    /// Used by both the picker and the drop zone. A batch without any
    /// PDF leaves the previous selection untouched.
    pub fn replace_with(&mut self, files: impl IntoIterator<Item = F>) -> usize {
        let pdfs: Vec<F> = files.into_iter().filter(PendingFile::is_pdf).collect();
        if pdfs.is_empty() {
            log::warn!("No PDF in the provided files, selection unchanged");
        } else {
            self.files = pdfs;
        }
        self.files.len()
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(PendingFile::name).collect()
    }

    /// Accept between `MIN_FILES` and `MAX_FILES` files inclusive.
    pub fn validate(&self) -> AppResult<()> {
        validate_file_count(self.files.len())
    }
}

pub fn validate_file_count(count: usize) -> AppResult<()> {
    if (MIN_FILES..=MAX_FILES).contains(&count) {
        Ok(())
    } else {
        Err(AppError::Validation(MSG_FILE_COUNT.to_string()))
    }
}

/// Drag events the drop zone listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragPhase {
    /// Highlight flag after this event.
    pub fn highlight(self) -> bool {
        matches!(self, DragPhase::Enter | DragPhase::Over)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) struct FakeFile {
        pub name: &'static str,
        pub mime: &'static str,
    }

    impl PendingFile for FakeFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
    }

    pub(crate) fn pdf(name: &'static str) -> FakeFile {
        FakeFile { name, mime: PDF_MIME_TYPE }
    }

    pub(crate) fn selection_of(count: usize) -> FileSelection<FakeFile> {
        let mut selection = FileSelection::new();
        selection.replace_with((0..count).map(|_| pdf("referto.pdf")));
        selection
    }

    #[test]
    fn test_count_bounds() {
        assert!(validate_file_count(0).is_err());
        assert!(validate_file_count(1).is_ok());
        assert!(validate_file_count(5).is_ok());
        assert_eq!(
            validate_file_count(6),
            Err(AppError::Validation(MSG_FILE_COUNT.to_string()))
        );
    }

    #[test]
    fn test_drop_discards_non_pdf() {
        let mut selection = FileSelection::new();
        selection.replace_with(vec![pdf("old.pdf")]);

        let count = selection.replace_with(vec![
            FakeFile { name: "scan.png", mime: "image/png" },
            pdf("rx.pdf"),
            pdf("eco.pdf"),
        ]);

        // Replaced, not merged with the earlier pick
        assert_eq!(count, 2);
        assert_eq!(selection.names(), vec!["rx.pdf", "eco.pdf"]);
    }

    #[test]
    fn test_drop_without_pdf_keeps_selection() {
        let mut selection = FileSelection::new();
        selection.replace_with(vec![pdf("rx.pdf")]);
        selection.replace_with(vec![FakeFile { name: "notes.txt", mime: "text/plain" }]);

        assert_eq!(selection.names(), vec!["rx.pdf"]);
    }

    #[test]
    fn test_drag_highlight() {
        assert!(DragPhase::Enter.highlight());
        assert!(DragPhase::Over.highlight());
        assert!(!DragPhase::Leave.highlight());
        assert!(!DragPhase::Drop.highlight());
    }
}
