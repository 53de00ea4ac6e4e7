use tracing::{debug, info, warn};

use crate::backend::{BackendError, BackendKind, ExtractionBackend};
use crate::{ExtractionResult, PageText};

/// Runs extraction backends in fixed priority order until one produces text.
///
/// Backends are registered once at startup. A kind with no registered backend
/// behaves exactly like an unavailable one: the fallback chain skips it, and
/// the pinned path reports nothing extracted.
pub struct Dispatcher {
    backends: Vec<Box<dyn ExtractionBackend>>,
}

impl Dispatcher {
    pub fn new(backends: Vec<Box<dyn ExtractionBackend>>) -> Self {
        Self { backends }
    }

    fn backend_for(&self, kind: BackendKind) -> Option<&dyn ExtractionBackend> {
        self.backends
            .iter()
            .find(|backend| backend.kind() == kind)
            .map(|backend| backend.as_ref())
    }

    /// Run one backend, absorbing every failure into `None`.
    ///
    /// Nothing a backend does can abort the chain; failures surface only as
    /// "no result from this backend", logged here with their cause.
    fn attempt(&self, kind: BackendKind, data: &[u8]) -> Option<Vec<PageText>> {
        let Some(backend) = self.backend_for(kind) else {
            debug!(backend = %kind, "backend not registered in this build");
            return None;
        };
        match backend.extract_pages(data) {
            Ok(pages) => Some(pages),
            Err(BackendError::Unavailable(reason)) => {
                debug!(backend = %kind, %reason, "backend unavailable");
                None
            }
            Err(err) => {
                warn!(backend = %kind, error = %err, "extraction attempt failed");
                None
            }
        }
    }

    /// Extract using the first backend in priority order that yields text.
    ///
    /// Each attempt receives the full document bytes from offset 0. The last
    /// backend in [`BackendKind::FALLBACK_ORDER`] is terminal: whatever it
    /// produces, possibly nothing, is the answer. This never fails.
    pub fn extract(&self, data: &[u8]) -> ExtractionResult {
        let [preferred @ .., terminal] = BackendKind::FALLBACK_ORDER;

        for kind in preferred {
            if let Some(pages) = self.attempt(kind, data) {
                if !pages.is_empty() {
                    info!(backend = %kind, pages = pages.len(), "extracted text");
                    return ExtractionResult {
                        pages,
                        backend: kind,
                    };
                }
                debug!(backend = %kind, "backend found no text, falling back");
            }
        }

        let pages = self.attempt(terminal, data).unwrap_or_default();
        info!(backend = %terminal, pages = pages.len(), "extracted text via terminal fallback");
        ExtractionResult {
            pages,
            backend: terminal,
        }
    }

    /// Extract with exactly one backend, no fallback.
    ///
    /// Unavailability and failure both collapse to an empty page list; the
    /// caller cannot tell them apart, matching the pinned-method contract.
    pub fn extract_with(&self, kind: BackendKind, data: &[u8]) -> Vec<PageText> {
        self.attempt(kind, data).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    enum Behavior {
        Pages(Vec<&'static str>),
        Empty,
        Unavailable,
        Fails,
    }

    struct StubBackend {
        kind: BackendKind,
        behavior: Behavior,
        calls: Arc<AtomicUsize>,
    }

    impl StubBackend {
        fn boxed(
            kind: BackendKind,
            behavior: Behavior,
        ) -> (Box<dyn ExtractionBackend>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let backend = Box::new(StubBackend {
                kind,
                behavior,
                calls: calls.clone(),
            });
            (backend, calls)
        }
    }

    impl ExtractionBackend for StubBackend {
        fn kind(&self) -> BackendKind {
            self.kind
        }

        fn extract_pages(&self, _data: &[u8]) -> Result<Vec<PageText>, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                Behavior::Pages(texts) => Ok(texts
                    .iter()
                    .enumerate()
                    .filter_map(|(i, raw)| PageText::from_raw(i as u32 + 1, raw))
                    .collect()),
                Behavior::Empty => Ok(Vec::new()),
                Behavior::Unavailable => Err(BackendError::Unavailable("not installed".into())),
                Behavior::Fails => Err(BackendError::Extraction("corrupt stream".into())),
            }
        }
    }

    #[test]
    fn first_backend_wins() {
        let (a, a_calls) = StubBackend::boxed(BackendKind::Pdfium, Behavior::Pages(vec!["hi"]));
        let (b, b_calls) = StubBackend::boxed(BackendKind::Mupdf, Behavior::Pages(vec!["other"]));
        let (c, c_calls) = StubBackend::boxed(BackendKind::PdfExtract, Behavior::Empty);
        let dispatcher = Dispatcher::new(vec![a, b, c]);

        let result = dispatcher.extract(b"%PDF-");
        assert_eq!(result.backend, BackendKind::Pdfium);
        assert_eq!(result.pages[0].content, "hi");
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
        assert_eq!(c_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn falls_back_past_unavailable_backend() {
        let (a, a_calls) = StubBackend::boxed(BackendKind::Pdfium, Behavior::Unavailable);
        let (b, _) = StubBackend::boxed(BackendKind::Mupdf, Behavior::Pages(vec!["text"]));
        let (c, c_calls) = StubBackend::boxed(BackendKind::PdfExtract, Behavior::Empty);
        let dispatcher = Dispatcher::new(vec![a, b, c]);

        let result = dispatcher.extract(b"%PDF-");
        assert_eq!(result.backend, BackendKind::Mupdf);
        assert_eq!(result.pages.len(), 1);
        // The failed backend was tried once and never retried.
        assert_eq!(a_calls.load(Ordering::SeqCst), 1);
        assert_eq!(c_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn backend_failure_does_not_abort_the_chain() {
        let (a, _) = StubBackend::boxed(BackendKind::Pdfium, Behavior::Fails);
        let (b, _) = StubBackend::boxed(BackendKind::Mupdf, Behavior::Empty);
        let (c, _) = StubBackend::boxed(BackendKind::PdfExtract, Behavior::Pages(vec!["last"]));
        let dispatcher = Dispatcher::new(vec![a, b, c]);

        let result = dispatcher.extract(b"%PDF-");
        assert_eq!(result.backend, BackendKind::PdfExtract);
        assert_eq!(result.pages[0].content, "last");
    }

    #[test]
    fn terminal_result_is_returned_even_when_empty() {
        let (a, _) = StubBackend::boxed(BackendKind::Pdfium, Behavior::Empty);
        let (b, _) = StubBackend::boxed(BackendKind::Mupdf, Behavior::Unavailable);
        let (c, c_calls) = StubBackend::boxed(BackendKind::PdfExtract, Behavior::Empty);
        let dispatcher = Dispatcher::new(vec![a, b, c]);

        let result = dispatcher.extract(b"%PDF-");
        assert_eq!(result.backend, BackendKind::PdfExtract);
        assert!(result.pages.is_empty());
        assert_eq!(c_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_terminal_backend_still_answers() {
        let (a, _) = StubBackend::boxed(BackendKind::Pdfium, Behavior::Empty);
        let dispatcher = Dispatcher::new(vec![a]);

        let result = dispatcher.extract(b"%PDF-");
        assert_eq!(result.backend, BackendKind::PdfExtract);
        assert!(result.pages.is_empty());
    }

    #[test]
    fn pinned_method_never_cascades() {
        let (a, _) = StubBackend::boxed(BackendKind::Pdfium, Behavior::Empty);
        let (b, b_calls) = StubBackend::boxed(BackendKind::Mupdf, Behavior::Pages(vec!["text"]));
        let (c, _) = StubBackend::boxed(BackendKind::PdfExtract, Behavior::Pages(vec!["text"]));
        let dispatcher = Dispatcher::new(vec![a, b, c]);

        let pages = dispatcher.extract_with(BackendKind::Pdfium, b"%PDF-");
        assert!(pages.is_empty());
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn pinned_method_runs_only_that_backend() {
        let (a, a_calls) = StubBackend::boxed(BackendKind::Pdfium, Behavior::Pages(vec!["a"]));
        let (b, _) = StubBackend::boxed(BackendKind::Mupdf, Behavior::Pages(vec!["b"]));
        let dispatcher = Dispatcher::new(vec![a, b]);

        let pages = dispatcher.extract_with(BackendKind::Mupdf, b"%PDF-");
        assert_eq!(pages[0].content, "b");
        assert_eq!(a_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn pinned_unregistered_backend_yields_empty() {
        let (a, _) = StubBackend::boxed(BackendKind::Pdfium, Behavior::Pages(vec!["a"]));
        let dispatcher = Dispatcher::new(vec![a]);

        assert!(
            dispatcher
                .extract_with(BackendKind::Mupdf, b"%PDF-")
                .is_empty()
        );
    }
}
