//! HTML document mutation.
//!
//! The document is run through a strict streaming rewriter. Markup outside
//! the insertion point is emitted untouched, so a successful rewrite differs
//! from the input only by the appended fragment.

use axum::body::Bytes;
use lol_html::{
    doctype, element, errors::RewritingError, html_content::ContentType, HtmlRewriter, Settings,
};

use crate::rewrite::RewriteError;

/// Outcome of a best-effort rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewritten {
    /// The fragment was appended to `<body>`.
    Injected(Bytes),
    /// The document could not be mutated; the original bytes are returned.
    Passthrough(Bytes),
}

impl Rewritten {
    /// Whether the fragment made it into the document.
    pub fn is_injected(&self) -> bool {
        matches!(self, Rewritten::Injected(_))
    }

    /// The bytes to send, mutated or not.
    pub fn into_bytes(self) -> Bytes {
        match self {
            Rewritten::Injected(bytes) | Rewritten::Passthrough(bytes) => bytes,
        }
    }
}

/// What the rewriter saw while streaming the document.
#[derive(Debug, Default)]
struct Scan {
    body: bool,
    html: bool,
    doctype: bool,
}

/// Append `fragment` as the last child of the body of `document`.
///
/// An explicit `<body>...</body>` gets the fragment right before its end tag.
/// When the body is never closed, or is only implied by an `<html>` root or a
/// doctype, the fragment goes at the end of the document, which an HTML
/// parser places inside the body. Anything else, and anything that fails to
/// parse, is passed through. Only a failure while producing the new document
/// is an error.
pub fn inject(document: &Bytes, fragment: &str) -> Result<Rewritten, RewriteError> {
    let mut output = Vec::with_capacity(document.len() + fragment.len());
    let mut scan = Scan::default();

    let result = {
        let mut rewriter = HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![
                    element!("body", |el| {
                        if !scan.body {
                            el.append(fragment, ContentType::Html);
                            scan.body = true;
                        }
                        Ok(())
                    }),
                    element!("html", |_| {
                        scan.html = true;
                        Ok(())
                    }),
                ],
                document_content_handlers: vec![doctype!(|_| {
                    scan.doctype = true;
                    Ok(())
                })],
                strict: true,
                ..Settings::default()
            },
            |chunk: &[u8]| output.extend_from_slice(chunk),
        );
        rewriter.write(document).and_then(|()| rewriter.end())
    };

    match result {
        // Unmodified markup is emitted verbatim, so growth means the
        // fragment was written before `</body>`.
        Ok(()) if scan.body && output.len() > document.len() => {
            Ok(Rewritten::Injected(Bytes::from(output)))
        }
        Ok(()) if scan.body || scan.html || scan.doctype => {
            tracing::debug!(
                explicit_body = scan.body,
                "Body is never closed, appending at document end"
            );
            let mut output = Vec::with_capacity(document.len() + fragment.len());
            output.extend_from_slice(document);
            output.extend_from_slice(fragment.as_bytes());
            Ok(Rewritten::Injected(Bytes::from(output)))
        }
        Ok(()) => {
            tracing::debug!(bytes = document.len(), "Not an HTML document, passing response through");
            Ok(Rewritten::Passthrough(document.clone()))
        }
        Err(RewritingError::ContentHandlerError(e)) => {
            tracing::error!(error = %e, "Unable to serialize modified document");
            Err(RewriteError::Serialize(e.to_string()))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Unable to parse response as HTML, passing through");
            Ok(Rewritten::Passthrough(document.clone()))
        }
    }
}
