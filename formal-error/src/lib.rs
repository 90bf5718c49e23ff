//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the span-carrying [`Error`] type that wraps them.

// lets `#[derive(ErrorKind)]` refer to this crate by name from inside its own tests
extern crate self as formal_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error as an [`Any`], so that callers can inspect the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing this error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns true if the kind of this error is `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<T>()
    }

    /// Returns the kind of this error if it is a `T`.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, highlighting the spans within `input`.
    ///
    /// The `ariadne` crate's [`Report`] type does not implement `Display`, so it can only be
    /// printed through its own `eprint` method.
    pub fn report_to_stderr(&self, input: &str) {
        let report = self.build_report("input");
        if report.eprint(("input", Source::from(input))).is_err() {
            eprintln!("error: {}", self);
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::Fmt;
    use formal_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("unknown variable `{}`", self.name),
        labels = ["this variable", ""],
        help = format!("try {}", "x".fg(EXPR)),
    )]
    struct UnknownName {
        name: String,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "nothing to see", labels = ["here"])]
    struct Unit;

    /// Renders the report of the error to a plain string.
    fn render(err: &Error, src: &str) -> String {
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(src)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn message_and_display() {
        let err = Error::new(vec![0..3], UnknownName { name: "foo".to_string() });
        assert_eq!(err.kind.message(), "unknown variable `foo`");
        assert_eq!(err.to_string(), "unknown variable `foo`");
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1], Unit);
        assert!(err.is::<Unit>());
        assert!(!err.is::<UnknownName>());
        assert!(err.downcast_ref::<Unit>().is_some());
    }

    #[test]
    fn report_contains_labels_and_help() {
        let src = "foo + bar";
        let err = Error::new(vec![0..3, 6..9], UnknownName { name: "foo".to_string() });
        let out = render(&err, src);
        assert!(out.contains("unknown variable `foo`"));
        assert!(out.contains("this variable"));
        assert!(out.contains("try x"));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::new(Vec::new(), Unit);
        let out = render(&err, "x");
        assert!(out.contains("nothing to see"));
    }
}
