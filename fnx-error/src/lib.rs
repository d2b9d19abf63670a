//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, along with the [`error_kind!`] macro used to declare new error kinds.

use ariadne::{Color, Label, Report, ReportKind};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
///
/// Errors raised against a synthesized expression tree (one not produced by parsing) carry no
/// spans; their reports contain a message and help text only.
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

    /// Creates a new error with no associated source region.
    pub fn spanless(kind: impl ErrorKind + 'static) -> Self {
        Self { spans: Vec::new(), kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

/// Builds a labeled [`Report`] from the parts assembled by [`error_kind!`].
///
/// Labels are paired with the error's spans in order; label strings beyond the number of spans
/// are dropped, so a kind raised without spans still produces a readable report.
pub fn build_report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: String,
    labels: Vec<String>,
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let offset = spans.first().map_or(0, |span| span.start);
    let mut builder = Report::build(ReportKind::Error, src_id, offset)
        .with_message(message)
        .with_labels(
            labels
                .into_iter()
                .zip(spans.iter().cloned())
                .map(|(text, span)| {
                    let mut label = Label::new((src_id, span)).with_color(EXPR);
                    if !text.is_empty() {
                        label = label.with_message(text);
                    }
                    label
                })
                .collect::<Vec<_>>(),
        );

    if let Some(help) = help {
        builder.set_help(help);
    }

    builder.finish()
}

/// Declares an error kind struct and implements [`ErrorKind`] for it.
///
/// The `message`, `labels`, and optional `help` expressions may refer to the struct's fields by
/// name; the macro destructures `self` before evaluating them.
///
/// ```
/// use fnx_error::error_kind;
///
/// error_kind! {
///     /// The variable is undefined.
///     pub struct UndefinedVariable {
///         /// The name of the variable that was undefined.
///         pub name: String,
///     }
///     message = format!("`{}` is not defined", name),
///     labels = ["this variable"],
/// }
/// ```
#[macro_export]
macro_rules! error_kind {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident;
        message = $message:expr,
        labels = [$($label:expr),* $(,)?]
        $(, help = $help:expr)? $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name;

        $crate::error_kind!(@impl $name, (), $message, [$($label),*] $(, $help)?);
    };
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $($(#[$field_attr:meta])* $field_vis:vis $field:ident: $ty:ty,)*
        }
        message = $message:expr,
        labels = [$($label:expr),* $(,)?]
        $(, help = $help:expr)? $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $($(#[$field_attr])* $field_vis $field: $ty,)*
        }

        $crate::error_kind!(@impl $name, ($($field),*), $message, [$($label),*] $(, $help)?);
    };
    (@impl $name:ident, ($($field:ident),*), $message:expr, [$($label:expr),*] $(, $help:expr)?) => {
        impl $crate::ErrorKind for $name {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ::ariadne::Report<'a, (&'a str, ::std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                let $name { $($field),* } = self;
                $crate::build_report(
                    src_id,
                    spans,
                    ::std::string::ToString::to_string(&$message),
                    ::std::vec![$(::std::string::ToString::to_string(&$label)),*],
                    $crate::error_kind!(@help $($help)?),
                )
            }
        }
    };
    (@help) => { ::std::option::Option::None };
    (@help $help:expr) => { ::std::option::Option::Some(::std::string::ToString::to_string(&$help)) };
}
