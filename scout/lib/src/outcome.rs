//! Classified result of a lookup.

use serde_json::Value;

/// How a successful body is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Indented, multi-line JSON
    #[default]
    Pretty,
    /// Single-line JSON
    Compact,
}

/// What the endpoint answered.
///
/// Only status 200 counts as success. Every other status, including other
/// 2xx codes, is collapsed into [`QueryOutcome::Failed`] and its body is
/// never read.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Status 200 with the parsed JSON body.
    Success(Value),
    /// Any other status code.
    Failed { status: u16 },
}

impl QueryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The status code the outcome was classified from.
    pub fn status(&self) -> u16 {
        match self {
            Self::Success(_) => 200,
            Self::Failed { status } => *status,
        }
    }

    /// The parsed body of a successful lookup.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failed { .. } => None,
        }
    }

    /// Text written to the output stream for this outcome.
    ///
    /// ## Examples
    ///
    /// ```
    /// use scout_lib::{QueryOutcome, RenderStyle};
    ///
    /// let failed = QueryOutcome::Failed { status: 429 };
    /// assert_eq!(
    ///     failed.render(RenderStyle::Pretty),
    ///     "Request failed with status code: 429"
    /// );
    ///
    /// let ok = QueryOutcome::Success(serde_json::json!({"name": "Ada"}));
    /// assert_eq!(ok.render(RenderStyle::Compact), r#"{"name":"Ada"}"#);
    /// ```
    pub fn render(&self, style: RenderStyle) -> String {
        match (self, style) {
            (Self::Success(value), RenderStyle::Pretty) => format!("{value:#}"),
            (Self::Success(value), RenderStyle::Compact) => value.to_string(),
            (Self::Failed { status }, _) => failure_message(*status),
        }
    }
}

/// The line reported for a non-200 response.
pub fn failure_message(status: u16) -> String {
    format!("Request failed with status code: {status}")
}
