use error_stack::{Context, Report};
use tracing_error::SpanTrace;

use crate::types;

mod impls;

/// Error carried out of a route handler.
///
/// The wire-level [`types::Error`] decides the response status and
/// body; the report and span trace stay on the server side of the
/// wire and only show up in the log.
pub struct Error {
    error_type: types::Error,
    report: Report<Box<dyn Context>>,
    trace: SpanTrace,
}

impl Error {
    #[must_use]
    pub fn from_context(error_type: types::Error, context: impl Context) -> Self {
        Self {
            error_type,
            report: to_any_report(context),
            trace: SpanTrace::capture(),
        }
    }

    #[must_use]
    pub fn as_type(&self) -> &types::Error {
        &self.error_type
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Error")
            .field("type", &self.error_type)
            .field("report", &self.report)
            .field("trace", &self.trace)
            .finish()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ", &self.error_type)?;
        writeln!(f, "{:?}", self.report)?;
        std::fmt::Display::fmt(&self.trace, f)
    }
}

fn to_any_report(context: impl Context) -> Report<Box<dyn Context>> {
    unsafe { std::mem::transmute::<_, Report<Box<dyn Context>>>(Report::new(context)) }
}
