//! Full diagnostic rendering of a raised outcome.

use crate::convert::Converter;
use crate::types::alloc_type::{Cow, String};
use crate::types::{BoxedError, CauseVec, Raised};
use core::error::Error;
use core::fmt::{Display, Write};

/// When a backtrace is appended to a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BacktraceMode {
    /// Never capture.
    Disabled,
    /// Capture when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` enables it.
    #[default]
    Env,
    /// Always capture, ignoring the environment.
    Force,
}

/// Configuration for the diagnostic projection of a [`Raised`] outcome.
///
/// The rendered text is the descriptive text on the first line, then one line
/// per cause in the error's `source()` chain, then the backtrace captured at
/// conversion time. Backtraces need the `std` feature.
///
/// The backtrace is taken when the converter runs, inside the absorption call.
/// For a caught panic it therefore shows the absorbing frames, not the frame
/// that panicked; the panic hook is what reports the panic site.
///
/// `DiagnosticFormat` is itself a [`Converter`]; use [`converter`](Self::converter)
/// where a closure is expected.
///
/// # Examples
///
/// ```
/// use failable::convert::DiagnosticFormat;
/// use failable::Raised;
///
/// let parse_error = "x".parse::<i32>().unwrap_err();
/// let text = DiagnosticFormat::without_backtrace().render(&Raised::Error(parse_error));
/// assert_eq!(text, "invalid digit found in string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticFormat {
    pub cause_prefix: Cow<'static, str>,
    pub show_causes: bool,
    pub backtrace: BacktraceMode,
}

impl Default for DiagnosticFormat {
    fn default() -> Self {
        Self { cause_prefix: Cow::Borrowed("Caused by: "), show_causes: true, backtrace: BacktraceMode::Env }
    }
}

impl DiagnosticFormat {
    #[inline]
    pub fn without_backtrace() -> Self {
        Self { backtrace: BacktraceMode::Disabled, ..Default::default() }
    }

    #[inline]
    pub fn with_forced_backtrace() -> Self {
        Self { backtrace: BacktraceMode::Force, ..Default::default() }
    }

    /// Renders `raised`, following the source chain of a raised error.
    pub fn render<E>(&self, raised: &Raised<E>) -> String
    where
        E: Error + 'static,
    {
        self.render_parts(raised, Error::source(raised))
    }

    /// Renders a raised [`BoxedError`].
    pub fn render_boxed(&self, raised: &Raised<BoxedError>) -> String {
        self.render_parts(raised, raised.error().and_then(|error| error.source()))
    }

    /// Returns a closure that renders with this format.
    ///
    /// # Examples
    ///
    /// ```
    /// use failable::convert::DiagnosticFormat;
    /// use failable::Failable;
    /// use std::num::ParseIntError;
    ///
    /// let format = DiagnosticFormat::without_backtrace();
    /// let outcome = Failable::<i32, String>::absorb_with(
    ///     || "12a".parse::<i32>().map(Some),
    ///     format.converter::<ParseIntError>(),
    /// );
    /// assert_eq!(outcome.get_failure(), "invalid digit found in string");
    /// ```
    pub fn converter<E>(&self) -> impl Fn(Raised<E>) -> String + '_
    where
        E: Error + 'static,
    {
        move |raised: Raised<E>| self.render(&raised)
    }

    fn render_parts(&self, head: &dyn Display, source: Option<&(dyn Error + 'static)>) -> String {
        let mut text = String::new();
        let _ = write!(text, "{}", head);

        if self.show_causes {
            for cause in cause_chain(source) {
                let _ = write!(text, "\n{}{}", self.cause_prefix, cause);
            }
        }

        #[cfg(feature = "std")]
        {
            if let Some(backtrace) = self.capture_backtrace() {
                let _ = write!(text, "\nstack backtrace:\n{}", backtrace);
            }
        }

        text
    }

    #[cfg(feature = "std")]
    fn capture_backtrace(&self) -> Option<std::backtrace::Backtrace> {
        use std::backtrace::{Backtrace, BacktraceStatus};

        let backtrace = match self.backtrace {
            BacktraceMode::Disabled => return None,
            BacktraceMode::Env => Backtrace::capture(),
            BacktraceMode::Force => Backtrace::force_capture(),
        };
        (backtrace.status() == BacktraceStatus::Captured).then_some(backtrace)
    }
}

impl<E> Converter<E, String> for DiagnosticFormat
where
    E: Error + 'static,
{
    #[inline]
    fn convert(&self, raised: Raised<E>) -> String {
        self.render(&raised)
    }
}

/// Collects the `source()` chain starting at `first`, stopping before any cause
/// that was already visited so a cyclic chain renders each cause once.
fn cause_chain<'a>(first: Option<&'a (dyn Error + 'static)>) -> CauseVec<&'a (dyn Error + 'static)> {
    let mut causes: CauseVec<&(dyn Error + 'static)> = CauseVec::new();
    for cause in core::iter::successors(first, |&cause| cause.source()) {
        let seen = causes
            .iter()
            .any(|&visited| core::ptr::addr_eq(visited as *const dyn Error, cause as *const dyn Error));
        if seen {
            break;
        }
        causes.push(cause);
    }
    causes
}
