//! Transparent logging decorators.
//!
//! A [`Log`] decorator wraps a function so that every call emits one
//! [`LogRecord`] holding a message, the argument and the result, and then
//! returns the result untouched.
//!
//! There are two ways to build one:
//!
//! - [`log_with_tag`] synthesizes a [`TagLogger`], which emits `tracing`
//!   events at INFO level carrying the tag
//! - [`log_with_logger`] uses any [`Logger`], including plain closures
//!   taking a `&LogRecord`
//!
//! The crate never installs a `tracing` subscriber; what happens to the
//! events is up to the application.
//!
//! # Examples
//!
//! ```
//! use combinars::log::{log_with_logger, LogRecord};
//! use std::cell::RefCell;
//!
//! let lines = RefCell::new(Vec::new());
//! let logger = log_with_logger(|record: &LogRecord<'_>| lines.borrow_mut().push(record.to_string()));
//!
//! let hello = logger.wrap("greeting", |name: &str| format!("hello {name}"));
//!
//! assert_eq!(hello("Janelle"), "hello Janelle");
//! assert_eq!(*lines.borrow(), vec![r#"greeting input "Janelle" output "hello Janelle""#]);
//! ```

use std::fmt;
use std::fmt::Debug;
use std::sync::Arc;

/// One call observed by a [`Log`] decorator.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    /// The message given to [`Log::wrap`].
    pub message: &'a str,
    /// The argument the wrapped function was called with.
    pub input: &'a dyn Debug,
    /// The value the wrapped function returned.
    pub output: &'a dyn Debug,
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} input {:?} output {:?}",
            self.message, self.input, self.output
        )
    }
}

/// A sink for [`LogRecord`]s.
///
/// Implemented for every `Fn(&LogRecord<'_>)`.
pub trait Logger {
    /// Emits one record.
    fn log(&self, record: &LogRecord<'_>);
}

impl<F> Logger for F
where
    F: Fn(&LogRecord<'_>),
{
    fn log(&self, record: &LogRecord<'_>) {
        self(record);
    }
}

/// The default logger, bound to a tag.
///
/// Each record becomes a `tracing` INFO event whose message is the record's
/// message, with `tag`, `input` and `output` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLogger {
    tag: String,
}

impl TagLogger {
    /// Creates a logger bound to `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// The tag attached to every event.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Logger for TagLogger {
    fn log(&self, record: &LogRecord<'_>) {
        tracing::info!(
            tag = %self.tag,
            input = ?record.input,
            output = ?record.output,
            "{}",
            record.message
        );
    }
}

/// A decorator that wraps functions with logging.
///
/// Cloning is cheap: the logger is shared.
pub struct Log<L> {
    logger: Arc<L>,
}

impl<L> Clone for Log<L> {
    fn clone(&self) -> Self {
        Self {
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<L: Debug> Debug for Log<L> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Log")
            .field("logger", &self.logger)
            .finish()
    }
}

/// Builds a decorator that reports to `logger`.
pub fn log_with_logger<L: Logger>(logger: L) -> Log<L> {
    Log {
        logger: Arc::new(logger),
    }
}

/// Builds a decorator that reports through `tracing`, tagged with `tag`.
///
/// # Examples
///
/// ```
/// use combinars::log::log_with_tag;
///
/// let debug = log_with_tag("my:tag");
/// let hello = debug.wrap("hello", |name: &str| format!("hello {name}"));
///
/// // Emits an INFO event: hello tag=my:tag input="Janelle" output="hello Janelle"
/// assert_eq!(hello("Janelle"), "hello Janelle");
/// ```
pub fn log_with_tag(tag: impl Into<String>) -> Log<TagLogger> {
    log_with_logger(TagLogger::new(tag))
}

impl<L: Logger> Log<L> {
    /// The logger records are sent to.
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Wraps `function` so that each call is logged under `message`.
    ///
    /// The wrapped function runs first; exactly one record is emitted after
    /// it returns, and its result is returned unchanged. If `function`
    /// panics, nothing is logged.
    pub fn wrap<A, R, F>(&self, message: &str, function: F) -> impl Fn(&A) -> R + use<L, A, R, F>
    where
        A: Debug + ?Sized,
        R: Debug,
        F: Fn(&A) -> R,
    {
        let logger = Arc::clone(&self.logger);
        let message = message.to_string();
        move |arguments| {
            let result = function(arguments);
            logger.log(&LogRecord {
                message: &message,
                input: &arguments,
                output: &result,
            });
            result
        }
    }
}
