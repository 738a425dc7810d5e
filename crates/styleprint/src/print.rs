//! Writing styled text to output streams.
//!
//! [`Printer`] joins its inputs, formats them with a [`StyleResolver`] and
//! writes the result plus a line ending to any [`io::Write`]. The free
//! functions [`sformat`] and [`sprint`] do the same with the built-in
//! registries.

use std::fmt::Display;
use std::io::{self, Write};

use crate::style::{StyleOptions, StyleResolver, StyleWarning};

/// What a [`Printer`] does with resolution warnings besides returning them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WarningPolicy {
    /// Emit each warning as a `tracing` warn event.
    #[default]
    Log,
    /// Only return them.
    Ignore,
}

impl WarningPolicy {
    pub(crate) fn report(self, warnings: &[StyleWarning]) {
        if self == WarningPolicy::Ignore {
            return;
        }
        for warning in warnings {
            tracing::warn!(name = warning.name(), "{}", warning);
        }
    }
}

/// Prints styled lines with `print`-like separator and line-end handling.
///
/// # Example
///
/// ```rust
/// use styleprint::{Printer, StyleOptions, StyleResolver};
///
/// let resolver = StyleResolver::default();
/// let mut out = Vec::new();
///
/// Printer::new()
///     .separator(", ")
///     .line_end("!\n")
///     .print(&resolver, ["Hello", "world"], &mut out, &StyleOptions::new().style_type("okay"))
///     .unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "\x1b[0;92;40mHello, world\x1b[0m!\n");
/// ```
#[derive(Debug, Clone)]
pub struct Printer {
    separator: String,
    line_end: String,
    flush: bool,
    warnings: WarningPolicy,
}

impl Printer {
    /// Creates a printer separating with a space and ending lines with `\n`.
    pub fn new() -> Self {
        Self {
            separator: " ".to_string(),
            line_end: "\n".to_string(),
            flush: false,
            warnings: WarningPolicy::Log,
        }
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the text written after the styled span. It is not styled.
    pub fn line_end(mut self, line_end: impl Into<String>) -> Self {
        self.line_end = line_end.into();
        self
    }

    /// Flush the stream after every print.
    pub fn flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }

    pub fn warnings(mut self, policy: WarningPolicy) -> Self {
        self.warnings = policy;
        self
    }

    /// Joins `texts`, styles the result and writes it to `stream`.
    ///
    /// Resolution warnings are reported per the printer's [`WarningPolicy`]
    /// and returned.
    ///
    /// # Errors
    ///
    /// Returns any error raised while writing to or flushing `stream`.
    pub fn print<I, D, W>(
        &self,
        resolver: &StyleResolver,
        texts: I,
        stream: &mut W,
        options: &StyleOptions,
    ) -> io::Result<Vec<StyleWarning>>
    where
        I: IntoIterator<Item = D>,
        D: Display,
        W: Write + ?Sized,
    {
        let joined = texts
            .into_iter()
            .map(|text| text.to_string())
            .collect::<Vec<_>>()
            .join(&self.separator);

        let (formatted, warnings) = resolver.format(&joined, options).into_parts();
        self.warnings.report(&warnings);

        stream.write_all(formatted.as_bytes())?;
        stream.write_all(self.line_end.as_bytes())?;
        if self.flush {
            stream.flush()?;
        }
        Ok(warnings)
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats `text` with the built-in registries, logging any warnings.
///
/// ```rust
/// use styleprint::{sformat, StyleOptions};
///
/// let s = sformat("Hello world!", &StyleOptions::new().color("red").font("italic"));
/// assert_eq!(s, "\x1b[3;91;40mHello world!\x1b[0m");
/// ```
pub fn sformat(text: &str, options: &StyleOptions) -> String {
    let (formatted, warnings) = StyleResolver::default().format(text, options).into_parts();
    WarningPolicy::Log.report(&warnings);
    formatted
}

/// Prints `text` to stdout with the built-in registries, followed by `end`.
///
/// Use a [`Printer`] for a custom separator, stream or flushing.
///
/// # Errors
///
/// Returns any error raised while writing to stdout.
pub fn sprint(text: &str, end: &str, options: &StyleOptions) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    Printer::new()
        .line_end(end)
        .print(&StyleResolver::default(), [text], &mut lock, options)
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    fn printed(printer: &Printer, texts: &[&str], options: &StyleOptions) -> String {
        let mut out = Vec::new();
        printer
            .print(&StyleResolver::default(), texts, &mut out, options)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_defaults() {
        let out = printed(&Printer::new(), &["a", "b", "c"], &StyleOptions::new());
        assert_eq!(out, "\x1b[0;38;40ma b c\x1b[0m\n");
    }

    #[test]
    fn test_print_custom_separator_and_end() {
        let printer = Printer::new().separator("-").line_end("");
        let out = printed(&printer, &["x", "y"], &StyleOptions::new().color("red"));
        assert_eq!(out, "\x1b[0;91;40mx-y\x1b[0m");
    }

    #[test]
    fn test_print_no_texts() {
        let out = printed(&Printer::new(), &[], &StyleOptions::new());
        assert_eq!(out, "\x1b[0;38;40m\x1b[0m\n");
    }

    #[test]
    fn test_print_mixed_display_values() {
        let mut out = Vec::new();
        let values: Vec<Box<dyn Display>> = vec![Box::new("count"), Box::new(42), Box::new(1.5)];
        Printer::new()
            .print(&StyleResolver::default(), values, &mut out, &StyleOptions::new())
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[0;38;40mcount 42 1.5\x1b[0m\n");
    }

    #[test]
    fn test_print_returns_warnings() {
        let mut out = Vec::new();
        let warnings = Printer::new()
            .warnings(WarningPolicy::Ignore)
            .print(
                &StyleResolver::default(),
                ["oops"],
                &mut out,
                &StyleOptions::new().style_type("shout"),
            )
            .unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(!out.is_empty());
    }

    struct FlushTracker {
        data: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushTracker {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_print_flush() {
        let resolver = StyleResolver::default();
        let mut stream = FlushTracker {
            data: Vec::new(),
            flushes: 0,
        };

        Printer::new()
            .print(&resolver, ["a"], &mut stream, &StyleOptions::new())
            .unwrap();
        assert_eq!(stream.flushes, 0);

        Printer::new()
            .flush(true)
            .print(&resolver, ["b"], &mut stream, &StyleOptions::new())
            .unwrap();
        assert_eq!(stream.flushes, 1);
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_print_propagates_write_errors() {
        let err = Printer::new()
            .print(&StyleResolver::default(), ["a"], &mut Broken, &StyleOptions::new())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_sformat_builtin() {
        assert_eq!(
            sformat("x", &StyleOptions::new().style_type("warning")),
            "\x1b[1;93;40mx\x1b[0m"
        );
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn logged_while_printing(policy: WarningPolicy, options: &StyleOptions) -> Vec<String> {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut out = Vec::new();
            Printer::new()
                .warnings(policy)
                .print(&StyleResolver::default(), ["x"], &mut out, options)
                .unwrap();
        });
        logs.lines()
    }

    #[test]
    fn test_log_policy_emits_one_event_per_warning() {
        let lines = logged_while_printing(WarningPolicy::Log, &StyleOptions::new().color("teal"));
        assert_eq!(lines.len(), 1, "{:?}", lines);
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].contains("unknown color 'teal'"));
    }

    #[test]
    fn test_log_policy_reports_each_unknown_name() {
        let opts = StyleOptions::new().style_type("shout").font("heavy");
        let lines = logged_while_printing(WarningPolicy::Log, &opts);
        assert_eq!(lines.len(), 2, "{:?}", lines);
        assert!(lines[0].contains("unknown type 'shout' ignored"));
        assert!(lines[1].contains("unknown font 'heavy'"));
    }

    #[test]
    fn test_ignore_policy_emits_nothing() {
        let opts = StyleOptions::new().color("teal");
        let lines = logged_while_printing(WarningPolicy::Ignore, &opts);
        assert!(lines.is_empty(), "{:?}", lines);
    }

    #[test]
    fn test_log_policy_silent_without_warnings() {
        let lines = logged_while_printing(WarningPolicy::Log, &StyleOptions::new().color("red"));
        assert!(lines.is_empty(), "{:?}", lines);
    }

    #[test]
    fn test_sprint_custom_end() {
        assert!(sprint("", "", &StyleOptions::new().style_type("okay")).is_ok());
    }
}
