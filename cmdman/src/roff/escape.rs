//! Roff text escaping utilities.
//!
//! Provides functions for embedding user-authored text in roff output. Text
//! whose first non-whitespace character is a period is taken to be
//! hand-written markup and passes through the conversions untouched.

/// Returns `true` when `text` already looks like roff markup.
///
/// # Examples
///
/// ```
/// use cmdman::roff::escape::is_raw_markup;
///
/// assert!(is_raw_markup("  .B bold"));
/// assert!(!is_raw_markup("plain text"));
/// ```
#[must_use]
pub fn is_raw_markup(text: &str) -> bool {
    text.trim_start().starts_with('.')
}

/// Doubles every backslash so the formatter prints it literally.
///
/// # Examples
///
/// ```
/// use cmdman::roff::escape::backslashify;
///
/// assert_eq!(backslashify("C:\\dir"), "C:\\\\dir");
/// ```
#[must_use]
pub fn backslashify(text: &str) -> String {
    text.replace('\\', "\\\\")
}

/// Rewrites every hyphen as the roff minus-sign escape.
///
/// # Examples
///
/// ```
/// use cmdman::roff::escape::dashify;
///
/// assert_eq!(dashify("--verbose"), "\\-\\-verbose");
/// ```
#[must_use]
pub fn dashify(text: &str) -> String {
    text.replace('-', "\\-")
}

/// Escapes text for use inside a double-quoted macro argument such as the
/// fields of `.TH`.
///
/// Backslashes are doubled, double quotes become the `\(dq` glyph and line
/// breaks collapse to spaces so the argument stays on the macro line.
///
/// # Examples
///
/// ```
/// use cmdman::roff::escape::quote_arg;
///
/// assert_eq!(quote_arg("say \"hi\""), "say \\(dqhi\\(dq");
/// assert_eq!(quote_arg("a\\b"), "a\\\\b");
/// ```
#[must_use]
pub fn quote_arg(text: &str) -> String {
    backslashify(text)
        .replace('"', "\\(dq")
        .replace(['\r', '\n'], " ")
}

fn escape_base(text: &str) -> String {
    dashify(&backslashify(text))
}

fn starts_control_line(line: &str) -> bool {
    line.starts_with('.') || line.starts_with('\'')
}

/// Converts plain text for a `man(7)` page.
///
/// Backslashes and hyphens are escaped and lines starting with a control
/// character (`.` or `'`) are prefixed with the zero-width `\&`.
///
/// # Examples
///
/// ```
/// use cmdman::roff::escape::simple_to_troff;
///
/// assert_eq!(simple_to_troff("see -h\n.not a macro"), "see \\-h\n\\&.not a macro");
/// assert_eq!(simple_to_troff(".B raw"), ".B raw");
/// ```
#[must_use]
pub fn simple_to_troff(text: &str) -> String {
    if is_raw_markup(text) {
        return text.to_owned();
    }

    let escaped = escape_base(text);
    let mut result = String::with_capacity(escaped.len());
    for (i, line) in escaped.lines().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        if starts_control_line(line) {
            result.push_str("\\&");
        }
        result.push_str(line);
    }

    // Preserve trailing newline if present
    if escaped.ends_with('\n') {
        result.push('\n');
    }

    result
}

/// Converts plain text for an `mdoc(7)` page.
///
/// mdoc rejects blank lines and treats leading whitespace as literal
/// layout, so text lines are left-trimmed and each run of blank lines
/// becomes a single `.Pp` paragraph break. Control characters at line start
/// are guarded with `\&` as for troff.
///
/// # Examples
///
/// ```
/// use cmdman::roff::escape::simple_to_mdoc;
///
/// assert_eq!(simple_to_mdoc("first\n\n\n  second"), "first\n.Pp\nsecond");
/// assert_eq!(simple_to_mdoc(".Nm raw"), ".Nm raw");
/// ```
#[must_use]
pub fn simple_to_mdoc(text: &str) -> String {
    if is_raw_markup(text) {
        return text.to_owned();
    }

    let escaped = escape_base(text);
    let mut lines: Vec<String> = Vec::new();
    let mut pending_break = false;
    for line in escaped.lines().map(str::trim_start) {
        if line.is_empty() {
            pending_break = !lines.is_empty();
            continue;
        }
        if pending_break {
            lines.push(".Pp".to_owned());
            pending_break = false;
        }
        if starts_control_line(line) {
            lines.push(format!("\\&{line}"));
        } else {
            lines.push(line.to_owned());
        }
    }

    lines.join("\n")
}
