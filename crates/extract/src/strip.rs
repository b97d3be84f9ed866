//! Structural stripping: the ordered rules that peel manifest scaffolding
//! (stop times, codes, numeric columns, annotations, trailing columns) off a
//! line, leaving the name candidate. Each rule is a pure transform and can
//! be exercised on its own; `strip_structural` applies them in the one order
//! that matches real manifest layouts.

use std::borrow::Cow;

use crate::re;

/// How many stacked leading numeric columns a line may shed.
pub const MAX_LEADING_COLUMNS: usize = 4;

re!(re_leading_time, r"^[\s\-–—]*\d{1,2}:?\d{0,2}\s*");
re!(re_leading_code, r"^(?:\d{3,}|[A-Z]{2,}\d+)[\s,/\-]+");
re!(re_brackets, r"\[[^\]]*\]");
re!(re_column_gap, r"\s{2,}.+$");

fn re_leading_columns() -> &'static regex::Regex {
    static R: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
    R.get_or_init(|| {
        regex::Regex::new(&format!(r"^(?:\d+[\s,\-/]+){{1,{MAX_LEADING_COLUMNS}}}"))
            .expect("invalid regex")
    })
}

/// Strip a leading stop-time token ("8:00", "715", "- 9:15") together with
/// any dash/whitespace prefix around it.
pub fn strip_leading_time(line: &str) -> Cow<'_, str> {
    re_leading_time().replace(line, "")
}

/// Strip a leading manifest code, a long digit run or an uppercase prefix
/// plus digits ("12345 ", "AB123/"), together with its separator.
pub fn strip_leading_code(line: &str) -> Cow<'_, str> {
    re_leading_code().replace(line, "")
}

/// Strip stacked leading numeric columns (stop numbers, case counts), at
/// most [`MAX_LEADING_COLUMNS`] of them.
pub fn strip_leading_columns(line: &str) -> Cow<'_, str> {
    re_leading_columns().replace(line, "")
}

/// Remove bracketed annotations anywhere in the line.
pub fn strip_brackets(line: &str) -> Cow<'_, str> {
    re_brackets().replace_all(line, "")
}

/// Truncate at the first run of 2+ spaces. That marks a columnar field
/// boundary; whatever follows belongs to another column.
pub fn truncate_at_column_gap(line: &str) -> Cow<'_, str> {
    re_column_gap().replace(line, "")
}

/// Apply every rule in order and trim the survivor.
pub fn strip_structural(line: &str) -> String {
    let s = strip_leading_time(line);
    let s = strip_leading_code(&s);
    let s = strip_leading_columns(&s);
    let s = strip_brackets(&s);
    let s = truncate_at_column_gap(&s);
    s.trim().to_string()
}
