//! Placeholder substitution mini-language.
//!
//! Templates mark insertion points with numbered placeholders in two forms:
//!
//! ```text
//! $0            bare - index 0 is the file's base name
//! $1, $2, ...   bare - positional properties
//! /$1:label/    delimited - the label doubles as the prompt hint
//! ```
//!
//! Substitution is literal text replacement. There are no conditionals,
//! loops, escapes, or nested placeholders.

/// True iff the bare token `$<i>` occurs anywhere in `text`.
///
/// Substring match: `$1` also matches inside `$12` and inside a delimited
/// token such as `/$1:name/`. [`highest_index`] relies on the latter when
/// counting.
pub fn has_placeholder(text: &str, i: usize) -> bool {
    text.contains(&format!("${}", i))
}

/// Highest consecutively-present positional index, counting up from 1.
///
/// This is the number of properties the template requires. Indices past a
/// gap are not counted.
pub fn highest_index(text: &str) -> usize {
    let mut i = 0;
    while has_placeholder(text, i + 1) {
        i += 1;
    }
    i
}

/// Label of the delimited form `/$<i>:<label>/`, if one is present.
///
/// A token missing its closing `/` yields the text up to the end of input
/// rather than an error.
pub fn extract_label(text: &str, i: usize) -> Option<String> {
    let token = format!("/${}:", i);
    let start = text.find(&token)? + token.len();
    let rest = &text[start..];
    match rest.find('/') {
        Some(end) => Some(rest[..end].to_string()),
        None => Some(rest.to_string()),
    }
}

/// Replace every occurrence of placeholder `i` with `value`.
///
/// When a delimited form exists, the whole `/$<i>:<label>/` token is the
/// replacement target; otherwise the bare `$<i>` token is. Pure transform,
/// the input is never mutated.
pub fn substitute(text: &str, value: &str, i: usize) -> String {
    let target = match extract_label(text, i) {
        Some(label) => format!("/${}:{}/", i, label),
        None => format!("${}", i),
    };
    text.replace(&target, value)
}

/// Render a template: substitute the file-name-derived index 0 when used,
/// then every positional property, highest index first.
///
/// The base name is the file name truncated at its first `.`. Properties a
/// template never references are silently unused.
pub fn render(text: &str, file_name: &str, properties: &[String]) -> String {
    let mut out = text.to_string();

    if has_placeholder(&out, 0) {
        let base = match file_name.find('.') {
            Some(dot) => &file_name[..dot],
            None => file_name,
        };
        out = substitute(&out, base, 0);
    }

    for i in (1..=properties.len()).rev() {
        out = substitute(&out, &properties[i - 1], i);
    }

    out
}
