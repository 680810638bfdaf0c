//! Single-line classifiers and text helpers used by the notes parsers.

/// Splits raw document text into lines.
///
/// Splitting is on `\n` only, so an empty document yields one empty line and
/// a trailing newline yields a trailing empty line. A trailing `\r` is
/// dropped from every line.
pub fn to_lines(text: &str) -> Vec<&str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).collect()
}

/// Number of whitespace characters before the first non-whitespace character.
pub fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// True when the line contains strictly more uppercase than lowercase letters.
pub fn more_caps(line: &str) -> bool {
    let uppers = line.chars().filter(|c| c.is_uppercase()).count();
    let lowers = line.chars().filter(|c| c.is_lowercase()).count();
    uppers > lowers
}

/// Removes `suffix` from the end of `line` if present.
pub fn trim_suffix<'a>(line: &'a str, suffix: &str) -> &'a str {
    line.strip_suffix(suffix).unwrap_or(line)
}

/// Right-trims `a`, left-trims `b`, and joins them with exactly one space.
pub fn join_with_single_space(a: &str, b: &str) -> String {
    let a = a.trim_end();
    let b = b.trim_start();
    let mut joined = String::with_capacity(a.len() + b.len() + 1);
    joined.push_str(a);
    joined.push(' ');
    joined.push_str(b);
    joined
}

/// Escapes `&`, `<`, `>` and `"` in author text.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// Capitalizes each whitespace-separated word and lowercases the rest of it.
///
/// Runs of whitespace collapse to a single space and surrounding whitespace
/// is dropped.
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// True when `line` is a hyphen item once its leading whitespace is removed.
pub fn is_list_item(line: &str) -> bool {
    line.trim_start().starts_with('-')
}

/// True when `line` is a hyphen item indented by exactly `indent` characters.
pub fn is_list_item_at(line: &str, indent: usize) -> bool {
    leading_whitespace(line) == indent && is_list_item(line)
}

/// True for lines made only of whitespace, including the empty line.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}
