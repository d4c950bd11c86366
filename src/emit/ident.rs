//! Identifier sanitizing.
//!
//! Raw token names come straight from the design tool (`--color-text-inverse`,
//! `Background Subtle`, `16`). These helpers turn them into readable
//! identifiers for the generated source.

use super::Renderer;

/// Uppercase the first character and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `"hello world"` -> `"HelloWorld"`.
pub fn to_pascal_case(s: &str) -> String {
    s.split_whitespace().map(capitalize).collect()
}

/// `"Hello World"` -> `"helloWorld"`.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True if `s` is non-empty and made only of ASCII digits.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Remove every case-insensitive occurrence of `category` from `name`,
/// unless `name` is exactly the category, in which case it is kept as is.
pub fn remove_category(name: &str, category: &str) -> String {
    if category.is_empty() || name.eq_ignore_ascii_case(category) {
        return name.to_string();
    }

    let haystack = name.to_ascii_lowercase();
    let needle = category.to_ascii_lowercase();

    let mut result = String::with_capacity(name.len());
    let mut last = 0;
    for (start, _) in haystack.match_indices(&needle) {
        result.push_str(&name[last..start]);
        last = start + needle.len();
    }
    result.push_str(&name[last..]);
    result
}

/// Name sanitizer bound to a renderer's keyword rules.
pub struct Sanitizer<'a> {
    color_prefix: &'a str,
    renderer: &'a dyn Renderer,
}

impl<'a> Sanitizer<'a> {
    pub fn new(color_prefix: &'a str, renderer: &'a dyn Renderer) -> Self {
        Self {
            color_prefix,
            renderer,
        }
    }

    /// `"Background Subtle"` -> `"BackgroundSubtle"`.
    pub fn category(&self, raw: &str) -> String {
        self.escape(to_pascal_case(raw))
    }

    /// `"--color-text-inverse"` in category `"Text"` -> `"inverse"`.
    pub fn color_variable(&self, raw: &str, category: &str) -> String {
        let name = raw.strip_prefix(self.color_prefix).unwrap_or(raw);
        let name = remove_category(name, category).replace('-', " ");
        self.escape(to_camel_case(&name))
    }

    /// `"16"` -> `"_16"`; `"--border-radius-extra-small"` -> `"extraSmall"`.
    pub fn number_variable(&self, raw: &str, prefix: &str) -> String {
        if is_numeric(raw) {
            return format!("_{}", raw);
        }

        let name = raw.strip_prefix(prefix).unwrap_or(raw).replace('-', " ");
        self.escape(to_camel_case(&name))
    }

    fn escape(&self, ident: String) -> String {
        if self.renderer.is_reserved(&ident) {
            self.renderer.escape(&ident)
        } else {
            ident
        }
    }
}
