//! Identifier derivation for project and component names.
//!
//! Separators are any non-alphanumeric characters, so `"my-app"`,
//! `"my_app"` and `"my app"` all produce the same identifiers.

fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a name to a class identifier (e.g., "foo-bar" -> "FooBar")
pub fn classify(s: &str) -> String {
    words(s).map(capitalize).collect()
}

/// Convert a name to a camel-cased identifier (e.g., "foo-bar" -> "fooBar")
///
/// The first word is kept as written.
pub fn camelize(s: &str) -> String {
    let mut words = words(s);
    match words.next() {
        None => String::new(),
        Some(first) => std::iter::once(first.to_string())
            .chain(words.map(capitalize))
            .collect(),
    }
}

/// Convert a name to a package-safe slug (e.g., "My App" -> "my-app")
pub fn slugify(s: &str) -> String {
    words(s)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
