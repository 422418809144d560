//! Case conversion and token naming.
//!
//! Design tool names mix camelCase, path separators and free text
//! (`"Brand/Primary Blue"`, `"helloWorld"`). Every CSS identifier the
//! generator emits goes through [`normalise_words`] first.

/// Characters treated as word boundaries.
const SEPARATORS: &[char] = &['_', '-', '/', ' '];

/// The selector used for tokens that do not belong to a theme.
pub const ROOT_SCOPE: &str = ":root";

/// Split a name into lowercase words on camelCase boundaries and separators.
pub fn normalise_words(input: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;

    for ch in input.chars() {
        if ch.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            spaced.push(' ');
        }
        spaced.push(ch);
        prev = Some(ch);
    }

    spaced
        .to_lowercase()
        .split(|c: char| SEPARATORS.contains(&c) || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn to_kebab_case(input: &str) -> String {
    normalise_words(input).join("-")
}

pub fn to_pascal_case(input: &str) -> String {
    normalise_words(input).iter().map(|w| capitalize(w)).collect()
}

pub fn to_camel_case(input: &str) -> String {
    let words = normalise_words(input);
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };
    let mut camel = first.clone();
    for word in rest {
        camel.push_str(&capitalize(word));
    }
    camel
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive the custom property and theme scope for a style name.
///
/// `"Brand/Primary"` → (`--brand-primary`, `:root`);
/// `"Dark theme/Surface"` → (`--surface`, `dark-theme`).
pub fn token_values(name: &str) -> (String, String) {
    if let Some((head, rest)) = name.split_once('/') {
        if head.to_lowercase().contains("theme") {
            return (
                format!("--{}", to_kebab_case(&rest.replace('/', "-"))),
                to_kebab_case(head),
            );
        }
    }
    (format!("--{}", to_kebab_case(name)), ROOT_SCOPE.to_string())
}

/// Theme scope for a variable mode: modes named `"... theme"` get their own
/// scope, everything else lands on the root.
pub fn mode_scope(mode_name: &str) -> String {
    if mode_name.trim_end().to_lowercase().ends_with("theme") {
        to_kebab_case(mode_name)
    } else {
        ROOT_SCOPE.to_string()
    }
}
