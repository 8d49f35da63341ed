//! Deterministic identifier derivation for generated artifacts.

/// Rust keywords that cannot serve as generated module names. Node names
/// mapping onto these are rejected during preflight.
pub const RESERVED_MODULE_NAMES: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "flow", "state",
];

/// Lowercases and joins a free-form name into a `snake_case` identifier.
/// Runs of non-alphanumeric characters collapse into a single underscore.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            // A lowercase-to-uppercase boundary also starts a new word.
            if c.is_ascii_uppercase() && out.chars().last().is_some_and(|p| p.is_ascii_lowercase())
            {
                pending_sep = true;
            }
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, 'n');
    }
    out
}

/// Derives the `UpperCamelCase` type name for a node.
pub fn upper_camel(name: &str) -> String {
    snake_case(name)
        .split('_')
        .filter(|s| !s.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Crate/package name for the generated project manifest.
pub fn package_name(project_name: &str) -> String {
    snake_case(project_name).replace('_', "-")
}
