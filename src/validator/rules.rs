//! The individual structural rules, each with a stable id so callers can
//! filter findings without string-matching messages.

use super::report::{Finding, Location};
use crate::generator::PLACEHOLDER_TOKEN;
use crate::workflow::NodeKind;
use ahash::AHashSet;
use syn::visit::Visit;

pub const SYNTAX_INVALID: &str = "SYNTAX_INVALID";
pub const BASE_TYPE_MISMATCH: &str = "BASE_TYPE_MISMATCH";
pub const MISSING_LIFECYCLE_REGION: &str = "MISSING_LIFECYCLE_REGION";
pub const UNUSED_IMPORT: &str = "UNUSED_IMPORT";
pub const UNDEFINED_FLOW_REFERENCE: &str = "UNDEFINED_FLOW_REFERENCE";
pub const PLACEHOLDER_MALFORMED: &str = "PLACEHOLDER_MALFORMED";
pub const PATTERN_UNKNOWN: &str = "PATTERN_UNKNOWN";

/// The three lifecycle regions every node module must expose, in order.
pub const LIFECYCLE_REGIONS: [&str; 3] = ["prep", "exec", "post"];

/// Identifiers from the prelude and standard library that flow wiring may
/// reference without importing.
const KNOWN_TYPES: &[&str] = &[
    "Vec", "String", "Box", "Option", "Some", "None", "Result", "Ok", "Err", "Self", "Default",
    "Clone", "Debug", "Copy",
];

fn location_of(span: proc_macro2::Span) -> Location {
    let start = span.start();
    Location {
        line: start.line,
        column: start.column,
    }
}

/// Node modules must implement the base trait matching their declared kind.
///
/// The declared kind is recovered from the `(kind: ...)` marker the
/// generator embeds in the node struct's doc comment. Without a marker the
/// rule still requires *some* recognized node base trait to be implemented.
pub fn check_base_type(file: &syn::File, findings: &mut Vec<Finding>) {
    let declared = declared_kind(file);

    let impl_block = node_impl_block(file);
    let Some((impl_item, impl_kind)) = impl_block else {
        findings.push(Finding::error(
            BASE_TYPE_MISMATCH,
            "no node base trait implementation found".to_string(),
            None,
        ));
        return;
    };

    if let Some(expected) = declared {
        if expected != impl_kind {
            findings.push(Finding::error(
                BASE_TYPE_MISMATCH,
                format!(
                    "node is declared as kind {} but implements {}",
                    expected,
                    impl_kind.base_trait()
                ),
                Some(location_of(impl_item.impl_token.span)),
            ));
        }
    }
}

/// The three lifecycle regions must be present as methods, even if empty.
/// A region that is still a placeholder is fine; a missing region is not.
pub fn check_lifecycle_regions(file: &syn::File, findings: &mut Vec<Finding>) {
    let Some((impl_item, _)) = node_impl_block(file) else {
        // Already reported by the base-type rule.
        return;
    };

    let methods: AHashSet<String> = impl_item
        .items
        .iter()
        .filter_map(|item| match item {
            syn::ImplItem::Fn(f) => Some(f.sig.ident.to_string()),
            _ => None,
        })
        .collect();

    for region in LIFECYCLE_REGIONS {
        if !methods.contains(region) {
            findings.push(Finding::error(
                MISSING_LIFECYCLE_REGION,
                format!("lifecycle region '{}' is missing", region),
                Some(location_of(impl_item.impl_token.span)),
            ));
        }
    }
}

/// Private imports must be referenced somewhere outside the `use` items.
/// Unused imports are a warning: they do not block the scaffold, but they
/// are reported so a human can clean up after filling placeholders.
pub fn check_imports(file: &syn::File, findings: &mut Vec<Finding>) {
    let used = referenced_idents(file);

    for item in &file.items {
        let syn::Item::Use(use_item) = item else {
            continue;
        };
        // Re-exports are part of the scaffold's API surface.
        if matches!(use_item.vis, syn::Visibility::Public(_)) {
            continue;
        }
        for (name, span) in use_leaves(&use_item.tree) {
            if !used.contains(&name) {
                findings.push(Finding::warning(
                    UNUSED_IMPORT,
                    format!("imported name '{}' is never referenced", name),
                    Some(location_of(span)),
                ));
            }
        }
    }
}

/// Flow wiring may only reference node type identifiers that the file also
/// imports (or defines locally).
pub fn check_flow_references(file: &syn::File, findings: &mut Vec<Finding>) {
    let mut known: AHashSet<String> = KNOWN_TYPES.iter().map(|s| s.to_string()).collect();

    for item in &file.items {
        match item {
            syn::Item::Use(use_item) => {
                for (name, _) in use_leaves(&use_item.tree) {
                    known.insert(name);
                }
            }
            syn::Item::Struct(s) => {
                known.insert(s.ident.to_string());
            }
            syn::Item::Enum(e) => {
                known.insert(e.ident.to_string());
            }
            syn::Item::Trait(t) => {
                known.insert(t.ident.to_string());
            }
            syn::Item::Type(t) => {
                known.insert(t.ident.to_string());
            }
            _ => {}
        }
    }

    let mut collector = TypeRefCollector::default();
    for item in &file.items {
        if let syn::Item::Fn(f) = item {
            collector.visit_item_fn(f);
        }
    }

    for (name, span) in collector.refs {
        if !known.contains(&name) {
            findings.push(Finding::error(
                UNDEFINED_FLOW_REFERENCE,
                format!("flow wiring references '{}', which is not imported or defined", name),
                Some(location_of(span)),
            ));
        }
    }
}

/// Placeholder markers, where present, must be exactly the recognized
/// token. A mangled marker silently breaks the greppable-token guarantee,
/// so it is an error, not a warning.
pub fn check_placeholders(content: &str, findings: &mut Vec<Finding>) {
    let bytes = content.as_bytes();
    for (offset, _) in content.match_indices("TODO") {
        let before = &content[..offset];
        let after = offset + "TODO".len();

        let prefixed = before.ends_with("@@") && !before.ends_with("@@@");
        let suffixed = bytes.get(after..after + 2) == Some(b"@@".as_slice())
            && bytes.get(after + 2) != Some(&b'@');

        if prefixed && suffixed {
            continue;
        }
        let line = before.matches('\n').count() + 1;
        let column = offset - before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        findings.push(Finding::error(
            PLACEHOLDER_MALFORMED,
            format!(
                "placeholder near 'TODO' does not match the recognized token '{}'",
                PLACEHOLDER_TOKEN
            ),
            Some(Location { line, column }),
        ));
    }
}

/// Extracts the `(kind: ...)` marker from the node struct's doc comment.
fn declared_kind(file: &syn::File) -> Option<NodeKind> {
    for item in &file.items {
        let syn::Item::Struct(s) = item else { continue };
        for attr in &s.attrs {
            if !attr.path().is_ident("doc") {
                continue;
            }
            let syn::Meta::NameValue(nv) = &attr.meta else {
                continue;
            };
            let syn::Expr::Lit(expr_lit) = &nv.value else {
                continue;
            };
            let syn::Lit::Str(lit) = &expr_lit.lit else {
                continue;
            };
            let text = lit.value();
            if let Some(idx) = text.find("(kind: ") {
                let rest = &text[idx + "(kind: ".len()..];
                let name = rest.split(')').next().unwrap_or("");
                return NodeKind::parse(name);
            }
        }
    }
    None
}

/// Finds the first impl block targeting a recognized node base trait.
fn node_impl_block(file: &syn::File) -> Option<(&syn::ItemImpl, NodeKind)> {
    for item in &file.items {
        let syn::Item::Impl(impl_item) = item else {
            continue;
        };
        let Some((_, trait_path, _)) = &impl_item.trait_ else {
            continue;
        };
        let Some(segment) = trait_path.segments.last() else {
            continue;
        };
        if let Some(kind) = NodeKind::from_base_trait(&segment.ident.to_string()) {
            return Some((impl_item, kind));
        }
    }
    None
}

/// Leaf names introduced by a `use` tree, with their spans.
fn use_leaves(tree: &syn::UseTree) -> Vec<(String, proc_macro2::Span)> {
    let mut leaves = Vec::new();
    collect_use_leaves(tree, &mut leaves);
    leaves
}

fn collect_use_leaves(tree: &syn::UseTree, out: &mut Vec<(String, proc_macro2::Span)>) {
    match tree {
        syn::UseTree::Path(path) => collect_use_leaves(&path.tree, out),
        syn::UseTree::Name(name) => {
            let ident = name.ident.to_string();
            if ident != "self" {
                out.push((ident, name.ident.span()));
            }
        }
        syn::UseTree::Rename(rename) => {
            out.push((rename.rename.to_string(), rename.rename.span()));
        }
        syn::UseTree::Glob(_) => {}
        syn::UseTree::Group(group) => {
            for item in &group.items {
                collect_use_leaves(item, out);
            }
        }
    }
}

/// Walks a raw token stream, surfacing every identifier. Needed because
/// the AST visitor treats macro invocation bodies (`vec![...]` and friends)
/// as opaque tokens.
fn idents_in_tokens(
    tokens: proc_macro2::TokenStream,
    out: &mut Vec<(String, proc_macro2::Span)>,
) {
    for tree in tokens {
        match tree {
            proc_macro2::TokenTree::Ident(ident) => out.push((ident.to_string(), ident.span())),
            proc_macro2::TokenTree::Group(group) => idents_in_tokens(group.stream(), out),
            _ => {}
        }
    }
}

/// Every identifier referenced outside `use` items.
fn referenced_idents(file: &syn::File) -> AHashSet<String> {
    #[derive(Default)]
    struct IdentCollector {
        idents: AHashSet<String>,
    }

    impl<'ast> Visit<'ast> for IdentCollector {
        fn visit_ident(&mut self, ident: &'ast proc_macro2::Ident) {
            self.idents.insert(ident.to_string());
        }

        fn visit_macro(&mut self, mac: &'ast syn::Macro) {
            let mut idents = Vec::new();
            idents_in_tokens(mac.tokens.clone(), &mut idents);
            self.idents.extend(idents.into_iter().map(|(name, _)| name));
            syn::visit::visit_macro(self, mac);
        }
    }

    let mut collector = IdentCollector::default();
    for item in &file.items {
        if !matches!(item, syn::Item::Use(_)) {
            collector.visit_item(item);
        }
    }
    collector.idents
}

/// Collects type-like identifiers (UpperCamelCase path segments) inside
/// function bodies and signatures. SCREAMING_CASE consts are skipped.
#[derive(Default)]
struct TypeRefCollector {
    refs: Vec<(String, proc_macro2::Span)>,
}

impl TypeRefCollector {
    fn consider(&mut self, name: &str, span: proc_macro2::Span) {
        let looks_like_type = name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
            && name.chars().any(|c| c.is_ascii_lowercase());
        if looks_like_type {
            self.refs.push((name.to_string(), span));
        }
    }
}

impl<'ast> Visit<'ast> for TypeRefCollector {
    fn visit_path(&mut self, path: &'ast syn::Path) {
        for segment in &path.segments {
            self.consider(&segment.ident.to_string(), segment.ident.span());
        }
        syn::visit::visit_path(self, path);
    }

    fn visit_macro(&mut self, mac: &'ast syn::Macro) {
        let mut idents = Vec::new();
        idents_in_tokens(mac.tokens.clone(), &mut idents);
        for (name, span) in idents {
            self.consider(&name, span);
        }
        syn::visit::visit_macro(self, mac);
    }
}
