//! Dead-button parsing
//!
//! Finds add-buttons that match the legacy dashboard pattern but carry no
//! onClick handler:
//!   <button className="...">Ajouter Client</button>
//!   <button className="...">Nouveau Produit</button>
//!   <button className="...">Nouvelle Commande</button>

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::RangeLine;

/// Marker a page must carry before any rewrite is attempted
pub const CLIENT_MARKER: &str = "'use client'";

/// Static regex for the unwired add-button element.
/// The className attribute must directly follow the tag name; wired buttons
/// put onClick first and therefore never match.
pub static BUTTON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<button\s+className="[^"]*">\s*(?:Ajouter|Nouveau|Nouvelle)\s+[^<]*</button>"#)
        .expect("Invalid BUTTON_RE regex")
});

/// Label word after "Ajouter"
static AJOUTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Ajouter\s+(\w+)").expect("Invalid AJOUTER_RE regex"));

/// Label word after "Nouveau" or "Nouvelle"
static NOUVEAU_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Nouv(?:eau|elle)\s+(\w+)").expect("Invalid NOUVEAU_RE regex"));

/// A button that matched the pattern and has no handler
#[derive(Debug, Clone)]
pub struct DeadButton {
    /// The raw element text as matched
    pub text: String,

    /// Byte offset of the match start within the file content
    pub offset: usize,

    /// 1-indexed line span of the element
    pub range: RangeLine,

    /// Lowercased state stem derived from the label word, if one follows
    /// the keyword ("Ajouter Client" -> "client")
    pub name: Option<String>,
}

/// Check whether a page declares itself a client component
pub fn has_client_marker(content: &str) -> bool {
    content.contains(CLIENT_MARKER)
}

/// Derive the state stem from a button's label text
pub fn derive_name(text: &str) -> Option<String> {
    let caps = AJOUTER_RE
        .captures(text)
        .or_else(|| NOUVEAU_RE.captures(text))?;
    Some(caps.get(1)?.as_str().to_lowercase())
}

/// Find all dead buttons in page content, in document order
pub fn find_dead_buttons(content: &str) -> Vec<DeadButton> {
    let mut buttons = Vec::new();

    for m in BUTTON_RE.find_iter(content) {
        let text = m.as_str();
        if text.contains("onClick") {
            continue;
        }

        let start_line = line_of(content, m.start());
        let end_line = start_line + text.matches('\n').count() as u32;

        buttons.push(DeadButton {
            text: text.to_string(),
            offset: m.start(),
            range: RangeLine::new(start_line, end_line),
            name: derive_name(text),
        });
    }

    buttons
}

/// Unique state stems across buttons, first-occurrence order
pub fn state_names(buttons: &[DeadButton]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for button in buttons {
        if let Some(name) = &button.name {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names
}

/// 1-indexed line number of a byte offset
fn line_of(content: &str, offset: usize) -> u32 {
    content[..offset].matches('\n').count() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_simple_dead_button() {
        let content = r#"'use client'
export default function Page() {
  return (
    <button className="btn-primary">Ajouter Client</button>
  )
}
"#;
        let buttons = find_dead_buttons(content);
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].name.as_deref(), Some("client"));
        assert_eq!(buttons[0].range, RangeLine::new(4, 4));
    }

    #[test]
    fn test_find_multiline_button() {
        let content = "<div>\n  <button className=\"btn\">\n    Nouveau Produit\n  </button>\n</div>\n";
        let buttons = find_dead_buttons(content);
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].name.as_deref(), Some("produit"));
        assert_eq!(buttons[0].range, RangeLine::new(2, 4));
    }

    #[test]
    fn test_wired_button_never_matches() {
        let content = r#"<button onClick={() => setOpen(true)} className="btn">Ajouter Client</button>"#;
        assert!(find_dead_buttons(content).is_empty());
    }

    #[test]
    fn test_button_with_onclick_after_classname_is_filtered() {
        // className first, onClick later: matched by the pattern, rejected
        // by the handler filter
        let content =
            "<button className=\"btn\">\n  Ajouter Client onClick\n</button>";
        assert!(find_dead_buttons(content).is_empty());
    }

    #[test]
    fn test_non_keyword_button_ignored() {
        let content = r#"<button className="btn">Fermer</button>"#;
        assert!(find_dead_buttons(content).is_empty());
    }

    #[test]
    fn test_case_insensitive_keyword() {
        let content = r#"<button className="btn">AJOUTER CLIENT</button>"#;
        let buttons = find_dead_buttons(content);
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].name.as_deref(), Some("client"));
    }

    #[test]
    fn test_derive_name_nouvelle() {
        assert_eq!(
            derive_name("Nouvelle Commande en un clic"),
            Some("commande".to_string())
        );
        assert_eq!(derive_name("Nouveau Produit"), Some("produit".to_string()));
        assert_eq!(derive_name("Ajouter Client"), Some("client".to_string()));
    }

    #[test]
    fn test_derive_name_no_word() {
        // Keyword followed by punctuation only: nothing to derive
        assert_eq!(derive_name("Ajouter !"), None);
    }

    #[test]
    fn test_unnamed_button_kept_with_none() {
        let content = r#"<button className="btn">Ajouter !</button>"#;
        let buttons = find_dead_buttons(content);
        assert_eq!(buttons.len(), 1);
        assert!(buttons[0].name.is_none());
    }

    #[test]
    fn test_state_names_dedup_first_occurrence() {
        let content = concat!(
            "<button className=\"a\">Nouveau Produit</button>\n",
            "<button className=\"b\">Ajouter Client</button>\n",
            "<button className=\"c\">Ajouter Produit maintenant</button>\n",
        );
        let buttons = find_dead_buttons(content);
        assert_eq!(buttons.len(), 3);
        assert_eq!(state_names(&buttons), vec!["produit", "client"]);
    }

    #[test]
    fn test_has_client_marker() {
        assert!(has_client_marker("'use client'\nexport default ..."));
        assert!(!has_client_marker("export default ..."));
    }

    #[test]
    fn test_offsets_point_at_match() {
        let content = "padding\n<button className=\"x\">Ajouter Item</button>";
        let buttons = find_dead_buttons(content);
        assert_eq!(buttons.len(), 1);
        assert!(content[buttons[0].offset..].starts_with("<button"));
    }
}
