//! Content splicing
//!
//! Each pass takes the page content as a string, looks for its anchor with a
//! static regex, and returns the spliced content (or None when there is
//! nothing to do). Passes never touch a file; the engine owns IO.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::buttons::parse::DeadButton;
use crate::rewrite::template;

/// The lucide-react import line the Modal import is anchored after
static ICON_IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+.*from\s+['"]lucide-react['"]"#).expect("Invalid ICON_IMPORT_RE regex")
});

/// The activeTab useState line the state block is anchored after
static TAB_STATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"const\s+\[activeTab,\s+setActiveTab\]\s*=\s*useState[^\n]*\n")
        .expect("Invalid TAB_STATE_RE regex")
});

/// The layout closing sequence the modal block is anchored before
static LAYOUT_CLOSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+</main>\s+</div>\s+\)\s+\}").expect("Invalid LAYOUT_CLOSE_RE regex")
});

/// The open tag of a dead button, capturing its className value
static BUTTON_OPEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^<button\s+className="([^"]*)""#).expect("Invalid BUTTON_OPEN_RE regex")
});

/// Whether the Modal import has somewhere to go
pub fn has_icon_import(content: &str) -> bool {
    ICON_IMPORT_RE.is_match(content)
}

/// Whether the state block has somewhere to go
pub fn has_tab_state(content: &str) -> bool {
    TAB_STATE_RE.is_match(content)
}

/// Whether the modal block has somewhere to go
pub fn has_layout_close(content: &str) -> bool {
    LAYOUT_CLOSE_RE.is_match(content)
}

/// Insert the Modal import on a new line after the lucide-react import.
/// Returns None when the import is already present or no anchor exists.
pub fn insert_modal_import(content: &str) -> Option<String> {
    if content.contains(template::MODAL_IMPORT) {
        return None;
    }

    let m = ICON_IMPORT_RE.find(content)?;
    let mut next = String::with_capacity(content.len() + template::MODAL_IMPORT.len() + 1);
    next.push_str(&content[..m.end()]);
    next.push('\n');
    next.push_str(template::MODAL_IMPORT);
    next.push_str(&content[m.end()..]);
    Some(next)
}

/// Insert the useState declaration block after the activeTab state line.
/// Returns None when no anchor exists or there are no names.
pub fn insert_state_decls(content: &str, names: &[String]) -> Option<String> {
    if names.is_empty() {
        return None;
    }

    let m = TAB_STATE_RE.find(content)?;
    let block = template::state_block(names);
    let mut next = String::with_capacity(content.len() + block.len());
    next.push_str(&content[..m.end()]);
    next.push_str(&block);
    next.push_str(&content[m.end()..]);
    Some(next)
}

/// Rewrite the open tag of every named dead button to carry an onClick
/// handler. All occurrences of an identical button text are rewritten.
/// Returns the new content and the number of buttons wired.
pub fn wire_handlers(content: &str, buttons: &[DeadButton]) -> (String, usize) {
    let mut next = content.to_string();
    let mut wired = 0;

    for button in buttons {
        let name = match &button.name {
            Some(n) => n,
            None => continue,
        };

        let caps = match BUTTON_OPEN_RE.captures(&button.text) {
            Some(c) => c,
            None => continue,
        };
        let class_attr = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let open_end = caps.get(0).map(|m| m.end()).unwrap_or(0);

        let new_button = format!(
            "{}{}",
            template::wired_open_tag(class_attr, name),
            &button.text[open_end..]
        );

        if next.contains(&button.text) {
            next = next.replace(&button.text, &new_button);
            wired += 1;
        }
    }

    (next, wired)
}

/// Insert the placeholder modal block before the layout closing sequence.
/// Returns None when no anchor exists or there are no names.
pub fn append_modals(content: &str, names: &[String]) -> Option<String> {
    if names.is_empty() {
        return None;
    }

    let m = LAYOUT_CLOSE_RE.find(content)?;
    let block = template::modals_block(names);
    let mut next = String::with_capacity(content.len() + block.len());
    next.push_str(&content[..m.start()]);
    next.push_str(&block);
    next.push_str(&content[m.start()..]);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::parse::find_dead_buttons;

    const IMPORTS: &str = "'use client'\n\nimport { useState } from 'react'\nimport { Users, Plus } from 'lucide-react'\n";

    #[test]
    fn test_insert_modal_import_after_lucide() {
        let next = insert_modal_import(IMPORTS).unwrap();
        assert!(next.contains(
            "import { Users, Plus } from 'lucide-react'\nimport Modal from '@/components/Modal'\n"
        ));
    }

    #[test]
    fn test_insert_modal_import_already_present() {
        let content = format!("{}{}\n", IMPORTS, template::MODAL_IMPORT);
        assert!(insert_modal_import(&content).is_none());
    }

    #[test]
    fn test_insert_modal_import_no_anchor() {
        let content = "'use client'\n\nimport { useState } from 'react'\n";
        assert!(insert_modal_import(content).is_none());
    }

    #[test]
    fn test_insert_state_decls_after_active_tab() {
        let content = "  const [activeTab, setActiveTab] = useState('list')\n\n  return (\n";
        let next = insert_state_decls(content, &["client".to_string()]).unwrap();
        assert_eq!(
            next,
            "  const [activeTab, setActiveTab] = useState('list')\n\n  const [showClientModal, setShowClientModal] = useState(false)\n\n  return (\n"
        );
    }

    #[test]
    fn test_insert_state_decls_generic_use_state() {
        // The anchor tolerates any useState expression on the line
        let content = "  const [activeTab, setActiveTab] = useState<TabType>('dashboard')\n";
        assert!(insert_state_decls(content, &["x".to_string()]).is_some());
    }

    #[test]
    fn test_insert_state_decls_no_anchor() {
        let content = "  const [open, setOpen] = useState(false)\n";
        assert!(insert_state_decls(content, &["client".to_string()]).is_none());
    }

    #[test]
    fn test_insert_state_decls_no_names() {
        let content = "  const [activeTab, setActiveTab] = useState('list')\n";
        assert!(insert_state_decls(content, &[]).is_none());
    }

    #[test]
    fn test_wire_handlers() {
        let content = "<button className=\"btn-primary\">\n          Ajouter Client\n        </button>";
        let buttons = find_dead_buttons(content);
        let (next, wired) = wire_handlers(content, &buttons);

        assert_eq!(wired, 1);
        assert_eq!(
            next,
            "<button\n                onClick={() => setShowClientModal(true)}\n                className=\"btn-primary\">\n          Ajouter Client\n        </button>"
        );
    }

    #[test]
    fn test_wire_handlers_skips_unnamed() {
        let content = "<button className=\"btn\">Ajouter !</button>";
        let buttons = find_dead_buttons(content);
        assert_eq!(buttons.len(), 1);

        let (next, wired) = wire_handlers(content, &buttons);
        assert_eq!(wired, 0);
        assert_eq!(next, content);
    }

    #[test]
    fn test_wire_handlers_identical_buttons_once() {
        // Two byte-identical buttons: the first replace rewrites both, the
        // second button's text is gone and does not double-wire
        let content = concat!(
            "<button className=\"btn\">Ajouter Client</button>\n",
            "<button className=\"btn\">Ajouter Client</button>\n",
        );
        let buttons = find_dead_buttons(content);
        assert_eq!(buttons.len(), 2);

        let (next, wired) = wire_handlers(content, &buttons);
        assert_eq!(wired, 1);
        assert_eq!(next.matches("onClick={() => setShowClientModal(true)}").count(), 2);
    }

    #[test]
    fn test_append_modals_before_layout_close() {
        let content = "        </button>\n      </main>\n    </div>\n  )\n}\n";
        let next = append_modals(content, &["client".to_string()]).unwrap();

        assert!(next.starts_with("        </button>\n\n      {/* Modals */}\n      <Modal"));
        assert!(next.ends_with("      </Modal>\n\n      </main>\n    </div>\n  )\n}\n"));
    }

    #[test]
    fn test_append_modals_no_anchor() {
        let content = "        </button>\n      </section>\n    </div>\n  )\n}\n";
        assert!(append_modals(content, &["client".to_string()]).is_none());
    }

    #[test]
    fn test_anchor_predicates() {
        assert!(has_icon_import(IMPORTS));
        assert!(!has_icon_import("import { useState } from 'react'\n"));
        assert!(has_tab_state(
            "const [activeTab, setActiveTab] = useState('a')\n"
        ));
        assert!(!has_tab_state("const [open, setOpen] = useState(false)\n"));
        assert!(has_layout_close("\n      </main>\n    </div>\n  )\n}"));
        assert!(!has_layout_close("\n      </main>\n  )\n}"));
    }
}
