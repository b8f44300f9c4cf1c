//! Generated snippet text
//!
//! Every piece of text the rewrite splices into a page lives here, so the
//! emitted TSX can be eyeballed (and golden-tested) in one place.

/// The import line added after the lucide-react import
pub const MODAL_IMPORT: &str = "import Modal from '@/components/Modal'";

/// Uppercase the first letter of an already-lowercased state stem
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// State identifier for a stem: "client" -> "showClientModal"
pub fn state_ident(name: &str) -> String {
    format!("show{}Modal", capitalize(name))
}

/// Setter identifier for a stem: "client" -> "setShowClientModal"
pub fn setter_ident(name: &str) -> String {
    format!("setShow{}Modal", capitalize(name))
}

/// A useState declaration line for one stem
pub fn state_decl(name: &str) -> String {
    format!(
        "  const [{}, {}] = useState(false)",
        state_ident(name),
        setter_ident(name)
    )
}

/// The declaration block inserted after the activeTab state line
/// (blank line before and after)
pub fn state_block(names: &[String]) -> String {
    let decls: Vec<String> = names.iter().map(|n| state_decl(n)).collect();
    format!("\n{}\n", decls.join("\n"))
}

/// The rewritten open tag for a wired button
pub fn wired_open_tag(class_attr: &str, name: &str) -> String {
    format!(
        "<button\n                onClick={{() => {}(true)}}\n                className=\"{}\"",
        setter_ident(name),
        class_attr
    )
}

/// Placeholder modal markup for one stem
pub fn modal_markup(name: &str) -> String {
    let capitalized = capitalize(name);
    format!(
        r#"      <Modal
        isOpen={{show{capitalized}Modal}}
        onClose={{() => setShow{capitalized}Modal(false)}}
        title="{capitalized}"
        size="lg"
      >
        <div className="space-y-4">
          <p className="text-gray-600">Fonctionnalité en cours de développement.</p>
          <div className="flex justify-end gap-2">
            <button
              onClick={{() => setShow{capitalized}Modal(false)}}
              className="px-4 py-2 bg-gray-200 text-gray-700 rounded-lg hover:bg-gray-300 transition-colors"
            >
              Fermer
            </button>
          </div>
        </div>
      </Modal>"#
    )
}

/// The full block inserted before the layout closing sequence
pub fn modals_block(names: &[String]) -> String {
    let modals: Vec<String> = names.iter().map(|n| modal_markup(n)).collect();
    format!("\n\n      {{/* Modals */}}\n{}\n", modals.join("\n"))
}
