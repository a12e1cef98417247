//! Docstring notes.

use super::Space;
use crate::model::Docstring;

impl Space {
    /// Collect documentation notes for populated entities.
    ///
    /// Empty when docs are disabled. Stubs and blank docstrings are left
    /// out; aliases are `N0`, `N1`, ... in registration order.
    pub fn gen_docstring(&self) -> Vec<Docstring> {
        if !self.include_docs() {
            return Vec::new();
        }
        self.entities()
            .filter(|entity| !entity.is_empty())
            .filter_map(|entity| {
                let text = entity.docstring()?.trim();
                (!text.is_empty()).then(|| (entity.fqn(), text))
            })
            .enumerate()
            .map(|(index, (source, text))| Docstring {
                alias: format!("N{index}"),
                source: source.to_string(),
                text: text.to_string(),
            })
            .collect()
    }
}
