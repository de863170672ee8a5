use std::collections::HashMap;

use crate::morph::config::ElementMorphSpec;

/// `elementId -> position in elements`, built once per config.
///
/// The first occurrence of a duplicated id wins, matching a linear scan.
#[derive(Clone, Debug, Default)]
pub(crate) struct ElementIndex {
    by_id: HashMap<String, usize>,
}

impl ElementIndex {
    pub(crate) fn build(transition_id: &str, elements: &[ElementMorphSpec]) -> Self {
        let mut by_id = HashMap::with_capacity(elements.len());
        for (i, el) in elements.iter().enumerate() {
            if by_id.contains_key(el.element_id.as_str()) {
                tracing::warn!(
                    transition_id,
                    element_id = %el.element_id,
                    "duplicate elementId; keeping first occurrence"
                );
                continue;
            }
            by_id.insert(el.element_id.clone(), i);
        }
        tracing::debug!(transition_id, elements = by_id.len(), "built element index");
        Self { by_id }
    }

    pub(crate) fn get(&self, element_id: &str) -> Option<usize> {
        self.by_id.get(element_id).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }
}
