// SPDX-FileCopyrightText: The ecard authors
// SPDX-License-Identifier: MPL-2.0

use std::collections::{BTreeMap, BTreeSet};

use super::{ARIA_DISABLED, Control, ControlId, Surface};

/// An element that only records its state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryControl {
    anchor: bool,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    text: String,
    inner_html: String,
}

impl MemoryControl {
    /// Create an `<a>` element.
    #[must_use]
    pub fn anchor() -> Self {
        Self {
            anchor: true,
            ..Default::default()
        }
    }

    /// Create a non-navigational element.
    #[must_use]
    pub fn element() -> Self {
        Self::default()
    }

    /// Read an attribute.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Read an inline style property.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    /// Check for a CSS class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// The `class` attribute value, i.e. all classes separated by spaces.
    #[must_use]
    pub fn class_name(&self) -> String {
        itertools::join(&self.classes, " ")
    }

    /// The text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The inner markup.
    #[must_use]
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Check for `aria-disabled="true"`.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.attr(ARIA_DISABLED) == Some("true")
    }

    /// Check for `display: none`.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.style("display") == Some("none")
    }

    /// The `href` attribute.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.attr("href")
    }
}

impl Control for MemoryControl {
    fn is_anchor(&self) -> bool {
        self.anchor
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attr(name).map(ToOwned::to_owned)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    fn set_style(&mut self, property: &str, value: &str) {
        if value.is_empty() {
            self.styles.remove(property);
        } else {
            self.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_owned());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn set_inner_html(&mut self, html: &str) {
        html.clone_into(&mut self.inner_html);
    }
}

/// A surface that keeps its controls in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    controls: BTreeMap<ControlId, MemoryControl>,
}

impl MemorySurface {
    /// Create a surface without any controls.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a surface with every control of the card.
    #[must_use]
    pub fn with_all_controls() -> Self {
        ControlId::ALL.into_iter().collect()
    }

    /// Add or replace a control.
    pub fn insert(&mut self, id: ControlId, control: MemoryControl) {
        self.controls.insert(id, control);
    }

    /// Remove a control.
    pub fn remove(&mut self, id: ControlId) -> Option<MemoryControl> {
        self.controls.remove(&id)
    }

    /// Inspect a control.
    #[must_use]
    pub fn get(&self, id: ControlId) -> Option<&MemoryControl> {
        self.controls.get(&id)
    }
}

impl FromIterator<ControlId> for MemorySurface {
    fn from_iter<T: IntoIterator<Item = ControlId>>(iter: T) -> Self {
        let controls = iter
            .into_iter()
            .map(|id| {
                let control = if id.is_anchor() {
                    MemoryControl::anchor()
                } else {
                    MemoryControl::element()
                };
                (id, control)
            })
            .collect();
        Self { controls }
    }
}

impl Surface for MemorySurface {
    fn control(&mut self, id: ControlId) -> Option<&mut dyn Control> {
        self.controls
            .get_mut(&id)
            .map(|control| control as &mut dyn Control)
    }
}
