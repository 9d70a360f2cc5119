//! In-memory DOM for the calculator page
//!
//! Gives the widget somewhere to render and receive clicks without a
//! browser, so the dispatch and render paths run in ordinary tests.

use std::collections::HashMap;

use super::keypad::Keypad;

/// Element ID of the display text field
pub const DISPLAY_ID: &str = "display";
/// Element ID of the status line
pub const RESULT_ID: &str = "result";
/// Most recent events kept by [`MockDom`]
pub const EVENT_HISTORY_LIMIT: usize = 256;

/// Represents a DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes, including `value` for inputs
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Sets the `value` attribute, as for a text field
    pub fn set_value(&mut self, value: &str) {
        self.attributes.insert("value".to_string(), value.to_string());
    }

    /// The `value` attribute
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.get_attr("value")
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Replaces the class list, like assigning `className`
    pub fn set_class_name(&mut self, class_name: &str) {
        self.classes = class_name.split_whitespace().map(str::to_string).collect();
    }

    /// Class list joined by spaces
    #[must_use]
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events the page can dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Page finished loading
    ContentLoaded,
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// Mock DOM holding elements by ID plus the events it has seen
///
/// Elements live in the ID registry only. `layout` records the page
/// structure; [`MockDom::root`] fills it from the registry.
#[derive(Debug)]
pub struct MockDom {
    layout: DomElement,
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            layout: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator page: display field, status line and keypad
    #[must_use]
    pub fn calculator(keypad: &Keypad) -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("input")
            .with_id(DISPLAY_ID)
            .with_attr("type", "text")
            .with_attr("readonly", "readonly")
            .with_attr("value", "0");
        let result = DomElement::new("div").with_id(RESULT_ID);
        let keypad_elem = keypad.create_keypad_element();

        dom.layout = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(display.clone())
            .with_child(result.clone())
            .with_child(keypad_elem.clone());

        dom.register_element(display);
        dom.register_element(result);
        for button in &keypad_elem.children {
            dom.register_element(button.clone());
        }
        dom.register_element(keypad_elem);

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// The page tree with every registered element in its current state
    #[must_use]
    pub fn root(&self) -> DomElement {
        self.resolve(&self.layout)
    }

    fn resolve(&self, element: &DomElement) -> DomElement {
        let mut current = if element.id.is_empty() {
            element.clone()
        } else {
            self.elements
                .get(&element.id)
                .cloned()
                .unwrap_or_else(|| element.clone())
        };
        current.children = current.children.iter().map(|c| self.resolve(c)).collect();
        current
    }

    /// Records an event, keeping the last [`EVENT_HISTORY_LIMIT`]
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
        if self.event_history.len() > EVENT_HISTORY_LIMIT {
            let excess = self.event_history.len() - EVENT_HISTORY_LIMIT;
            self.event_history.drain(..excess);
        }
    }

    /// Gets the most recent events, oldest first
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Updates an input element's value by ID
    pub fn set_element_value(&mut self, id: &str, value: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_value(value);
        }
    }

    /// Gets an input element's value by ID
    #[must_use]
    pub fn get_element_value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(DomElement::value)
    }

    /// Replaces an element's class list by ID
    pub fn set_element_class_name(&mut self, id: &str, class_name: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_class_name(class_name);
        }
    }
}
