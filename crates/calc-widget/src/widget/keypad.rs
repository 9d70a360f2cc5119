//! Calculator keypad layout and button actions
//!
//! Layout:
//! ```text
//! [ C ] [DEL] [ / ] [ * ]
//! [ 7 ] [ 8 ] [ 9 ] [ - ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 1 ] [ 2 ] [ 3 ] [ = ]
//! [ 0 ] [ . ]
//! ```

use serde::{Deserialize, Serialize};

use super::dom::DomElement;
use crate::core::{CalcError, CalcResult, Operation};

/// Actions that keypad buttons perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeypadAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert a decimal point
    Decimal,
    /// Select an operator
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Reset the calculator
    Clear,
    /// Remove the last character
    Delete,
}

impl KeypadAction {
    /// Character the engine receives for digit and decimal buttons
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(_) | Self::Equals | Self::Clear | Self::Delete => None,
        }
    }

    /// Button label
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }

    /// Single-character token used in key sequences
    ///
    /// `D` stands for delete; everything else is its label.
    #[must_use]
    pub fn token(&self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).unwrap_or('?'),
            Self::Decimal => '.',
            Self::Operator(op) => op.symbol().chars().next().unwrap_or('?'),
            Self::Equals => '=',
            Self::Clear => 'C',
            Self::Delete => 'D',
        }
    }

    /// Parses a key sequence token
    #[must_use]
    pub fn from_token(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            'D' | 'd' => Some(Self::Delete),
            _ => Operation::from_symbol(ch).map(Self::Operator),
        }
    }
}

/// Parses a key sequence such as `"12+3.5="` into actions
///
/// Whitespace is ignored; any other unknown token fails the whole parse.
pub fn parse_sequence(sequence: &str) -> CalcResult<Vec<KeypadAction>> {
    sequence
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| {
            KeypadAction::from_token(ch)
                .ok_or_else(|| CalcError::invalid_input(format!("unknown key '{ch}'")))
        })
        .collect()
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            action,
            id: button_id(action),
            row,
            col,
        }
    }
}

/// DOM element ID for the button performing `action`
#[must_use]
pub fn button_id(action: KeypadAction) -> String {
    match action {
        KeypadAction::Digit(d) => format!("btn-{d}"),
        KeypadAction::Decimal => "btn-decimal".to_string(),
        KeypadAction::Operator(op) => format!("btn-{}", op_name(op)),
        KeypadAction::Equals => "btn-equals".to_string(),
        KeypadAction::Clear => "btn-clear".to_string(),
        KeypadAction::Delete => "btn-delete".to_string(),
    }
}

const fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

/// Keypad grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{Clear, Decimal, Delete, Digit, Equals, Operator};

        let add = Some(Operator(Operation::Add));
        let sub = Some(Operator(Operation::Subtract));
        let mul = Some(Operator(Operation::Multiply));
        let div = Some(Operator(Operation::Divide));
        let digit = |d| Some(Digit(d));

        let layout = [
            [Some(Clear), Some(Delete), div, mul],
            [digit(7), digit(8), digit(9), sub],
            [digit(4), digit(5), digit(6), add],
            [digit(1), digit(2), digit(3), Some(Equals)],
            [digit(0), Some(Decimal), None, None],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter_map(move |(col, cell)| cell.map(|a| KeypadButtonDef::new(a, row, col)))
            })
            .collect();

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the button at a grid cell, if that cell holds one
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button performing `action`
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Maps a clicked element ID to its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.buttons.iter().fold(
            DomElement::new("div").with_id("keypad").with_class("keypad"),
            |keypad, btn| keypad.with_child(Self::button_element(btn)),
        )
    }

    /// Creates the DOM element for one button
    #[must_use]
    pub fn button_element(btn: &KeypadButtonDef) -> DomElement {
        let kind = match btn.action {
            KeypadAction::Digit(_) | KeypadAction::Decimal => "btn-number",
            KeypadAction::Operator(_) => "btn-operator",
            KeypadAction::Equals => "btn-equals",
            KeypadAction::Clear | KeypadAction::Delete => "btn-function",
        };
        DomElement::new("button")
            .with_id(&btn.id)
            .with_text(&btn.action.label())
            .with_class("btn")
            .with_class(kind)
            .with_attr("data-row", &btn.row.to_string())
            .with_attr("data-col", &btn.col.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_to_char() {
        for d in 0..=9 {
            assert_eq!(
                KeypadAction::Digit(d).to_char(),
                char::from_digit(u32::from(d), 10)
            );
        }
        assert_eq!(KeypadAction::Decimal.to_char(), Some('.'));
        assert_eq!(KeypadAction::Equals.to_char(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(KeypadAction::Operator(Operation::Multiply).label(), "*");
        assert_eq!(KeypadAction::Delete.label(), "DEL");
        assert_eq!(KeypadAction::Clear.label(), "C");
    }

    #[test]
    fn test_token_round_trip() {
        for btn in Keypad::new().buttons() {
            assert_eq!(KeypadAction::from_token(btn.action.token()), Some(btn.action));
        }
    }

    #[test]
    fn test_parse_sequence() {
        let actions = parse_sequence("12 + 3.5 =").unwrap();
        assert_eq!(
            actions,
            vec![
                KeypadAction::Digit(1),
                KeypadAction::Digit(2),
                KeypadAction::Operator(Operation::Add),
                KeypadAction::Digit(3),
                KeypadAction::Decimal,
                KeypadAction::Digit(5),
                KeypadAction::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_sequence_rejects_unknown_key() {
        let err = parse_sequence("2^3").unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(ref d) if d.contains('^')));
    }

    #[test]
    fn test_parse_sequence_rejects_letter_x() {
        assert!(parse_sequence("1x2=").is_err());
        assert_eq!(
            parse_sequence("1×2").unwrap()[1],
            KeypadAction::Operator(Operation::Multiply)
        );
    }

    #[test]
    fn test_keypad_layout() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 18);
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(
            keypad.get_button_at(0, 0).map(|b| b.action),
            Some(KeypadAction::Clear)
        );
        assert_eq!(
            keypad.get_button_at(3, 3).map(|b| b.action),
            Some(KeypadAction::Equals)
        );
        assert!(keypad.get_button_at(4, 3).is_none());
    }

    #[test]
    fn test_button_ids() {
        assert_eq!(button_id(KeypadAction::Digit(7)), "btn-7");
        assert_eq!(
            button_id(KeypadAction::Operator(Operation::Divide)),
            "btn-divide"
        );
        assert_eq!(button_id(KeypadAction::Delete), "btn-delete");
    }

    #[test]
    fn test_handle_click() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.handle_click("btn-times"),
            Some(KeypadAction::Operator(Operation::Multiply))
        );
        assert_eq!(keypad.handle_click("nav-home"), None);
    }

    #[test]
    fn test_keypad_element() {
        let keypad = Keypad::new();
        let elem = keypad.create_keypad_element();
        assert_eq!(elem.id, "keypad");
        assert_eq!(elem.children.len(), keypad.button_count());
        let equals = elem.children.iter().find(|c| c.id == "btn-equals").unwrap();
        assert!(equals.has_class("btn-equals"));
        assert_eq!(equals.text_content, "=");
    }
}
