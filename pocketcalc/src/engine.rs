//! Four-function calculator state machine
//!
//! Every key press arrives as its label string. Digits and the decimal
//! point build up the display text, an operator commits the display as the
//! pending operand, and "=" applies the pending operator to whatever has
//! been typed since.
//!
//! Nothing here can fail: text that does not parse as a number is ignored,
//! and arithmetic follows IEEE-754 (so `6 ÷ 0` is `inf`).

/// Label of the evaluate key.
pub const EQUALS: &str = "=";
/// Label of the reset control.
pub const CLEAR: &str = "Clear";

/// Binary operators on the keypad.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Match a key label. Both the ASCII hyphen and U+2212 mean subtract.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "+" => Some(Operator::Add),
            "-" | "\u{2212}" => Some(Operator::Subtract),
            "×" => Some(Operator::Multiply),
            "÷" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// The label printed on the key.
    pub fn label(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }
}

/// A classified key press.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Input {
    /// A digit or the decimal point, appended verbatim.
    Entry(char),
    Operator(Operator),
    Evaluate,
    Clear,
}

impl Input {
    /// Classify a key label. Returns `None` for labels that are not on the
    /// keypad.
    pub fn parse(label: &str) -> Option<Self> {
        if let Some(op) = Operator::from_label(label) {
            return Some(Input::Operator(op));
        }
        match label {
            EQUALS => Some(Input::Evaluate),
            CLEAR => Some(Input::Clear),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() || c == '.' => Some(Input::Entry(c)),
                    _ => None,
                }
            }
        }
    }
}

/// Display text, pending operand and selected operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    pending_operand: f64,
    selected_operator: Option<Operator>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: String::new(),
            pending_operand: 0.0,
            selected_operator: None,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operand(&self) -> f64 {
        self.pending_operand
    }

    pub fn selected_operator(&self) -> Option<Operator> {
        self.selected_operator
    }

    /// Handle one key press by label.
    ///
    /// Returns `false` when the label is not a keypad label; the state is
    /// left untouched in that case.
    pub fn handle_input(&mut self, label: &str) -> bool {
        match Input::parse(label) {
            Some(input) => {
                self.apply(input);
                tracing::trace!(label, display = %self.display, "handled key");
                true
            }
            None => {
                tracing::debug!(label, "ignoring unknown key label");
                false
            }
        }
    }

    /// Apply an already classified key press.
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Entry(c) => self.display.push(c),
            Input::Operator(op) => self.select_operator(op),
            Input::Evaluate => self.evaluate(),
            Input::Clear => self.clear(),
        }
    }

    fn select_operator(&mut self, op: Operator) {
        // An empty or malformed display keeps the previous operand.
        if let Some(number) = parse_number(&self.display) {
            self.pending_operand = number;
        }
        self.selected_operator = Some(op);
        self.display.clear();
    }

    fn evaluate(&mut self) {
        if let Some(number) = parse_number(&self.display) {
            self.display = self.perform_calculation(number);
        }
        self.selected_operator = None;
    }

    /// Apply the selected operator to the pending operand and `rhs`.
    /// Without a selected operator the result is the empty string.
    pub fn perform_calculation(&self, rhs: f64) -> String {
        match self.selected_operator {
            Some(op) => format_result(apply_operator(self.pending_operand, op, rhs)),
            None => String::new(),
        }
    }

    pub fn clear(&mut self) {
        self.display.clear();
        self.pending_operand = 0.0;
        self.selected_operator = None;
    }
}

pub fn apply_operator(lhs: f64, op: Operator, rhs: f64) -> f64 {
    match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => lhs / rhs,
    }
}

/// Two decimals, or none when both would be zero.
///
/// Rounding is of the exact binary value, so 5.505 (stored as 5.50499...)
/// becomes "5.50". Non-finite values render as `inf`, `-inf` and `nan`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let two_places = format!("{:.2}", value);
    if two_places.ends_with(".00") {
        format!("{:.0}", value)
    } else {
        two_places
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}
