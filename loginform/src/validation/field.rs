use super::FieldKind;

/// Identifies one of the form's inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Email,
    Password,
}

impl FieldId {
    /// Predicate used for this input.
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Email => FieldKind::Email,
            Self::Password => FieldKind::Password,
        }
    }

    /// Input label as shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "E-Mail",
            Self::Password => "Password",
        }
    }
}

/// Transition applied to a [`FieldState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    /// New raw value from a keystroke.
    Change(String),
    /// Focus left the input; revalidate the current value.
    Blur,
    /// Back to the initial empty, neutral state.
    Reset,
}

/// Raw value of one input plus its derived validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    is_valid: bool,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            value: String::new(),
            is_valid: true,
        }
    }
}

impl FieldState {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Compute the next state. Pure: `self` is left untouched.
    pub fn reduce(&self, kind: FieldKind, action: FieldAction) -> Self {
        match action {
            FieldAction::Change(value) => Self {
                is_valid: kind.validate(&value),
                value,
            },
            FieldAction::Blur => Self {
                value: self.value.clone(),
                is_valid: kind.validate(&self.value),
            },
            FieldAction::Reset => Self::default(),
        }
    }
}
