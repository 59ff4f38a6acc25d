//! Field validation for the login form.
//!
//! Each input owns a [`FieldState`] that only changes through the pure
//! reducer [`FieldState::reduce`]. The validity flag is always derived from
//! the field's predicate, except for the neutral `true` the state is seeded
//! with so an untouched form shows no errors.
//!
//! # Example
//!
//! ```ignore
//! use loginform::validation::{FieldAction, FieldKind, FieldState};
//!
//! let state = FieldState::default()
//!     .reduce(FieldKind::Email, FieldAction::Change("noatsign".into()));
//! assert!(!state.is_valid());
//! ```

mod field;
mod rules;

pub use field::{FieldAction, FieldId, FieldState};
pub use rules::{FieldKind, MIN_PASSWORD_LEN, validate_email, validate_password};
