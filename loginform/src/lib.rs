//! Login form core: per-field validation reducers, a debounced aggregate
//! validator gating submission, and the session shell that remembers whether
//! the user is logged in.
//!
//! # Example
//!
//! ```ignore
//! use loginform::prelude::*;
//!
//! let mut form = FormValidator::new(FormConfig::default())?;
//! form.change(FieldId::Email, "ada@example.com");
//! form.change(FieldId::Password, "correct horse");
//!
//! // One second later the debounced evaluation enables submission.
//! tokio::time::sleep(form.config().debounce).await;
//! form.submit(&mut |email: &str, password: &str| {
//!     println!("login as {email}");
//! })?;
//! ```

pub mod error;
pub mod form;
pub mod session;
pub mod state;
pub mod task;
pub mod validation;
pub mod wakeup;

pub use error::{FormError, StoreError, SubmitError};

pub mod prelude {
    pub use crate::error::{FormError, StoreError, SubmitError};
    pub use crate::form::{AuthCallback, FormConfig, FormState, FormValidator};
    pub use crate::session::{MemoryStore, PersistenceStore, Session, View};
    pub use crate::state::State;
    pub use crate::validation::{FieldAction, FieldId, FieldKind, FieldState};
    pub use crate::wakeup::{WakeupReceiver, WakeupSender};
}
