//! Fluent assertions with readable failure messages.
//!
//! ```no_run
//! use affirm::prelude::*;
//!
//! fn check(name: &str) -> Result<(), affirm::Error> {
//!     name.should().because("names are capitalised").start_with("A")?;
//!     Ok(())
//! }
//! ```
//!
//! Every check consumes the assertion and returns `Result<Self, Error>`, so
//! checks chain with `?` and a false assertion surfaces as [`Error::Failed`]
//! carrying the message.
//! Misuse of the API, such as a negative tolerance or an empty pattern, is
//! reported as [`Error::Usage`] before anything is compared.

pub mod boolean;
pub mod context;
pub mod guid;
pub mod object;
pub mod reference;
pub mod scope;
pub mod should;
pub mod string;
pub mod temporal;
pub mod variant;

pub use affirm_core::{
    AssertConfig, AssertionFailed, ConfigOverrides, Culture, EqualityComparer, Error, Reason,
    StringOptions, Tolerance, UsageError, apply_overrides, load_config,
};
pub use boolean::BooleanAssertions;
pub use context::{Context, WithContext};
pub use guid::GuidAssertions;
pub use object::ObjectAssertions;
pub use reference::ReferenceAssertions;
pub use scope::AssertionScope;
pub use should::{Should, that, that_any, that_enum, that_opt, that_ref};
pub use string::StringAssertions;
pub use temporal::{TemporalAssertions, TemporalSubject};
pub use variant::EnumAssertions;

pub mod prelude {
    pub use crate::context::WithContext;
    pub use crate::should::{Should, that, that_enum, that_ref};
}
