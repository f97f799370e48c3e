//! Validator combinators
//!
//! Combinators build new validators out of existing ones. Every value type
//! participates through the [`Parsed`](crate::validators::Parsed) adapter.
//!
//! - [`And`] / [`and`]: both must pass
//! - [`Or`] / [`or`]: at least one must pass
//! - [`Not`] / [`not`]: inverts the result
//! - [`WithMessage`] / [`with_message`] / [`with_code`]: rewrites the error

pub mod and;
pub mod message;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use message::{WithCode, WithMessage, with_code, with_message};
pub use not::{Not, not};
pub use or::{Or, or};
