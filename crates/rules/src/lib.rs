//! Rule model and generator-unit composition.
//!
//! A generator unit is a pure function `Fn(&Theme) -> Result<RuleSet>`: it
//! reads the theme and returns the class-name-to-rule mappings it owns.
//! Units are registered on a [`Config`] builder and composed once by
//! [`Config::resolve`] into per-class buckets; nothing mutates shared state
//! behind the builder's back.
//!
//! Rule bodies are lists of [`Entry`] values: plain declarations, or nested
//! blocks whose selector carries a `&` placeholder for the generated class
//! (`& > * + *`). Parameterized units map a class prefix over a
//! [`ValueDomain`] drawn from one theme scale, optionally emitting
//! sign-flipped `-prefix-key` twins and filtering the domain by accepted
//! value type.

mod config;
mod declaration;
mod rule;
mod value;

pub use crate::config::{Bucket, Config, DEFAULT_VARIANTS, Resolved};
pub use crate::declaration::{Declaration, Entry, decl};
pub use crate::rule::{MatchOptions, Rule, RuleSet, ValueDomain};
pub use crate::value::{ValueType, negate};
