//! `codefix-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the domain error model, typed identifiers, entity/aggregate traits and the
//! shared field-validation helpers.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod validation;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
