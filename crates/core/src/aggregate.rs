//! Aggregate root trait for state-stored domain models.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// An aggregate root is the only entity of its cluster that outside code may
/// hold on to; every state change goes through its methods so the cluster's
/// invariants are checked in one place.
pub trait AggregateRoot: Entity {}
