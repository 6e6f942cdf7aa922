// Team domain module
// Contains the team aggregate root and its value objects

#![allow(clippy::module_inception)]

pub mod team;
pub mod value_objects;

pub use team::{RosterError, Team, MAX_ROSTER_SIZE};
pub use value_objects::TeamDetails;
