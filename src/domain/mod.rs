// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod player;
pub mod repositories;
pub mod roster;
pub mod team;
