// Repository interfaces (ports)
// Implementations live in the infrastructure layer

pub mod errors;
pub mod player_repository;
pub mod team_repository;

pub use errors::StoreError;
pub use player_repository::PlayerRepository;
pub use team_repository::{TeamOrder, TeamRepository};
