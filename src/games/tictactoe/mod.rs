mod action;
mod contracts;
mod game;
mod position;
mod snapshot;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{MoveError, MoveReport};
pub use contracts::{Contract, LegalMove, MoveContract, SingleCellFilled};
pub use game::GameState;
pub use position::Position;
pub use snapshot::GameSnapshot;
pub use status::Status;
pub use types::{Board, Player, Square};
