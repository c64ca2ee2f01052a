//! Value objects - Immutable objects defined by their attributes

mod game_event;
mod history;
pub(crate) mod lenient;
mod roll;

pub use game_event::{GameEvent, RollNarration};
pub use history::HistoryEntry;
pub use roll::RollOutcome;

#[cfg(test)]
pub use game_event::{DangerLevel, Stat};
#[cfg(test)]
pub use history::HistoryRole;
