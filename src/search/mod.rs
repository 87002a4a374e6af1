mod debounce;
mod overlay;
mod query;

pub use debounce::DebounceSlot;
pub use overlay::{SearchOverlay, SearchOverlayProps};
pub use query::{Exit, QueryAction, QueryState, Selection, Ticket};
