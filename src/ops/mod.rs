pub mod drag;
pub mod filter;
pub mod list;
pub mod preview;
pub mod store;

pub use drag::DragState;
pub use filter::{FilterCounts, filter_tasks};
pub use list::TaskList;
pub use preview::project;
pub use store::{StoreError, TaskStore};
