//! Change notifications pushed by the hosted store, and the pub/sub plumbing
//! that delivers them to the dashboard.

pub mod bus;
pub mod in_memory_bus;
pub mod notification;

pub use bus::{EventBus, Subscription};
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use notification::{ChangeKind, ChangeNotification, WatchedTable};
