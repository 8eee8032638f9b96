mod driver;
mod session;

pub use driver::{CountdownDriver, DEFAULT_TICK_INTERVAL};
pub use session::{FocusSession, FocusStatus};
