pub mod bootstrap;
pub mod render;
pub mod session;

pub use bootstrap::build_engine;
pub use session::{Input, Session, SessionEvent, View};
