//! Observer hooks fired during a verification run.

pub mod handler;
pub mod dispatcher;

pub use dispatcher::EventDispatcher;
pub use handler::{ParityEventHandler, RunFinished, RunStarted};
