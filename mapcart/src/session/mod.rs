//! Asynchronous session around the selection workflow.
//!
//! The workflow itself is synchronous. A [`Session`] puts a single command
//! queue in front of it so surface events, user actions and finished name
//! lookups are applied strictly one after another:
//!
//! ```text
//! SessionHandle ──┐
//! SessionHandle ──┼──► mpsc queue ──► Session::dispatch ──► SelectionWorkflow
//! lookup task ────┘                        │
//!      ▲                                   │ ShapeCreated
//!      └──── tokio::spawn(resolve) ◄───────┘
//! ```

mod command;
mod runner;

pub use command::{SessionClosed, SessionCommand, SessionHandle};
pub use runner::Session;
