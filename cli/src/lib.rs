pub mod clock_task;
pub mod commands;
pub mod context;
pub mod repl;
pub mod settings;

pub use context::CliContext;
pub use repl::readline;
