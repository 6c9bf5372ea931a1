pub mod command;
pub mod run;

pub use command::{Cli, LogFormat};
pub use run::{run_app, serve};
