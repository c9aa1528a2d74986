// Start of file: /src/config/mod.rs

/*
* Configuration loaded at startup (environment variables) and the
* AppState handed to every router.
*/

pub mod environment;
pub mod state;

pub use environment::EnvironmentVariables;
pub use state::AppState;

// End of file: /src/config/mod.rs
