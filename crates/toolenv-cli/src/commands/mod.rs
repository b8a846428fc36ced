//! Command implementations for toolenv-cli

pub mod exec;
pub mod exports;
pub mod reload;
pub mod resolve;
pub mod show;

pub use exec::run_exec;
pub use exports::run_env;
pub use reload::run_reload;
pub use resolve::run_resolve;
pub use show::run_show;
