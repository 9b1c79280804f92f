pub mod config;
pub mod error;
pub mod locale;
pub mod shopping;
pub mod text;
pub mod types;

// Keep the public surface small and intentional.
pub use config::*;
pub use error::*;
pub use locale::*;
pub use shopping::*;
pub use text::*;
pub use types::*;
