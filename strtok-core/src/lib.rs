//! strtok Core - Scanner and granular breakdown (pure logic, no IO)
//!
//! Only operates on in-memory data, no file IO or terminal output.
//! Both entry points are pure functions and safe to call concurrently.
//!
//! ```
//! use strtok_core::{expand, tokenize};
//!
//! let tokens = tokenize("ab");
//! assert_eq!(expand(&tokens), vec!["Token: \"ab\" --> 'a', 'b'"]);
//! ```

pub mod api;
pub mod breakdown;
pub mod scanner;
pub mod token;

// Re-export common types
pub use api::{analyze, AnalyzeOptions, Analysis};
pub use breakdown::{breakdown_line, expand};
pub use scanner::tokenize;
pub use token::{Token, TokenKind};

// Re-export config types from strtok-config
pub use strtok_config::{InputConfig, Phase};
