//! Streaming primitives for shell-first SSR.
//!
//! - `StreamingSink` - Writes the shell, then named sections, in order
//! - `Shell` / `HeadContent` - Document frame around the sections
//! - `escape_html` - Escaping for text and attribute values

mod shell;
mod sink;

pub use shell::*;
pub use sink::*;
