//! Display records supplied to the terminal.
//!
//! The interpreter treats every field as an opaque display string except the
//! project `id`, which must be unique: `open` looks projects up by it and
//! Tab completion offers it.

mod builtin;
mod records;

pub use records::{About, Contact, ContactLink, Content, Education, Experience, Involvement, Project};
