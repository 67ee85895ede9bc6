//! Presentation helpers shared by the `deskplan` binary and the harness.

pub mod table;
