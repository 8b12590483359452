pub mod commands;
pub mod error;
pub mod pipeline;
pub mod table_io;
#[macro_use]
extern crate log;
