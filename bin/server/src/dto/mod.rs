pub mod chat;
pub mod common;
pub mod meta;

pub use chat::*;
pub use common::*;
pub use meta::*;
