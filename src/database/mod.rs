// src/database/mod.rs
mod ping;
mod pinger;

pub use ping::database_ping_check;
pub use pinger::Pinger;
