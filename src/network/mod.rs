// src/network/mod.rs
mod dns;
mod http;
mod tcp;

pub use dns::dns_resolve_check;
pub use http::{http_get_check, http_get_check_with_statuses, DEFAULT_STATUSES};
pub use tcp::tcp_dial_check;
