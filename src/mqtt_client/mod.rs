pub mod client;
pub mod fun_with_tls;
pub mod models;
