pub mod config;
pub mod error;
pub mod model;
pub mod qr;
pub mod routes;
pub mod server;
pub mod wallet;
