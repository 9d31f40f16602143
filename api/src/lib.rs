// Library exports for testing and external use

pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
