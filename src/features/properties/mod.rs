pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod schemas;
pub mod service;

#[cfg(test)]
mod tests;
