pub mod connection;
pub mod error;
pub mod models;
pub mod state;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod components;
#[cfg(feature = "gui")]
pub mod theme;
#[cfg(feature = "gui")]
pub mod views;
