//! Terminal commands built on the catalog service

pub mod items;
pub mod setup;
pub mod stats;
pub mod ui;
