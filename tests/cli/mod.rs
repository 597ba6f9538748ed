mod compare;
mod config;
mod errors;
mod listing;
mod misc;
mod route;
pub mod support;
