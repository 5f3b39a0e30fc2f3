//! # Web API Request Handlers

pub mod app;
