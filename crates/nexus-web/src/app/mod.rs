pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod format;
pub mod loading;
pub mod logging;
pub mod notify;
pub mod pages;
pub mod routes;
pub mod storage;
