pub mod config_store;
pub mod menu_service;
pub mod runtime_controller;
