pub mod menu_service;
pub mod parse;
pub mod request;
pub mod runtime;
