pub mod load_service;
pub mod view_controller;
