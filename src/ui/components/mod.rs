#[cfg(not(target_arch = "wasm32"))]
pub mod export;
pub mod filters;
pub mod pagination;
pub mod summary;
pub mod table;
