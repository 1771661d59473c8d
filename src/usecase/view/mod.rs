pub mod filter;
pub mod options;
pub mod paginate;
pub mod sort;
pub mod summary;
