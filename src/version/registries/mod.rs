//! Catalog implementations for fetching ChromeDriver releases

pub mod storage;

pub use storage::ChromeDriverStorage;
