pub mod assets;
pub mod export;
pub mod persistence;
pub mod version;
