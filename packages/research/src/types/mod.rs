pub mod article;
pub mod config;
pub mod keyword;
pub mod workspace;
