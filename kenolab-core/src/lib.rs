pub mod error;
pub mod export;
pub mod frequency;
pub mod matcher;
pub mod models;
pub mod parse;
pub mod strategy;
