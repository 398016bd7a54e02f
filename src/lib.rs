pub mod catalog;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod report;
pub mod service;
