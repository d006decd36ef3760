//! Retrieval client for the managed vector-search pipeline

pub mod client;

pub use client::{PipelineClient, RetrievedPassage, SearchData, SearchUsage};
