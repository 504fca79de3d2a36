//! Folio: resume and cover letter builder service.

pub mod config;
pub mod enrichment;
pub mod errors;
pub mod export;
pub mod llm_client;
pub mod models;
pub mod render;
pub mod routes;
pub mod session;
pub mod state;
pub mod wizard;
