pub mod cli;
pub mod config;
pub mod errors;
pub mod scanner;
pub mod llm;
pub mod assess;
pub mod report;
pub mod pipeline;
