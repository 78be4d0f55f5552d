pub mod summarizer;
pub mod table_builder;
