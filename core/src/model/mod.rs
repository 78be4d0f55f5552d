pub mod session;
pub mod stats;
pub mod table;
