pub mod bounds;
pub mod export;
pub mod input;
pub mod render;
pub mod report;
pub mod search;
pub mod tournament;
