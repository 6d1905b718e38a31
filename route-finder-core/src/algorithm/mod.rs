pub mod reconstruct;
pub mod search;
