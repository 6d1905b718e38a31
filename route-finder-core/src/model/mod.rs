pub mod network;
pub mod route;
