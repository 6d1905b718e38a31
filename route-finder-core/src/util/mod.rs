pub mod cancellation;
pub mod priority_queue;
