mod route_reconstructor;

pub use route_reconstructor::reconstruct;
