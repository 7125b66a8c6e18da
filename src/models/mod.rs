pub mod summary;
pub mod workload;

pub use summary::*;
pub use workload::*;
