pub mod entities;
pub mod snapshot;
