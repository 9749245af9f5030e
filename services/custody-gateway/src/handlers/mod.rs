pub mod committee;
pub mod proposal;
pub mod snapshot;
