pub mod tracker;

pub use tracker::RehabilitationTracker;
