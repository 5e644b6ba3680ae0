pub mod tracker;

pub use tracker::MomentumTracker;
