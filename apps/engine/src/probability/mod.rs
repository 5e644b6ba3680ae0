pub mod estimator;

pub use estimator::ProbabilityEstimator;
