pub mod divergence_detector;

pub use divergence_detector::IDivergenceDetector;
