//! Anomaly detection over sample sequences.

mod anomaly;

pub use anomaly::{detect_anomalies, z_scores, Anomaly};
