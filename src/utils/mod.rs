//! Utility functions shared by the analytics components.

pub mod stats;

pub use stats::{
    mean, min_max, population_std_dev, population_variance, sample_std_dev, sample_variance,
};
