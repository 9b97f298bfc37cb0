//! Jupyter backend tests
//!
//! End-to-end conversion checks against the emitted ipynb JSON.

mod degradation;
mod export;
mod merge;
