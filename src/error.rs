//! Error kinds of the extraction pipeline.
//!
//! Per-detection errors (`DegenerateBox`, `EmptyRegion`,
//! `UnsupportedOrientation`) are local and non-fatal: the pipeline skips
//! the detection, counts the skip and continues. `InvalidImage` is the one
//! fatal class: without readable source imagery no geometry can run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to decode image: {0}")]
    InvalidImage(String),

    #[error("degenerate detection box: {width}x{height}")]
    DegenerateBox { width: f32, height: f32 },

    #[error("extracted region is empty after padding")]
    EmptyRegion,

    #[error("unsupported face orientation: {0}")]
    UnsupportedOrientation(String),
}
