//! Rendering utilities for human-facing surfaces (PR comments, job summaries).

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableReport, RenderableUnit, RenderableUsage, RenderableVerdict,
};
