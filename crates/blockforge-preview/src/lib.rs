//! Preview image generation for blockforge records.
//!
//! The headless-browser dependency is isolated behind the [`Renderer`]
//! trait ("HTML document in, PNG bytes out"), so the batch orchestration in
//! [`generator`] — which records, in what order, how failures are handled —
//! is testable with a fake renderer.

pub mod chrome;
pub mod generator;
pub mod renderer;

pub use chrome::ChromeRenderer;
pub use generator::{PreviewConfig, PreviewGenerator, PreviewOutcome, PreviewTarget};
pub use renderer::{RenderError, Renderer};
