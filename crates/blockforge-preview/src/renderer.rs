//! The render capability seam.

/// Renders a complete HTML document to PNG bytes.
pub trait Renderer {
    fn render(&mut self, html: &str) -> Result<Vec<u8>, RenderError>;
}

/// Errors from a render backend.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("browser error: {0}")]
    Browser(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
