//! Error types for the share controller.
//!
//! Only two things can go wrong: the rasterizer rejects the content, or a
//! platform API rejects (or lacks) a share channel. A user dismissing the
//! share sheet is not an error and never reaches these types.

use miette::Diagnostic;

/// Rasterization of the content node failed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum RenderError {
    /// The rasterizer rejected the node (tainted cross-origin resources, detached node...).
    #[error("rasterizer rejected the content: {0}")]
    #[diagnostic(code(sharecard::render::rejected))]
    Rejected(String),

    /// The rasterizer resolved without producing an image.
    #[error("rasterizer produced no image")]
    #[diagnostic(code(sharecard::render::empty))]
    Empty,
}

/// A platform share channel failed or is missing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ShareError {
    /// The channel does not exist in this environment, or refuses this payload.
    #[error("{0} is not supported here")]
    #[diagnostic(
        code(sharecard::share::unsupported),
        help("fall back to downloading the image and sharing it manually")
    )]
    Unsupported(&'static str),

    /// The platform API was invoked and rejected.
    #[error("{api} failed: {message}")]
    #[diagnostic(code(sharecard::share::rejected))]
    Rejected { api: &'static str, message: String },
}

impl ShareError {
    pub fn rejected(api: &'static str, message: impl Into<String>) -> Self {
        Self::Rejected {
            api,
            message: message.into(),
        }
    }
}

/// Any failure surfaced at a controller action boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ControllerError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Share(#[from] ShareError),
}
