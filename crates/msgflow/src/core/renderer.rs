//! Core renderer trait for diagram output

use anyhow::Result;

/// Core trait for diagram renderers
///
/// # Example
/// ```
/// use msgflow::core::Renderer;
/// use msgflow::flow::{MsgFlowDatabase, MsgFlowRenderer};
///
/// let db = MsgFlowDatabase::new();
/// let renderer = MsgFlowRenderer::new();
/// let output = renderer.render(&db).unwrap();
/// assert_eq!(output, "   \n");
/// ```
pub trait Renderer<D>: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the database into the output format
    fn render(&self, database: &D) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}
