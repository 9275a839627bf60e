//! Built-in text tools

mod optimize;
mod reasoning;
mod summarize;
mod translate;
mod verify;

pub use optimize::OptimizePromptTool;
pub use reasoning::ReasoningChainTool;
pub use summarize::SummarizeTextTool;
pub use translate::TranslateTextTool;
pub use verify::VerifyStatementTool;

use super::base::TextTool;
use std::sync::Arc;

/// The full catalogue, in the order it is advertised
pub fn default_tools() -> Vec<Arc<dyn TextTool>> {
    vec![
        Arc::new(VerifyStatementTool),
        Arc::new(ReasoningChainTool),
        Arc::new(OptimizePromptTool),
        Arc::new(TranslateTextTool),
        Arc::new(SummarizeTextTool),
    ]
}
