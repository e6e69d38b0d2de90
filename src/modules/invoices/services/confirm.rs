use async_trait::async_trait;

use crate::core::currency::Currency;

/// Confirmation port for the currency change flow.
///
/// The orchestrator awaits the answer before converting anything, so a UI
/// can hang a non-blocking dialog off this and tests can script the reply.
#[async_trait]
pub trait ConversionPrompt: Send + Sync {
    /// Ask whether all amounts should be converted from `from` to `to`.
    async fn confirm(&self, from: Currency, to: Currency) -> bool;
}

/// Prompt that approves every conversion, for headless callers.
pub struct AutoApprove;

#[async_trait]
impl ConversionPrompt for AutoApprove {
    async fn confirm(&self, _from: Currency, _to: Currency) -> bool {
        true
    }
}
