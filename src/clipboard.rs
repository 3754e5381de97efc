use copypasta_ext::prelude::*;

use crate::errors::AppError;

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), AppError>;
}

/// System clipboard; the provider is picked lazily on first copy.
#[derive(Default)]
pub struct SystemClipboard {
    context: Option<Box<dyn ClipboardProviderExt>>,
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), AppError> {
        if self.context.is_none() {
            self.context = copypasta_ext::try_context();
        }

        let context = self
            .context
            .as_mut()
            .ok_or_else(|| AppError::Clipboard(String::from("no clipboard provider available")))?;

        context
            .set_contents(text.to_string())
            .map_err(|e| AppError::Clipboard(e.to_string()))?;

        log::debug!("copied {} chars to clipboard", text.chars().count());
        Ok(())
    }
}
