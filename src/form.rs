use crate::errors::{ FormError, GenerationError, LengthError, SubmitBlocked };
use crate::generators::{ CharClass, ClassFlags };
use crate::password::{ generate, generate_with, GeneratedPassword, PasswordRequest, RngTier };
use crate::validation::{ can_submit, check_request, validate_length };

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Ready,
}

#[derive(Debug, Default)]
pub struct PasswordForm {
    length_input: String,
    touched: bool,
    flags: ClassFlags,
    password: Option<GeneratedPassword>,
    tier: RngTier,
}

impl PasswordForm {
    pub const LENGTH_PLACEHOLDER: &'static str = "Ex. 8";

    pub fn new(tier: RngTier) -> Self {
        Self {
            tier,
            ..Default::default()
        }
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn flags(&self) -> ClassFlags {
        self.flags
    }

    pub fn tier(&self) -> RngTier {
        self.tier
    }

    pub fn set_length(&mut self, text: &str) {
        self.length_input = text.to_string();
        self.touched = true;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.flags.toggle(class);
    }

    pub fn set_class(&mut self, class: CharClass, on: bool) {
        self.flags.set(class, on);
    }

    /// Inline error for the length field; hidden until the field is edited.
    pub fn length_error(&self) -> Option<LengthError> {
        if !self.touched {
            return None;
        }
        validate_length(&self.length_input).err()
    }

    pub fn blocked_reason(&self) -> Option<SubmitBlocked> {
        check_request(&self.length_input, self.flags).err()
    }

    pub fn submit_enabled(&self) -> bool {
        can_submit(&self.length_input, self.flags)
    }

    pub fn state(&self) -> FormState {
        match self.password {
            Some(_) => FormState::Ready,
            None => FormState::Idle,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == FormState::Ready
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.password.as_ref()
    }

    pub fn submit(&mut self) -> Result<&GeneratedPassword, FormError> {
        let tier = self.tier;
        self.submit_using(|request| generate(request, tier))
    }

    pub fn submit_with<R: Rng>(&mut self, rng: &mut R) -> Result<&GeneratedPassword, FormError> {
        self.submit_using(|request| generate_with(request, rng))
    }

    fn submit_using<F>(&mut self, generator: F) -> Result<&GeneratedPassword, FormError>
    where
        F: FnOnce(&PasswordRequest) -> Result<GeneratedPassword, GenerationError>,
    {
        self.touched = true;

        let request = check_request(&self.length_input, self.flags).map_err(|blocked| {
            log::debug!("submit rejected: {}", blocked);
            FormError::SubmitDisabled(blocked)
        })?;

        let password = generator(&request)?;
        Ok(self.password.insert(password))
    }

    pub fn reset(&mut self) {
        self.length_input.clear();
        self.touched = false;
        self.flags = ClassFlags::default();
        self.password = None;
    }
}
