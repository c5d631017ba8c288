// src/backend/services/access_gate.rs
// Soft client-side gate in front of the QR screen. Not a security control:
// the secret ships with the client and there is no lockout or rate limit.

/// Compares candidates against a fixed secret.
#[derive(Clone)]
pub struct AccessGate {
    secret: String,
}

impl AccessGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Exact, case-sensitive string equality.
    pub fn check(&self, candidate: &str) -> bool {
        candidate == self.secret
    }
}

// Keep the secret out of logs and debug dumps.
impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate").finish_non_exhaustive()
    }
}

/// Password modal state. Input is wiped whenever the modal closes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PasswordPrompt {
    open: bool,
    input: String,
}

impl PasswordPrompt {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn open(&mut self) {
        self.open = true;
        self.input.clear();
    }

    /// Replaces the typed text. Ignored while the modal is closed.
    pub fn set_input(&mut self, text: impl Into<String>) {
        if self.open {
            self.input = text.into();
        }
    }

    /// Cancel button or backdrop click.
    pub fn close(&mut self) {
        self.open = false;
        self.input.clear();
    }

    /// Closes the modal and hands back what was typed.
    pub fn take_submission(&mut self) -> String {
        self.open = false;
        std::mem::take(&mut self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_secret_passes() {
        let gate = AccessGate::new("423609");
        assert!(gate.check("423609"));
        for candidate in ["", "42360", "4236099", " 423609", "423609 ", "423 609"] {
            assert!(!gate.check(candidate), "{:?} should be rejected", candidate);
        }
    }

    #[test]
    fn check_is_case_sensitive() {
        let gate = AccessGate::new("Secret");
        assert!(!gate.check("secret"));
        assert!(!gate.check("SECRET"));
        assert!(gate.check("Secret"));
    }

    #[test]
    fn debug_output_hides_secret() {
        let gate = AccessGate::new("423609");
        assert!(!format!("{:?}", gate).contains("423609"));
    }

    #[test]
    fn closing_clears_input() {
        let mut prompt = PasswordPrompt::default();
        prompt.open();
        prompt.set_input("1234");
        prompt.close();
        assert!(!prompt.is_open());
        assert_eq!(prompt.input(), "");
    }

    #[test]
    fn submission_clears_input() {
        let mut prompt = PasswordPrompt::default();
        prompt.open();
        prompt.set_input("423609");
        assert_eq!(prompt.take_submission(), "423609");
        assert!(!prompt.is_open());
        assert_eq!(prompt.input(), "");
    }

    #[test]
    fn typing_into_closed_prompt_is_ignored() {
        let mut prompt = PasswordPrompt::default();
        prompt.set_input("x");
        assert_eq!(prompt.input(), "");
    }
}
