use super::view::AlertStatus;

/// Sign-in state injected into every dispatch that needs authentication.
///
/// Views never talk to the OAuth2 provider directly; they raise
/// `sign_in_prompt` and the host application decides how to show the login
/// modal. The host consumes the flag with [`Session::take_sign_in_prompt`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    signed_in: bool,
    email: Option<String>,
    sign_in_prompt: bool,
    pub root_messages: Option<String>,
    pub alert_status: Option<AlertStatus>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn signed_in(&self) -> bool {
        self.signed_in
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Records a completed sign-in for the given account.
    pub fn sign_in(&mut self, email: &str) {
        self.signed_in = true;
        self.email = Some(email.to_string());
        self.sign_in_prompt = false;
        self.alert_status = Some(AlertStatus::Success);
        self.root_messages = Some(format!("Logged in with {}", email));
    }

    pub fn sign_out(&mut self) {
        self.signed_in = false;
        self.email = None;
        self.alert_status = Some(AlertStatus::Success);
        self.root_messages = Some("Logged out".to_string());
    }

    /// Asks the host application to show the login modal.
    pub fn request_sign_in(&mut self) {
        self.sign_in_prompt = true;
    }

    pub fn sign_in_prompt(&self) -> bool {
        self.sign_in_prompt
    }

    /// Consumes the pending prompt, returning whether one was raised.
    pub fn take_sign_in_prompt(&mut self) -> bool {
        std::mem::take(&mut self.sign_in_prompt)
    }
}
