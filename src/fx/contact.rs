//! Scripted chat-style contact form
//!
//! Name, then email, then message. Nothing is sent anywhere; the final step
//! only locks the form and reports a fixed confirmation.

/// Shown after the last step
pub const CONFIRMATION: &str =
    "Thanks — message recorded locally. Replace with Formspree/Netlify to receive emails.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStep {
    #[default]
    AwaitingName,
    AwaitingEmail,
    AwaitingMessage,
    Done,
}

/// Emitted for each accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    NameCaptured(String),
    EmailCaptured(String),
    /// Flow finished; input must be disabled
    MessageCaptured(String),
}

impl ContactEvent {
    pub fn value(&self) -> &str {
        match self {
            ContactEvent::NameCaptured(v)
            | ContactEvent::EmailCaptured(v)
            | ContactEvent::MessageCaptured(v) => v,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactFlow {
    step: ContactStep,
    name: String,
    email: String,
    message: String,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> ContactStep {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.step == ContactStep::Done
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Submit raw input. Blank input, or anything after completion, is ignored.
    pub fn submit(&mut self, raw: &str) -> Option<ContactEvent> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        let value = value.to_string();
        let event = match self.step {
            ContactStep::AwaitingName => {
                self.name = value.clone();
                self.step = ContactStep::AwaitingEmail;
                ContactEvent::NameCaptured(value)
            }
            ContactStep::AwaitingEmail => {
                self.email = value.clone();
                self.step = ContactStep::AwaitingMessage;
                ContactEvent::EmailCaptured(value)
            }
            ContactStep::AwaitingMessage => {
                self.message = value.clone();
                self.step = ContactStep::Done;
                ContactEvent::MessageCaptured(value)
            }
            ContactStep::Done => return None,
        };
        log::debug!("contact: now {:?}", self.step);
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_flow() {
        let mut flow = ContactFlow::new();
        assert_eq!(flow.step(), ContactStep::AwaitingName);

        assert_eq!(
            flow.submit("Ada"),
            Some(ContactEvent::NameCaptured("Ada".into()))
        );
        assert_eq!(flow.step(), ContactStep::AwaitingEmail);
        assert_eq!(
            flow.submit("ada@example.com"),
            Some(ContactEvent::EmailCaptured("ada@example.com".into()))
        );
        assert_eq!(flow.step(), ContactStep::AwaitingMessage);
        assert_eq!(
            flow.submit("Hello"),
            Some(ContactEvent::MessageCaptured("Hello".into()))
        );
        assert!(flow.is_done());

        assert_eq!(flow.name(), "Ada");
        assert_eq!(flow.email(), "ada@example.com");
        assert_eq!(flow.message(), "Hello");

        // Locked after completion
        assert_eq!(flow.submit("more"), None);
        assert_eq!(flow.message(), "Hello");
    }

    #[test]
    fn test_blank_input_ignored_at_every_step() {
        let mut flow = ContactFlow::new();
        for _ in 0..3 {
            let before = flow.step();
            assert_eq!(flow.submit(""), None);
            assert_eq!(flow.submit("   \t\n"), None);
            assert_eq!(flow.step(), before);
            flow.submit("x");
        }
        assert!(flow.is_done());
        assert_eq!(flow.name(), "x");
    }

    #[test]
    fn test_input_trimmed() {
        let mut flow = ContactFlow::new();
        let event = flow.submit("  Grace  ").unwrap();
        assert_eq!(event.value(), "Grace");
        assert_eq!(flow.name(), "Grace");
    }
}
