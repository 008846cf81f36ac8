/// Subject line of every confirmation email.
pub const CONFIRMATION_SUBJECT: &str = "Welcome to Loom Abayas 🌿";

/// A rendered confirmation email, ready to be wrapped in a MIME message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationEmail {
    pub subject: &'static str,
    pub body: String,
}

impl ConfirmationEmail {
    /// Render the welcome note, greeting the applicant by `display_name`.
    ///
    /// The leading blank line and the two spaces after "Warm regards," are
    /// part of the sent text.
    pub fn for_applicant(display_name: &str) -> Self {
        let body = format!(
            "\n\
             Ahlan {display_name},\n\
             \n\
             🌸 Thank you for joining Loom Abaya’s Creator Community!\n\
             \n\
             We’re thrilled to have you. Our team will reach out when a collaboration \
             opportunity aligns with your style.\n\
             \n\
             Until then, stay graceful and keep inspiring.\n\
             \n\
             Warm regards,  \n\
             Loom Abayas Team\n"
        );
        Self {
            subject: CONFIRMATION_SUBJECT,
            body,
        }
    }
}
