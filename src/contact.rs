//! Contact dispatch links
//!
//! The site's enquiry flow hands visitors off to WhatsApp or a phone call.
//! This module only builds the pre-filled deep links; opening them is the
//! client's job.

use serde::Serialize;

use crate::config::ContactConfig;
use crate::error::FlydaddyError;

/// Enquiry message used when the caller does not supply one.
pub const DEFAULT_ENQUIRY_MESSAGE: &str = "Hi, I'm interested in your travel packages!";

/// The two dispatch targets for one enquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLinks {
    /// `https://wa.me/<number>?text=<message>` with the message
    /// percent-encoded.
    pub whatsapp: String,
    /// `tel:` URI for the dialer.
    pub tel: String,
}

/// Build the WhatsApp and dialer links for a free-text enquiry message.
pub fn enquiry_links(contact: &ContactConfig, message: &str) -> Result<ContactLinks, FlydaddyError> {
    if message.trim().is_empty() {
        return Err(FlydaddyError::validation("enquiry message cannot be empty"));
    }

    Ok(ContactLinks {
        whatsapp: format!(
            "https://wa.me/{}?text={}",
            contact.whatsapp_number,
            urlencoding::encode(message)
        ),
        tel: format!("tel:{}", contact.phone_number),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactConfig {
        ContactConfig {
            phone_number: "+919951125818".to_string(),
            whatsapp_number: "919951125818".to_string(),
        }
    }

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let links = enquiry_links(&contact(), "Hi! I'm interested in Goa. Can you help?").unwrap();
        assert!(links.whatsapp.starts_with("https://wa.me/919951125818?text="));
        assert!(links.whatsapp.contains("Goa"));
        // Spaces and punctuation must be percent-encoded.
        assert!(!links.whatsapp.contains(' '));
        assert!(links.whatsapp.contains("%20"));
    }

    #[test]
    fn test_tel_link_uses_configured_number() {
        let links = enquiry_links(&contact(), DEFAULT_ENQUIRY_MESSAGE).unwrap();
        assert_eq!(links.tel, "tel:+919951125818");
    }

    #[test]
    fn test_blank_message_is_rejected() {
        let result = enquiry_links(&contact(), "   ");
        assert!(matches!(result, Err(FlydaddyError::Validation { .. })));
    }
}
