use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::contact::{contact_object, sanitize_contact, ContactOutcome, SubmitMode};
use crate::error::Result;

impl super::SparkRestClient {
    /// Sanitize a contact and register it.
    ///
    /// Blank fields are dropped, `brokerage_name` is resolved to a
    /// `brokerage_id` (creating the brokerage when needed), and nested
    /// standardized fields and answers are flattened into the lists the
    /// API expects. A rejected contact is reported through the outcome,
    /// not as an error.
    pub async fn submit_contact<T: Serialize + ?Sized>(&self, contact: &T) -> Result<ContactOutcome> {
        self.submit_contact_with(contact, SubmitMode::Sanitized).await
    }

    /// Register a contact, choosing whether to sanitize it first.
    #[instrument(skip(self, contact))]
    pub async fn submit_contact_with<T: Serialize + ?Sized>(
        &self,
        contact: &T,
        mode: SubmitMode,
    ) -> Result<ContactOutcome> {
        let payload = contact_object(serde_json::to_value(contact)?)?;

        let payload = match mode {
            SubmitMode::Passthrough => payload,
            SubmitMode::Sanitized => {
                let sanitized = sanitize_contact(payload)?;
                match sanitized.brokerage_name.clone() {
                    Some(name) => {
                        let brokerage = self.get_brokerage(&name).await?;
                        sanitized.with_brokerage_id(serde_json::to_value(&brokerage.id)?)
                    }
                    None => sanitized.payload,
                }
            }
        };

        let response = self.client.post_json(super::CONTACTS, &payload).await?;

        if response.is_created() {
            info!(status = response.status, "Contact created");
            Ok(ContactOutcome::success(response.data))
        } else {
            let message = response.error_message().unwrap_or_default();
            warn!(status = response.status, message = %message, "Contact rejected");
            Ok(ContactOutcome::failed(message))
        }
    }
}
