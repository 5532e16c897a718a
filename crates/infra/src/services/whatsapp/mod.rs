use portarius_domain::ID;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::debug;

const PACKAGE_TEMPLATE: &str = "package_notification";
const RESERVATION_KEY_TEMPLATE: &str = "reservation_key_reminder";
const TEMPLATE_LANGUAGE: &str = "pt_BR";

/// Outbound notification capability consumed by the reminder
/// listeners. The reminder id is threaded through so a dispatcher
/// implementation can correlate its outcome with the reminder it was
/// sent for.
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn send_package_notification(
        &self,
        reminder_id: &ID,
        phone: &str,
        resident_name: &str,
    ) -> anyhow::Result<()>;

    async fn send_reservation_key_reminder(
        &self,
        reminder_id: &ID,
        phone: &str,
        resident_name: &str,
        hall: &str,
    ) -> anyhow::Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct WhatsAppMessage {
    messaging_product: String,
    to: String,
    #[serde(rename = "type")]
    message_type: String,
    template: Template,
}

#[derive(Debug, Serialize, Deserialize)]
struct Template {
    name: String,
    language: Language,
    components: Vec<Component>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Language {
    code: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: String,
    parameters: Vec<Param>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Param {
    #[serde(rename = "type")]
    param_type: String,
    text: String,
}

fn template_message(to: &str, template_name: &str, body_texts: Vec<String>) -> WhatsAppMessage {
    WhatsAppMessage {
        messaging_product: "whatsapp".into(),
        to: to.into(),
        message_type: "template".into(),
        template: Template {
            name: template_name.into(),
            language: Language {
                code: TEMPLATE_LANGUAGE.into(),
            },
            components: vec![Component {
                component_type: "body".into(),
                parameters: body_texts
                    .into_iter()
                    .map(|text| Param {
                        param_type: "text".into(),
                        text,
                    })
                    .collect(),
            }],
        },
    }
}

/// WhatsApp Business (Graph API) client sending pre-approved template
/// messages.
pub struct WhatsAppNotifier {
    client: Client,
    api_key: String,
    api_base_url: String,
}

impl WhatsAppNotifier {
    pub fn from_env() -> Self {
        let phone_number_id = std::env::var("WHATSAPP_PHONE_NUMBER_ID").unwrap_or_default();
        let api_key = std::env::var("WHATSAPP_API_KEY").unwrap_or_default();
        Self::new(
            api_key,
            format!("https://graph.facebook.com/v22.0/{}", phone_number_id),
        )
    }

    pub fn new(api_key: String, api_base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base_url,
        }
    }

    async fn send_message(&self, message: &WhatsAppMessage) -> anyhow::Result<()> {
        let res = self
            .client
            .post(&format!("{}/messages", self.api_base_url))
            .bearer_auth(&self.api_key)
            .json(message)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(anyhow::Error::msg(format!(
                "Error response from WhatsApp API: {}",
                res.status()
            )));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl INotifier for WhatsAppNotifier {
    async fn send_package_notification(
        &self,
        reminder_id: &ID,
        phone: &str,
        resident_name: &str,
    ) -> anyhow::Result<()> {
        debug!(
            "Sending package notification for reminder {} to {}",
            reminder_id, phone
        );
        let message = template_message(phone, PACKAGE_TEMPLATE, vec![resident_name.into()]);
        self.send_message(&message).await
    }

    async fn send_reservation_key_reminder(
        &self,
        reminder_id: &ID,
        phone: &str,
        resident_name: &str,
        hall: &str,
    ) -> anyhow::Result<()> {
        debug!(
            "Sending reservation key reminder for reminder {} to {}",
            reminder_id, phone
        );
        let message = template_message(
            phone,
            RESERVATION_KEY_TEMPLATE,
            vec![resident_name.into(), hall.into()],
        );
        self.send_message(&message).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotifierCall {
    Package {
        reminder_id: ID,
        phone: String,
        resident_name: String,
    },
    ReservationKey {
        reminder_id: ID,
        phone: String,
        resident_name: String,
        hall: String,
    },
}

/// Recording notifier used by tests and local development without
/// WhatsApp credentials.
pub struct InMemoryNotifier {
    pub calls: Mutex<Vec<NotifierCall>>,
    fail_sends: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_sends: false,
        }
    }

    /// A notifier whose sends all fail, to drive the FAILED status
    /// path in tests.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_sends: true,
        }
    }

    fn record(&self, call: NotifierCall) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail_sends {
            return Err(anyhow::Error::msg("Notifier configured to fail"));
        }
        Ok(())
    }
}

impl Default for InMemoryNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotifier for InMemoryNotifier {
    async fn send_package_notification(
        &self,
        reminder_id: &ID,
        phone: &str,
        resident_name: &str,
    ) -> anyhow::Result<()> {
        self.record(NotifierCall::Package {
            reminder_id: reminder_id.clone(),
            phone: phone.into(),
            resident_name: resident_name.into(),
        })
    }

    async fn send_reservation_key_reminder(
        &self,
        reminder_id: &ID,
        phone: &str,
        resident_name: &str,
        hall: &str,
    ) -> anyhow::Result<()> {
        self.record(NotifierCall::ReservationKey {
            reminder_id: reminder_id.clone(),
            phone: phone.into(),
            resident_name: resident_name.into(),
            hall: hall.into(),
        })
    }
}
