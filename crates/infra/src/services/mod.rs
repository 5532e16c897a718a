mod holidays;
mod whatsapp;

pub use holidays::HolidayApiClient;
pub use whatsapp::{INotifier, InMemoryNotifier, NotifierCall, WhatsAppNotifier};
