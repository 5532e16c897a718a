use portarius_domain::Holiday;
use reqwest::Client;

const BRASIL_API_BASE_URL: &str = "https://brasilapi.com.br/api/feriados/v1";

/// Client for the public BrasilAPI national holiday listing.
pub struct HolidayApiClient {
    client: Client,
    base_url: String,
}

impl HolidayApiClient {
    pub fn new() -> Self {
        Self::with_base_url(BRASIL_API_BASE_URL.into())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub async fn fetch_holidays(&self, year: i32) -> anyhow::Result<Vec<Holiday>> {
        let res = self
            .client
            .get(&format!("{}/{}", self.base_url, year))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(anyhow::Error::msg(format!(
                "Error response from holiday API: {}",
                res.status()
            )));
        }

        let holidays = res.json::<Vec<Holiday>>().await?;
        Ok(holidays)
    }
}

impl Default for HolidayApiClient {
    fn default() -> Self {
        Self::new()
    }
}
