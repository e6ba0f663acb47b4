use contracts::domain::a002_vet::aggregate::Vet;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub const VETS_PATH: &str = "api/vets";

/// Fetch all vets
pub async fn fetch_vets() -> Result<Vec<Vet>, String> {
    let response = Request::get(&api_url(VETS_PATH))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch vets: {}", response.status()));
    }

    response
        .json::<Vec<Vet>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
