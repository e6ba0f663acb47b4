use contracts::domain::a001_owner::aggregate::Owner;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Relative endpoint listing owners whose last name starts with `last_name`.
pub fn owners_path(last_name: &str) -> String {
    format!(
        "api/owner/list?lastName={}",
        urlencoding::encode(last_name)
    )
}

/// Fetch owners by last name; an empty name lists all owners
pub async fn fetch_owners(last_name: &str) -> Result<Vec<Owner>, String> {
    let response = Request::get(&api_url(&owners_path(last_name)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch owners: {}", response.status()));
    }

    response
        .json::<Vec<Owner>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owners_path() {
        assert_eq!(owners_path(""), "api/owner/list?lastName=");
        assert_eq!(owners_path("Davis"), "api/owner/list?lastName=Davis");
        assert_eq!(owners_path("O'Hara & Co"), "api/owner/list?lastName=O%27Hara%20%26%20Co");
    }
}
