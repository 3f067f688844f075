//! Daily tip adapter backed by a quotes service.

use rand::Rng;
use serde::Deserialize;

use super::API_KEY_HEADER;
use crate::models::Tip;

const QUOTE_CATEGORY: &str = "fitness";
const REMOTE_TIP_CATEGORY: &str = "Fitness Motivation";

#[derive(Debug, Deserialize)]
struct Quote {
    quote: String,
}

#[derive(Debug, Clone)]
pub struct TipsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl TipsClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Returns the first fitness quote, or a random built-in tip if the
    /// service fails or returns nothing.
    pub async fn daily_tip(&self) -> Tip {
        match self.fetch().await {
            Ok(quotes) => match quotes.into_iter().next() {
                Some(first) => Tip::new(first.quote, REMOTE_TIP_CATEGORY),
                None => random_fallback_tip(),
            },
            Err(e) => {
                tracing::warn!("Error fetching daily tip: {}", e);
                random_fallback_tip()
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<Quote>, reqwest::Error> {
        let mut request = self
            .http
            .get(&self.base_url)
            .query(&[("category", QUOTE_CATEGORY)]);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        request.send().await?.error_for_status()?.json().await
    }
}

/// Every built-in tip.
pub fn fallback_tips() -> Vec<Tip> {
    FALLBACK_TIPS
        .iter()
        .map(|(tip, category)| Tip::new(*tip, *category))
        .collect()
}

/// One built-in tip, chosen uniformly.
fn random_fallback_tip() -> Tip {
    let index = rand::rng().random_range(0..FALLBACK_TIPS.len());
    let (tip, category) = FALLBACK_TIPS[index];
    Tip::new(tip, category)
}

const FALLBACK_TIPS: [(&str, &str); 10] = [
    (
        "Protein is essential for muscle repair and growth after workouts.",
        "Nutrition",
    ),
    (
        "Stay hydrated! Drink water before, during, and after your workout.",
        "Hydration",
    ),
    (
        "Warm up for 5-10 minutes before exercising to prevent injuries.",
        "Safety",
    ),
    (
        "Get 7-9 hours of sleep each night for optimal muscle recovery.",
        "Recovery",
    ),
    (
        "Consistency beats intensity. Show up every day, even if just for 10 minutes.",
        "Motivation",
    ),
    (
        "Mix cardio and strength training for balanced fitness.",
        "Training",
    ),
    (
        "Listen to your body. Rest when you need it to avoid burnout.",
        "Recovery",
    ),
    (
        "Eat a balanced meal with carbs and protein within 2 hours after working out.",
        "Nutrition",
    ),
    (
        "Stretch after your workout to improve flexibility and reduce soreness.",
        "Flexibility",
    ),
    (
        "Set realistic goals and track your progress to stay motivated.",
        "Motivation",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{http_client, DEFAULT_TIMEOUT};
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> TipsClient {
        TipsClient::new(http_client(DEFAULT_TIMEOUT), server.uri(), None)
    }

    #[test]
    fn test_fallback_tips_count() {
        assert_eq!(fallback_tips().len(), 10);
    }

    #[test]
    fn test_random_fallback_is_from_the_fixed_set() {
        let all = fallback_tips();
        for _ in 0..20 {
            assert!(all.contains(&random_fallback_tip()));
        }
    }

    #[tokio::test]
    async fn test_daily_tip_uses_first_quote() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("category", "fitness"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"quote": "Just move.", "author": "Anon", "category": "fitness"},
                {"quote": "Second.", "author": "Anon", "category": "fitness"}
            ])))
            .mount(&server)
            .await;

        let tip = client(&server).daily_tip().await;

        assert_eq!(tip, Tip::new("Just move.", "Fitness Motivation"));
    }

    #[tokio::test]
    async fn test_daily_tip_empty_array_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let tip = client(&server).daily_tip().await;

        assert!(fallback_tips().contains(&tip));
    }

    #[tokio::test]
    async fn test_daily_tip_server_error_falls_back() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let tip = client(&server).daily_tip().await;

        assert!(fallback_tips().contains(&tip));
    }
}
