//! Wikidata capital lookup.
//!
//! Resolves a country name to its capital in three hops: entity search for
//! the country, entity data for its `P36` (capital) claim, entity data for
//! the capital's English label. Every hop fails open to `None`.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{build_http_client, CapitalProvider, ProviderConfig};

const WIKIDATA_API: &str = "https://www.wikidata.org/w/api.php";
const ENTITY_DATA_BASE: &str = "https://www.wikidata.org/wiki/Special:EntityData";

/// Capital-of lookups backed by the public Wikidata API.
pub struct WikidataCapitalProvider {
    http: reqwest::Client,
    api_url: String,
    entity_base: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: String,
}

#[derive(Debug, Deserialize)]
struct EntityDataResponse {
    entities: std::collections::HashMap<String, Entity>,
}

#[derive(Debug, Deserialize)]
struct Entity {
    #[serde(default)]
    claims: std::collections::HashMap<String, Vec<ClaimStatement>>,
    #[serde(default)]
    labels: std::collections::HashMap<String, Label>,
}

#[derive(Debug, Deserialize)]
struct ClaimStatement {
    mainsnak: MainSnak,
}

#[derive(Debug, Deserialize)]
struct MainSnak {
    datavalue: Option<DataValue>,
}

#[derive(Debug, Deserialize)]
struct DataValue {
    value: EntityIdValue,
}

#[derive(Debug, Deserialize)]
struct EntityIdValue {
    id: String,
}

#[derive(Debug, Deserialize)]
struct Label {
    value: String,
}

impl WikidataCapitalProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: build_http_client(&config),
            api_url: WIKIDATA_API.to_string(),
            entity_base: ENTITY_DATA_BASE.to_string(),
        }
    }

    /// Point the provider at a different API endpoint (used in tests).
    pub fn with_endpoints(
        mut self,
        api_url: impl Into<String>,
        entity_base: impl Into<String>,
    ) -> Self {
        self.api_url = api_url.into();
        self.entity_base = entity_base.into();
        self
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Option<T> {
        let response = self.http.get(url).query(params).send().await.ok()?;
        if !response.status().is_success() {
            debug!(url, status = %response.status(), "wikidata request rejected");
            return None;
        }
        response.json::<T>().await.ok()
    }

    async fn entity(&self, entity_id: &str) -> Option<Entity> {
        let url = format!("{}/{}.json", self.entity_base, entity_id);
        let mut data: EntityDataResponse = self.get_json(&url, &[]).await?;
        data.entities.remove(entity_id)
    }
}

#[async_trait]
impl CapitalProvider for WikidataCapitalProvider {
    async fn lookup_capital(&self, country: &str) -> Option<String> {
        let search: SearchResponse = self
            .get_json(
                &self.api_url,
                &[
                    ("action", "wbsearchentities"),
                    ("search", country),
                    ("language", "en"),
                    ("format", "json"),
                ],
            )
            .await?;

        let country_id = &search.search.first()?.id;
        let country_entity = self.entity(country_id).await?;

        // P36 = capital
        let capital_id = country_entity
            .claims
            .get("P36")?
            .first()?
            .mainsnak
            .datavalue
            .as_ref()?
            .value
            .id
            .clone();

        let capital_entity = self.entity(&capital_id).await?;
        let capital = capital_entity.labels.get("en")?.value.clone();

        debug!(country, %capital, "wikidata capital resolved");
        Some(capital)
    }
}
