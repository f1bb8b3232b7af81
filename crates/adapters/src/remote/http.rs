//! HTTP adapter for the remote recipe catalog

use async_trait::async_trait;
use recipe_keeper_domain::{Recipe, RecipeSource, SourceError};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

use super::wire::RemoteRecipe;

/// Read-only client for the recipe REST API
pub struct HttpRecipeSource {
    client: Client,
    base_url: Url,
}

impl HttpRecipeSource {
    pub const DEFAULT_BASE_URL: &'static str = "https://api-receitas-pi.vercel.app/receitas";

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SourceError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::Config(format!(
                "Base URL cannot carry a path: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Base URL extended with percent-encoded path segments
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::Config(format!("Invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_text(&self, url: Url) -> Result<(StatusCode, String), SourceError> {
        tracing::debug!(url = %url, "Requesting remote recipes");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok((status, body))
    }

    async fn fetch_list(&self, url: Url) -> Result<Vec<Recipe>, SourceError> {
        let (status, body) = self.get_text(url).await?;

        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let items: Vec<RemoteRecipe> =
            serde_json::from_str(&body).map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        let total = items.len();
        let recipes: Vec<Recipe> = items
            .into_iter()
            .filter_map(|item| item.into_recipe(None))
            .collect();

        if recipes.len() < total {
            tracing::warn!(
                skipped = total - recipes.len(),
                "Skipped remote recipes without an id"
            );
        }

        Ok(recipes)
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn list_all(&self) -> Result<Vec<Recipe>, SourceError> {
        let recipes = self.fetch_list(self.endpoint(&["todas"])?).await?;
        tracing::info!(count = recipes.len(), "Fetched remote recipes");
        Ok(recipes)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, SourceError> {
        let (status, body) = self.get_text(self.endpoint(&[id])?).await?;

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body,
            });
        }
        if body.trim().is_empty() {
            tracing::warn!(recipe_id = %id, "Empty response for remote recipe");
            return Ok(None);
        }

        let item: Option<RemoteRecipe> =
            serde_json::from_str(&body).map_err(|e| SourceError::InvalidResponse(e.to_string()))?;

        Ok(item.and_then(|item| item.into_recipe(Some(id))))
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Recipe>, SourceError> {
        let recipes = self.fetch_list(self.endpoint(&["tipo", category])?).await?;
        tracing::info!(category = %category, count = recipes.len(), "Fetched remote recipes by category");
        Ok(recipes)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_keeper_domain::RecipeOrigin;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(server: &MockServer) -> HttpRecipeSource {
        HttpRecipeSource::with_base_url(
            &format!("{}/receitas", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_all_maps_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/receitas/todas"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": 1,
                    "receita": "Bolo",
                    "modo_preparo": "Misture e asse",
                    "link_imagem": "http://x/1.png",
                    "tipo": "doce",
                    "ingredientes": "farinha"
                },
                {
                    "receita": "Sem id"
                },
                {
                    "id": "2",
                    "receita": "Coxinha",
                    "modo_preparo": "Frite",
                    "link_imagem": "http://x/2.png",
                    "tipo": "salgado"
                }
            ])))
            .mount(&mock_server)
            .await;

        let recipes = source(&mock_server).list_all().await.unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, "1");
        assert_eq!(recipes[0].name, "Bolo");
        assert_eq!(recipes[0].origin, RecipeOrigin::Remote);
        assert_eq!(recipes[1].category.as_deref(), Some("salgado"));
    }

    #[tokio::test]
    async fn test_list_all_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/receitas/todas"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let result = source(&mock_server).list_all().await;

        assert!(matches!(
            result,
            Err(SourceError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_list_all_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/receitas/todas"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let result = source(&mock_server).list_all().await;

        assert!(matches!(result, Err(SourceError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_get_by_id_falls_back_to_requested_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/receitas/15"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "receita": "Pudim",
                "modo_preparo": "Asse em banho-maria"
            })))
            .mount(&mock_server)
            .await;

        let recipe = source(&mock_server).get_by_id("15").await.unwrap().unwrap();

        assert_eq!(recipe.id, "15");
        assert_eq!(recipe.name, "Pudim");
    }

    #[tokio::test]
    async fn test_get_by_id_empty_body_is_absent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/receitas/99"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let result = source(&mock_server).get_by_id("99").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_null_body_is_absent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/receitas/99"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&mock_server)
            .await;

        assert!(source(&mock_server).get_by_id("99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_not_found_vs_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/receitas/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/receitas/503"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let source = source(&mock_server);

        assert!(source.get_by_id("404").await.unwrap().is_none());
        assert!(matches!(
            source.get_by_id("503").await,
            Err(SourceError::Status { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_list_by_category_encodes_segment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/receitas/tipo/prato%20principal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 5, "receita": "Feijoada", "tipo": "prato principal"}
            ])))
            .mount(&mock_server)
            .await;

        let recipes = source(&mock_server)
            .list_by_category("prato principal")
            .await
            .unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Feijoada");
    }

    #[tokio::test]
    async fn test_network_failure() {
        let source =
            HttpRecipeSource::with_base_url("http://127.0.0.1:9/receitas", Duration::from_secs(2))
                .unwrap();

        let result = source.list_all().await;

        assert!(matches!(result, Err(SourceError::Network(_))));
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            HttpRecipeSource::with_base_url("not a url", Duration::from_secs(1)),
            Err(SourceError::Config(_))
        ));
        assert!(matches!(
            HttpRecipeSource::with_base_url("mailto:chef@example.com", Duration::from_secs(1)),
            Err(SourceError::Config(_))
        ));
    }

    #[test]
    fn test_endpoint_handles_trailing_slash() {
        let source =
            HttpRecipeSource::with_base_url("https://example.com/receitas/", Duration::from_secs(1))
                .unwrap();

        let url = source.endpoint(&["todas"]).unwrap();

        assert_eq!(url.as_str(), "https://example.com/receitas/todas");
    }
}
