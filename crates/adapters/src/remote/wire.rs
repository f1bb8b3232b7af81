//! Wire format of the remote recipe service and its mapping onto [`Recipe`]

use recipe_keeper_domain::{PLACEHOLDER_IMAGE_URL, Recipe, RecipeOrigin, UNNAMED_RECIPE};
use serde::Deserialize;
use serde_json::Value;

/// One recipe as served by the remote API.
///
/// Fields are kept as raw JSON values: the service is not strict about
/// types (ids arrive as numbers, text fields are sometimes null).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RemoteRecipe {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    receita: Option<Value>,
    #[serde(default)]
    modo_preparo: Option<Value>,
    #[serde(default)]
    link_imagem: Option<Value>,
    #[serde(default)]
    tipo: Option<Value>,
    #[serde(default)]
    ingredientes: Option<Value>,
}

impl RemoteRecipe {
    /// Map onto the canonical shape.
    ///
    /// `fallback_id` stands in when the payload carries no id; returns `None`
    /// when neither is available.
    pub(crate) fn into_recipe(self, fallback_id: Option<&str>) -> Option<Recipe> {
        let id = text(self.id).or_else(|| fallback_id.map(str::to_string))?;

        Some(Recipe {
            id,
            name: text(self.receita).unwrap_or_else(|| UNNAMED_RECIPE.to_string()),
            instructions: text(self.modo_preparo).unwrap_or_default(),
            image_url: text(self.link_imagem).unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
            category: text(self.tipo),
            ingredients: text(self.ingredientes),
            origin: RecipeOrigin::Remote,
        })
    }
}

/// Render a loosely-typed field as non-blank text
fn text(value: Option<Value>) -> Option<String> {
    let rendered = match value? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| text(Some(item)))
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Null | Value::Object(_) => return None,
    };

    let trimmed = rendered.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
