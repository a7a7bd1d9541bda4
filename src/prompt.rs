//! Prompt construction for recipe generation.
//!
//! A prompt is built from the caller's ingredient list and a [`Language`]. Each
//! language has its own template asking the model for a JSON answer with a
//! recipe name, a short description and an ordered list of steps.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language the generated recipe is written in.
///
/// Only `"fr"` and `"en"` deserialize; anything else is rejected before a
/// prompt is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            Language::Fr => FRENCH_TEMPLATE,
            Language::En => ENGLISH_TEMPLATE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const INGREDIENTS_PLACEHOLDER: &str = "{{INGREDIENTS}}";

const FRENCH_TEMPLATE: &str = "\
Tu es un chef cuisinier créatif et passionné.
Ton rôle est de créer une recette simple et délicieuse à partir des ingrédients suivants : {{INGREDIENTS}}.

Ta réponse doit être au format JSON et contenir les clés suivantes :
- nom_recette
- description_courte (2 phrases alléchantes)
- instructions (une liste d'étapes claires)

Utilise un style pédagogue et encourageant. Utilise du markdown.
Réponds en français.
N'hésite pas à ajouter des conseils ou des astuces pour réussir la recette.
Utilise des émojis pour rendre la recette plus engageante.";

const ENGLISH_TEMPLATE: &str = "\
You're a creative and passionate chef.
Your role is to create a simple, delicious recipe using the following ingredients: {{INGREDIENTS}}.

Your answer must be in JSON format and contain the following keys:
- recipe_name
- short_description (2 tantalizing sentences)
- instructions (a list of clear steps)

Use a pedagogical and encouraging style. Use markdown.
Respond in English.
Feel free to add tips or tricks to make the recipe a success.
Use emojis to make the recipe more engaging.";

/// Builds the prompt sent upstream for `ingredients` in `language`.
///
/// Ingredients are joined with `", "` in the order given. Callers are expected
/// to have rejected an empty list already.
pub fn build_prompt(ingredients: &[String], language: Language) -> String {
    let clause = ingredients.join(", ");
    language.template().replace(INGREDIENTS_PLACEHOLDER, &clause)
}
