use pretty_assertions::assert_eq;
use recipe_chef::{build_prompt, Language};

const FRENCH_MARKERS: [&str; 3] = ["nom_recette", "description_courte", "instructions"];
const ENGLISH_ONLY_MARKERS: [&str; 2] = ["recipe_name", "short_description"];

fn ingredients(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_prompt_is_deterministic() {
    let items = ingredients(&["riz", "poulet", "curry"]);
    for language in [Language::Fr, Language::En] {
        assert_eq!(build_prompt(&items, language), build_prompt(&items, language));
    }
}

#[test]
fn test_english_prompt_joins_ingredients() {
    let prompt = build_prompt(&ingredients(&["tomato", "basil", "garlic"]), Language::En);
    assert!(prompt.contains("tomato, basil, garlic"));
    assert!(prompt.contains("Respond in English."));
}

#[test]
fn test_french_prompt_markers() {
    let prompt = build_prompt(&ingredients(&["pomme", "beurre"]), Language::Fr);
    for marker in FRENCH_MARKERS {
        assert!(prompt.contains(marker), "missing {}", marker);
    }
    for marker in ENGLISH_ONLY_MARKERS {
        assert!(!prompt.contains(marker), "unexpected {}", marker);
    }
    assert!(prompt.contains("Réponds en français."));
}

#[test]
fn test_english_prompt_markers() {
    let prompt = build_prompt(&ingredients(&["apple", "butter"]), Language::En);
    for marker in ["recipe_name", "short_description", "instructions"] {
        assert!(prompt.contains(marker), "missing {}", marker);
    }
    for marker in ["nom_recette", "description_courte"] {
        assert!(!prompt.contains(marker), "unexpected {}", marker);
    }
}

#[test]
fn test_ingredient_order_is_preserved() {
    let prompt = build_prompt(&ingredients(&["garlic", "basil", "tomato"]), Language::En);
    assert!(prompt.contains("garlic, basil, tomato"));
}

#[test]
fn test_english_prompt_opening() {
    let prompt = build_prompt(&ingredients(&["egg"]), Language::En);
    let first_lines: Vec<&str> = prompt.lines().take(2).collect();
    assert_eq!(
        first_lines,
        vec![
            "You're a creative and passionate chef.",
            "Your role is to create a simple, delicious recipe using the following ingredients: egg.",
        ]
    );
}
