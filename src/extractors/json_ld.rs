use crate::duration::parse_duration;
use crate::extractors::Extractor;
use crate::ingredient::parse_ingredient_line;
use crate::model::{RecipeIngredient, ScrapedRecipe};
use html_escape::decode_html_entities;
use log::debug;
use scraper::{Html, Selector};
use serde_json::Value;

/// Extracts a schema.org Recipe from JSON-LD script blocks.
///
/// Pages embed any number of `application/ld+json` blocks, in any position,
/// and any of them may hold invalid JSON. Each block is parsed
/// independently; a malformed block is skipped, never aborting the scan.
/// The first Recipe-typed object found wins.
pub struct JsonLdExtractor;

fn decode_html_symbols(text: &str) -> String {
    // for some reason need to decode twice to get the correct string
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

/// True when the value's `@type` (scalar or array) names a Recipe,
/// including the fully-qualified IRI forms.
fn is_recipe_type(value: &Value) -> bool {
    match value.get("@type") {
        Some(Value::String(type_str)) => type_str.contains("Recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|type_str| type_str.contains("Recipe")),
        _ => false,
    }
}

/// Search a parsed JSON-LD value for the first Recipe-typed object: the
/// value itself, then the entries of an `@graph` array, then (for a bare
/// array) each element in order.
fn find_recipe_node(value: &Value) -> Option<&Value> {
    if is_recipe_type(value) {
        return Some(value);
    }
    if let Some(graph) = value.get("@graph").and_then(Value::as_array) {
        if let Some(node) = graph.iter().find(|item| is_recipe_type(item)) {
            return Some(node);
        }
    }
    if let Some(items) = value.as_array() {
        return items.iter().find_map(find_recipe_node);
    }
    None
}

/// recipeYield: number used directly, string scanned for the first run of
/// digits, array recursed into its first element.
fn parse_servings(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            let servings = n.as_f64()? as i64;
            u32::try_from(servings).ok().filter(|&s| s > 0)
        }
        Value::String(s) => {
            let digits: String = s
                .chars()
                .skip_while(|c| !c.is_ascii_digit())
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok().filter(|&s| s > 0)
        }
        Value::Array(items) => items.first().and_then(parse_servings),
        _ => None,
    }
}

/// Flatten recipeInstructions into a list of step strings. Handles bare
/// strings (split on newlines), arrays, HowToSection objects (nested list),
/// and HowToStep objects (text, else name). Blank entries are dropped.
fn flatten_instructions(value: &Value, steps: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            let decoded = decode_html_symbols(s);
            let before = steps.len();
            for line in decoded.lines() {
                let line = line.trim();
                if !line.is_empty() {
                    steps.push(line.to_string());
                }
            }
            if steps.len() == before && !decoded.trim().is_empty() {
                steps.push(decoded.trim().to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                flatten_instructions(item, steps);
            }
        }
        Value::Object(map) => {
            if let Some(list) = map.get("itemListElement") {
                flatten_instructions(list, steps);
                return;
            }
            let text = map
                .get("text")
                .and_then(Value::as_str)
                .or_else(|| map.get("name").and_then(Value::as_str));
            if let Some(text) = text {
                let decoded = decode_html_symbols(text);
                let trimmed = decoded.trim();
                if !trimmed.is_empty() {
                    steps.push(trimmed.to_string());
                }
            }
        }
        _ => {}
    }
}

/// image: a string is used directly; an array contributes its first element
/// (unwrapping an object's url); an object contributes its url field.
fn extract_image(value: &Value) -> Option<String> {
    let url = match value {
        Value::String(s) => Some(decode_html_symbols(s)),
        Value::Array(items) => match items.first()? {
            Value::String(s) => Some(decode_html_symbols(s)),
            Value::Object(map) => map.get("url").and_then(Value::as_str).map(String::from),
            _ => None,
        },
        Value::Object(map) => map.get("url").and_then(Value::as_str).map(String::from),
        _ => None,
    };
    url.filter(|u| !u.is_empty())
}

fn map_recipe(node: &Value) -> ScrapedRecipe {
    let title = node
        .get("name")
        .and_then(Value::as_str)
        .map(decode_html_symbols)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "Untitled Recipe".to_string());

    let description = node
        .get("description")
        .and_then(Value::as_str)
        .map(decode_html_symbols)
        .filter(|desc| !desc.trim().is_empty());

    let prep_time = node
        .get("prepTime")
        .and_then(Value::as_str)
        .and_then(parse_duration);
    let cook_time = node
        .get("cookTime")
        .and_then(Value::as_str)
        .and_then(parse_duration);

    let servings = node.get("recipeYield").and_then(parse_servings);

    let ingredients = node
        .get("recipeIngredient")
        .and_then(Value::as_array)
        .map(|lines| {
            lines
                .iter()
                .filter_map(Value::as_str)
                .map(decode_html_symbols)
                .filter(|line| !line.trim().is_empty())
                .map(|line| {
                    let parsed = parse_ingredient_line(&line);
                    RecipeIngredient {
                        amount: parsed.amount,
                        name: parsed.name,
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let mut steps = Vec::new();
    if let Some(instructions) = node.get("recipeInstructions") {
        flatten_instructions(instructions, &mut steps);
    }

    let image_url = node.get("image").and_then(extract_image);

    ScrapedRecipe {
        title,
        description,
        prep_time,
        cook_time,
        servings,
        ingredients,
        steps,
        image_url,
    }
}

impl Extractor for JsonLdExtractor {
    fn parse(&self, document: &Html) -> Option<ScrapedRecipe> {
        let selector = Selector::parse("script[type='application/ld+json']").unwrap();

        for (index, script) in document.select(&selector).enumerate() {
            let raw_json = script.inner_html();
            match serde_json::from_str::<Value>(raw_json.trim()) {
                Ok(json_ld) => {
                    if let Some(node) = find_recipe_node(&json_ld) {
                        debug!("Found recipe in JSON-LD block {index}");
                        return Some(map_recipe(node));
                    }
                }
                Err(e) => {
                    // malformed sibling blocks must not abort the scan
                    debug!("Skipping unparseable JSON-LD block {index}: {e}");
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_html_document(json_ld: &str) -> Html {
        let html = format!(
            r#"
            <!DOCTYPE html>
            <html>
            <head>
                <script type="application/ld+json">
                    {json_ld}
                </script>
            </head>
            <body></body>
            </html>
            "#
        );
        Html::parse_document(&html)
    }

    #[test]
    fn test_parse_basic_recipe() {
        let json_ld = r#"
        {
            "@context": "https://schema.org/",
            "@type": "Recipe",
            "name": "Chocolate Chip Cookies",
            "description": "Delicious homemade cookies",
            "image": "https://example.com/cookie.jpg",
            "prepTime": "PT15M",
            "cookTime": "PT10M",
            "recipeYield": "24 cookies",
            "recipeIngredient": ["2 cups flour", "1 cup sugar", "chocolate chips"],
            "recipeInstructions": "Mix ingredients. Bake at 350F for 10 minutes."
        }
        "#;
        let document = create_html_document(json_ld);

        let recipe = JsonLdExtractor.parse(&document).unwrap();

        assert_eq!(recipe.title, "Chocolate Chip Cookies");
        assert_eq!(recipe.description, Some("Delicious homemade cookies".to_string()));
        assert_eq!(recipe.image_url, Some("https://example.com/cookie.jpg".to_string()));
        assert_eq!(recipe.prep_time, Some(15));
        assert_eq!(recipe.cook_time, Some(10));
        assert_eq!(recipe.servings, Some(24));
        assert_eq!(recipe.ingredients.len(), 3);
        assert_eq!(recipe.ingredients[0].amount, "240g");
        assert_eq!(recipe.ingredients[0].name, "flour");
        assert_eq!(recipe.ingredients[2].amount, "");
        assert_eq!(recipe.ingredients[2].name, "chocolate chips");
        assert_eq!(
            recipe.steps,
            vec!["Mix ingredients. Bake at 350F for 10 minutes."]
        );
    }

    #[test]
    fn test_parse_recipe_from_graph() {
        let json_ld = r#"
        {
            "@context": "https://schema.org/",
            "@graph": [
                {"@type": "WebSite", "name": "Recipe Website"},
                {
                    "@type": "Recipe",
                    "name": "Pasta Carbonara",
                    "recipeIngredient": ["spaghetti"],
                    "recipeInstructions": [
                        {"@type": "HowToStep", "text": "Cook pasta"},
                        {"@type": "HowToStep", "text": "Fry bacon"}
                    ]
                }
            ]
        }
        "#;
        let document = create_html_document(json_ld);

        let recipe = JsonLdExtractor.parse(&document).unwrap();

        assert_eq!(recipe.title, "Pasta Carbonara");
        assert_eq!(recipe.steps, vec!["Cook pasta", "Fry bacon"]);
    }

    #[test]
    fn test_parse_recipe_from_array() {
        let json_ld = r#"
        [
            {"@type": "WebSite", "name": "Recipe Website"},
            {
                "@type": "Recipe",
                "name": "Lemonade",
                "recipeIngredient": ["4 lemons"],
                "recipeInstructions": ["Juice lemons", "Add water"]
            }
        ]
        "#;
        let document = create_html_document(json_ld);

        let recipe = JsonLdExtractor.parse(&document).unwrap();

        assert_eq!(recipe.title, "Lemonade");
        assert_eq!(recipe.steps, vec!["Juice lemons", "Add water"]);
    }

    #[test]
    fn test_type_array_and_iri_forms() {
        let json_ld = r#"
        {
            "@type": ["Recipe", "NewsArticle"],
            "name": "Typed Twice"
        }
        "#;
        let document = create_html_document(json_ld);
        assert_eq!(JsonLdExtractor.parse(&document).unwrap().title, "Typed Twice");

        let json_ld = r#"
        {
            "@type": "https://schema.org/Recipe",
            "name": "Fully Qualified"
        }
        "#;
        let document = create_html_document(json_ld);
        assert_eq!(
            JsonLdExtractor.parse(&document).unwrap().title,
            "Fully Qualified"
        );
    }

    #[test]
    fn test_no_recipe_returns_none() {
        let json_ld = r#"
        {
            "@type": "Article",
            "name": "Ten Best Knives"
        }
        "#;
        let document = create_html_document(json_ld);
        assert!(JsonLdExtractor.parse(&document).is_none());
    }

    #[test]
    fn test_untitled_default() {
        let json_ld = r#"{"@type": "Recipe"}"#;
        let document = create_html_document(json_ld);
        let recipe = JsonLdExtractor.parse(&document).unwrap();
        assert_eq!(recipe.title, "Untitled Recipe");
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }

    #[test]
    fn test_howto_section_flattening() {
        let json_ld = r#"
        {
            "@type": "Recipe",
            "name": "Layer Cake",
            "recipeInstructions": [
                {
                    "@type": "HowToSection",
                    "name": "Make the batter",
                    "itemListElement": [
                        {"@type": "HowToStep", "text": "Cream butter and sugar"},
                        {"@type": "HowToStep", "text": "Fold in flour"}
                    ]
                },
                {"@type": "HowToStep", "name": "Bake"}
            ]
        }
        "#;
        let document = create_html_document(json_ld);

        let recipe = JsonLdExtractor.parse(&document).unwrap();

        assert_eq!(
            recipe.steps,
            vec!["Cream butter and sugar", "Fold in flour", "Bake"]
        );
    }

    #[test]
    fn test_string_instructions_split_on_newlines() {
        let json_ld = r#"
        {
            "@type": "Recipe",
            "name": "Toast",
            "recipeInstructions": "Slice bread\n\nToast it\n"
        }
        "#;
        let document = create_html_document(json_ld);

        let recipe = JsonLdExtractor.parse(&document).unwrap();
        assert_eq!(recipe.steps, vec!["Slice bread", "Toast it"]);
    }

    #[test]
    fn test_yield_variants() {
        for (json_yield, expected) in [
            (r#""Serves 4 to 6""#, Some(4)),
            ("8", Some(8)),
            (r#"["12 muffins", "12"]"#, Some(12)),
            (r#""no digits here""#, None),
        ] {
            let json_ld = format!(
                r#"{{"@type": "Recipe", "name": "Yield", "recipeYield": {json_yield}}}"#
            );
            let document = create_html_document(&json_ld);
            let recipe = JsonLdExtractor.parse(&document).unwrap();
            assert_eq!(recipe.servings, expected, "yield: {json_yield}");
        }
    }

    #[test]
    fn test_image_variants() {
        for (json_image, expected) in [
            (r#""https://example.com/a.jpg""#, "https://example.com/a.jpg"),
            (
                r#"["https://example.com/b.jpg", "https://example.com/c.jpg"]"#,
                "https://example.com/b.jpg",
            ),
            (r#"{"url": "https://example.com/d.jpg"}"#, "https://example.com/d.jpg"),
            (
                r#"[{"@type": "ImageObject", "url": "https://example.com/e.jpg"}]"#,
                "https://example.com/e.jpg",
            ),
        ] {
            let json_ld =
                format!(r#"{{"@type": "Recipe", "name": "Image", "image": {json_image}}}"#);
            let document = create_html_document(&json_ld);
            let recipe = JsonLdExtractor.parse(&document).unwrap();
            assert_eq!(recipe.image_url.as_deref(), Some(expected), "image: {json_image}");
        }
    }
}
