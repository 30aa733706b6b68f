use recipe_scraper::{scrape_recipe, Confidence};

#[test]
fn test_extracts_recipe_from_page() {
    let html = r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>Best Banana Bread</title>
        <script type="application/ld+json">
        {
            "@context": "https://schema.org",
            "@type": "Recipe",
            "name": "Banana Bread",
            "description": "Moist and easy",
            "prepTime": "PT10M",
            "cookTime": "PT1H",
            "recipeYield": "1 loaf",
            "recipeIngredient": [
                "2 cups flour",
                "1/2 cup butter",
                "3 ripe bananas"
            ],
            "recipeInstructions": [
                {"@type": "HowToStep", "text": "Mash bananas"},
                {"@type": "HowToStep", "text": "Mix and bake"}
            ],
            "image": "https://example.com/bread.jpg"
        }
        </script>
    </head>
    <body><h1>Banana Bread</h1></body>
    </html>
    "#;

    let recipe = scrape_recipe(html).unwrap();

    assert_eq!(recipe.title, "Banana Bread");
    assert_eq!(recipe.description, Some("Moist and easy".to_string()));
    assert_eq!(recipe.prep_time, Some(10));
    assert_eq!(recipe.cook_time, Some(60));
    assert_eq!(recipe.servings, Some(1));
    assert_eq!(recipe.image_url, Some("https://example.com/bread.jpg".to_string()));

    // 2 cups flour at 120 g/cup
    assert_eq!(recipe.ingredients[0].amount, "240g");
    assert_eq!(recipe.ingredients[0].name, "flour");
    // 0.5 cup butter at 227 g/cup rounds to 114g
    assert_eq!(recipe.ingredients[1].amount, "114g");
    assert_eq!(recipe.ingredients[1].name, "butter");
    // no unit, the count stays as-is
    assert_eq!(recipe.ingredients[2].amount, "3");
    assert_eq!(recipe.ingredients[2].name, "ripe bananas");

    assert_eq!(recipe.steps, vec!["Mash bananas", "Mix and bake"]);
}

#[test]
fn test_malformed_sibling_block_is_skipped() {
    let html = r#"
    <html><head>
        <script type="application/ld+json">
            {this is not json at all
        </script>
        <script type="application/ld+json">
            {"@type": "Recipe", "name": "Survivor Stew"}
        </script>
    </head><body></body></html>
    "#;

    let recipe = scrape_recipe(html).unwrap();
    assert_eq!(recipe.title, "Survivor Stew");
}

#[test]
fn test_page_without_recipe_returns_none() {
    let html = r#"
    <html><head>
        <script type="application/ld+json">
            {"@type": "Article", "name": "Our Story"}
        </script>
    </head><body><p>No recipe here.</p></body></html>
    "#;

    assert!(scrape_recipe(html).is_none());
}

#[test]
fn test_recipe_inside_graph() {
    let html = r#"
    <html><head>
        <script type="application/ld+json">
        {
            "@context": "https://schema.org",
            "@graph": [
                {"@type": "Organization", "name": "Food Site"},
                {"@type": "BreadcrumbList"},
                {
                    "@type": "Recipe",
                    "name": "Graph Granola",
                    "recipeIngredient": ["1-2 tbsp olive oil"],
                    "recipeInstructions": ["Toast everything"]
                }
            ]
        }
        </script>
    </head><body></body></html>
    "#;

    let recipe = scrape_recipe(html).unwrap();
    assert_eq!(recipe.title, "Graph Granola");
    // ranges render in ml with both endpoints converted
    assert_eq!(recipe.ingredients[0].amount, "15-30ml");
    assert_eq!(recipe.ingredients[0].name, "olive oil");
}

#[test]
fn test_double_encoded_entities_are_decoded() {
    let html = r#"
    <html><head>
        <script type="application/ld+json">
        {
            "@type": "Recipe",
            "name": "Mac &amp;amp; Cheese",
            "recipeIngredient": ["8 oz elbow macaroni"]
        }
        </script>
    </head><body></body></html>
    "#;

    let recipe = scrape_recipe(html).unwrap();
    assert_eq!(recipe.title, "Mac & Cheese");
    assert_eq!(recipe.ingredients[0].amount, "224g");
}

#[test]
fn test_parsed_line_confidence_surfaces() {
    use recipe_scraper::parse_ingredient_line;

    let line = parse_ingredient_line("2 cups chicken stock");
    assert_eq!(line.amount, "480ml");
    assert_eq!(line.confidence, Confidence::Medium);

    let line = parse_ingredient_line("1 cup flour");
    assert_eq!(line.amount, "120g");
    assert_eq!(line.confidence, Confidence::High);
}

#[test]
fn test_serializes_camel_case() {
    let html = r#"
    <html><head>
        <script type="application/ld+json">
        {"@type": "Recipe", "name": "Plain", "prepTime": "PT5M", "image": "https://example.com/p.jpg"}
        </script>
    </head><body></body></html>
    "#;

    let recipe = scrape_recipe(html).unwrap();
    let json = serde_json::to_value(&recipe).unwrap();
    assert_eq!(json["prepTime"], 5);
    assert_eq!(json["imageUrl"], "https://example.com/p.jpg");
    assert!(json.get("cookTime").is_none());
}
