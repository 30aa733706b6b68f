//! Readable source names from recipe URLs.

/// Pull the hostname out of a URL without a full URL parser. Returns `None`
/// for anything without a plausible host.
fn hostname(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(rest)
        .split(':')
        .next()
        .unwrap_or("");
    let host = host.trim();
    if host.is_empty() || !host.contains('.') {
        return None;
    }
    Some(host)
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Turn a recipe URL into a display name for its site, e.g.
/// "https://www.seriouseats.com/recipe" becomes "Seriouseats" and
/// "https://cooking.nytimes.com/recipe" becomes "Cooking NYTimes".
pub fn extract_source_name(url: &str) -> String {
    let Some(host) = hostname(url) else {
        return "Unknown Source".to_string();
    };

    let mut name = host.strip_prefix("www.").unwrap_or(host);
    // ".co.uk" has to come off before ".com" would never match it
    for tld in [".co.uk", ".com", ".org", ".net", ".io"] {
        if let Some(stripped) = name.strip_suffix(tld) {
            name = stripped;
            break;
        }
    }

    let formatted: Vec<String> = name
        .split('.')
        .filter(|part| !part.is_empty())
        .map(|part| {
            if part.eq_ignore_ascii_case("nyt") || part.eq_ignore_ascii_case("nytimes") {
                "NYTimes".to_string()
            } else if part.eq_ignore_ascii_case("bbc") {
                "BBC".to_string()
            } else {
                capitalize(part)
            }
        })
        .collect();

    if formatted.is_empty() {
        return "Unknown Source".to_string();
    }
    formatted.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_www_and_tld() {
        assert_eq!(
            extract_source_name("https://www.seriouseats.com/recipe"),
            "Seriouseats"
        );
    }

    #[test]
    fn test_subdomain_parts_are_capitalized() {
        assert_eq!(
            extract_source_name("https://cooking.nytimes.com/recipes/1"),
            "Cooking NYTimes"
        );
    }

    #[test]
    fn test_bbc_special_case() {
        assert_eq!(
            extract_source_name("https://www.bbc.co.uk/food/recipes/pasta"),
            "BBC"
        );
    }

    #[test]
    fn test_co_uk_stripped_before_com() {
        assert_eq!(
            extract_source_name("https://www.deliaonline.co.uk/recipes"),
            "Deliaonline"
        );
    }

    #[test]
    fn test_port_and_query_ignored() {
        assert_eq!(
            extract_source_name("http://recipes.example.org:8080/x?y=1"),
            "Recipes Example"
        );
    }

    #[test]
    fn test_unparseable_url() {
        assert_eq!(extract_source_name("not a url"), "Unknown Source");
        assert_eq!(extract_source_name(""), "Unknown Source");
    }
}
