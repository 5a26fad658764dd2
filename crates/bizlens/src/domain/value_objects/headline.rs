//! HeadlineTemplate - Fixed marketing headline catalog
//!
//! The catalog order is load-bearing: selection indexes into it by
//! seed bucket, so reordering entries changes every generated headline.

/// One entry of the headline catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlineTemplate(&'static str);

impl HeadlineTemplate {
    /// Substitute every `{name}` and `{location}` occurrence
    pub fn render(&self, name: &str, location: &str) -> String {
        self.0.replace("{name}", name).replace("{location}", location)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// The fixed headline catalog, index 0-9
pub const TEMPLATES: [HeadlineTemplate; 10] = [
    HeadlineTemplate("Why {name} is {location}'s Best-Kept Secret in 2025"),
    HeadlineTemplate("The Ultimate Guide to {name}: {location}'s Premier Destination"),
    HeadlineTemplate("Discover Why {name} Dominates {location}'s Market This Year"),
    HeadlineTemplate("{name}: Revolutionizing {location} One Customer at a Time"),
    HeadlineTemplate("From Local Favorite to Regional Star: {name}'s {location} Success Story"),
    HeadlineTemplate("The {name} Experience: Setting New Standards in {location}"),
    HeadlineTemplate("Why Smart {location} Residents Choose {name} Every Time"),
    HeadlineTemplate("{name}: The Hidden Gem That's Transforming {location}"),
    HeadlineTemplate("Breaking: {name} Becomes {location}'s Most Talked-About Business"),
    HeadlineTemplate("The Science Behind {name}'s Success in {location}"),
];

/// Number of catalog entries
pub const TEMPLATE_COUNT: usize = TEMPLATES.len();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_entries_with_both_placeholders() {
        assert_eq!(TEMPLATE_COUNT, 10);
        for template in TEMPLATES {
            assert!(template.as_str().contains("{name}"));
            assert!(template.as_str().contains("{location}"));
        }
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let headline = TEMPLATES[5].render("Cake & Co", "Mumbai");
        assert_eq!(
            headline,
            "The Cake & Co Experience: Setting New Standards in Mumbai"
        );
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let template = HeadlineTemplate("{name} loves {location}, and {location} loves {name}");
        assert_eq!(
            template.render("Ana", "Rio"),
            "Ana loves Rio, and Rio loves Ana"
        );
    }
}
