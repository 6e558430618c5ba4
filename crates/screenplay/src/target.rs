//! Named element locators
//!
//! A [`Target`] pairs a human-readable description with a resolution
//! [`Strategy`]. The description goes into logs and failure messages; the
//! strategy renders to Playwright selector-engine syntax. Keeping the
//! strategy an enum is what lets one page-object method resolve the same
//! conceptual element different ways.

use std::fmt;

/// How an element is resolved on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// CSS selector, e.g. `button[type="submit"]`
    Css(String),
    /// Element id attribute value
    Id(String),
    /// XPath expression
    XPath(String),
    /// Visible text content (substring match)
    Text(String),
}

/// A described, locatable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    description: String,
    strategy: Strategy,
}

impl Target {
    pub fn new(description: impl Into<String>, strategy: Strategy) -> Self {
        Self { description: description.into(), strategy }
    }

    pub fn css(description: impl Into<String>, selector: impl Into<String>) -> Self {
        Self::new(description, Strategy::Css(selector.into()))
    }

    pub fn id(description: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(description, Strategy::Id(id.into()))
    }

    pub fn xpath(description: impl Into<String>, expression: impl Into<String>) -> Self {
        Self::new(description, Strategy::XPath(expression.into()))
    }

    pub fn text(description: impl Into<String>, needle: impl Into<String>) -> Self {
        Self::new(description, Strategy::Text(needle.into()))
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Render the strategy as a Playwright selector string.
    pub fn selector(&self) -> String {
        match &self.strategy {
            Strategy::Css(selector) => selector.clone(),
            Strategy::Id(id) => format!(r#"[id="{id}"]"#),
            Strategy::XPath(expression) => format!("xpath={expression}"),
            Strategy::Text(needle) => format!("text={needle}"),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_selector_passes_through() {
        let target = Target::css("login button", r#"button[type="submit"]"#);
        assert_eq!(target.selector(), r#"button[type="submit"]"#);
        assert_eq!(target.description(), "login button");
    }

    #[test]
    fn test_id_renders_as_attribute_selector() {
        // Per-load generated ids can start with a digit, which `#id` syntax
        // would reject
        let target = Target::id("dynamic element", "4NvaX");
        assert_eq!(target.selector(), r#"[id="4NvaX"]"#);
    }

    #[test]
    fn test_xpath_and_text_get_engine_prefixes() {
        let by_xpath = Target::xpath("first row", "//div/p[1]");
        assert_eq!(by_xpath.selector(), "xpath=//div/p[1]");

        let by_text = Target::text("random id text", "This text has random Id");
        assert_eq!(by_text.selector(), "text=This text has random Id");
    }
}
