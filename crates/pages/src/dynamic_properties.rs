//! The demoqa dynamic-properties page
//!
//! The interesting element here regenerates its `id` attribute on every
//! page load. Both ways of reaching it resolve through one method with a
//! selectable [`LookupStrategy`], so scenarios can check that the two
//! agree on the same page state.

use uiprobe_screenplay::{Actor, Attribute, Navigate, ScreenplayResult, Target, Text};

use crate::site::Site;

/// How to resolve the element with the per-load id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// Match on the element's visible text directly
    ByVisibleText,
    /// Read the current `id` off the structurally-located element, then
    /// re-locate by that id
    ByDynamicId,
}

pub struct DynamicPropertiesPage;

impl DynamicPropertiesPage {
    const RANDOM_ID_TEXT: &'static str = "This text has random Id";

    fn random_id_element_by_text() -> Target {
        Target::xpath(
            "element with random id, by text",
            format!("//*[contains(text(),'{}')]", Self::RANDOM_ID_TEXT),
        )
    }

    /// Structural position of the same element, independent of its id.
    fn random_id_element_by_position() -> Target {
        Target::xpath("element with random id, by position", "//div/p[1]")
    }

    pub fn open(site: &Site) -> Navigate {
        Navigate::to(site.dynamic_properties_url())
    }

    /// Text of the random-id element, resolved per the chosen strategy.
    pub async fn text_of_random_id_element(
        actor: &mut Actor,
        strategy: LookupStrategy,
    ) -> ScreenplayResult<String> {
        match strategy {
            LookupStrategy::ByVisibleText => {
                actor.answer(Text::of(Self::random_id_element_by_text())).await
            }
            LookupStrategy::ByDynamicId => {
                let id = actor
                    .answer(Attribute::called("id").of(Self::random_id_element_by_position()))
                    .await?;
                actor
                    .answer(Text::of(Target::id("element with random id, by current id", id)))
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_locator_embeds_the_expected_text() {
        let target = DynamicPropertiesPage::random_id_element_by_text();
        assert_eq!(
            target.selector(),
            "xpath=//*[contains(text(),'This text has random Id')]"
        );
    }

    #[test]
    fn test_positional_locator_is_id_independent() {
        let target = DynamicPropertiesPage::random_id_element_by_position();
        assert_eq!(target.selector(), "xpath=//div/p[1]");
    }
}
