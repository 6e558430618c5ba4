//! Steps for the dynamic-id property lookup workflow

use cucumber::{given, then};
use uiprobe_pages::{DynamicPropertiesPage, LookupStrategy};
use uiprobe_screenplay::Ensure;

use crate::world::ScenarioWorld;

#[given(expr = "{word} navigates to the dynamic properties page")]
async fn navigates_to_the_dynamic_properties_page(
    world: &mut ScenarioWorld,
    name: String,
) -> anyhow::Result<()> {
    let site = world.site();
    let actor = world.ensure_actor(&name).await?;
    actor.attempts_to(DynamicPropertiesPage::open(&site)).await?;
    Ok(())
}

#[then(expr = "they should see the text {string} when locating by visible text")]
async fn sees_text_by_visible_text(
    world: &mut ScenarioWorld,
    expected: String,
) -> anyhow::Result<()> {
    let actual = DynamicPropertiesPage::text_of_random_id_element(
        world.actor()?,
        LookupStrategy::ByVisibleText,
    )
    .await?;
    Ensure::equal("random-id element text", &actual, &expected)?;
    Ok(())
}

#[then(expr = "they should see the text {string} when locating by dynamic id")]
async fn sees_text_by_dynamic_id(
    world: &mut ScenarioWorld,
    expected: String,
) -> anyhow::Result<()> {
    let actual = DynamicPropertiesPage::text_of_random_id_element(
        world.actor()?,
        LookupStrategy::ByDynamicId,
    )
    .await?;
    Ensure::equal("random-id element text", &actual, &expected)?;
    Ok(())
}
