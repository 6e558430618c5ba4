//! Steps for the dynamic-content verification workflow

use anyhow::Context;
use cucumber::{given, then, when};
use uiprobe_pages::DynamicContentPage;
use uiprobe_screenplay::{ContentSnapshot, Reload};

use crate::world::ScenarioWorld;

#[given(expr = "{word} is on the dynamic content page")]
async fn is_on_the_dynamic_content_page(
    world: &mut ScenarioWorld,
    name: String,
) -> anyhow::Result<()> {
    let site = world.site();
    let actor = world.ensure_actor(&name).await?;
    actor.attempts_to(DynamicContentPage::open(&site)).await?;
    Ok(())
}

#[when("they capture the initial content")]
async fn captures_the_initial_content(world: &mut ScenarioWorld) -> anyhow::Result<()> {
    let texts = world.actor()?.answer(DynamicContentPage::dynamic_text()).await?;
    world.before_reload = Some(ContentSnapshot::capture(texts));
    Ok(())
}

#[when("they reload the page")]
async fn reloads_the_page(world: &mut ScenarioWorld) -> anyhow::Result<()> {
    world.actor()?.attempts_to(Reload).await?;
    Ok(())
}

#[then("they should see different content after reload")]
async fn sees_different_content(world: &mut ScenarioWorld) -> anyhow::Result<()> {
    let texts = world.actor()?.answer(DynamicContentPage::dynamic_text()).await?;
    let after = ContentSnapshot::capture(texts);
    let before = world
        .before_reload
        .as_ref()
        .context("no content was captured before the reload")?;
    before.verify_changed(&after)?;
    Ok(())
}
