//! Steps for the login credential workflow

use cucumber::{given, then, when};
use uiprobe_pages::LoginPage;
use uiprobe_screenplay::text::{collapse_whitespace, strip_dismiss_glyph};
use uiprobe_screenplay::Ensure;

use crate::world::ScenarioWorld;

#[given(expr = "{word} is on the login page")]
async fn is_on_the_login_page(world: &mut ScenarioWorld, name: String) -> anyhow::Result<()> {
    let site = world.site();
    let actor = world.ensure_actor(&name).await?;
    actor.attempts_to(LoginPage::open(&site)).await?;
    Ok(())
}

// Valid and invalid credentials are the same action; only the site's
// response tells them apart.
#[when(expr = "they log in with valid username {string} and password {string}")]
#[when(expr = "they log in with invalid username {string} and password {string}")]
#[when(expr = "they log in with username {string} and password {string}")]
async fn logs_in_with_credentials(
    world: &mut ScenarioWorld,
    username: String,
    password: String,
) -> anyhow::Result<()> {
    world
        .actor()?
        .attempts_to(LoginPage::login_with_credentials(&username, &password))
        .await?;
    Ok(())
}

#[then(expr = "they should see the {string} page")]
async fn sees_the_secure_area(world: &mut ScenarioWorld, expected: String) -> anyhow::Result<()> {
    let message = world.actor()?.answer(LoginPage::flash_message()).await?;
    let cleaned = strip_dismiss_glyph(&message);
    Ensure::equal("flash message", &cleaned, expected.trim())?;
    Ok(())
}

#[then(expr = "they should see an error message {string}")]
async fn sees_an_error_message(world: &mut ScenarioWorld, expected: String) -> anyhow::Result<()> {
    let message = world.actor()?.answer(LoginPage::flash_message()).await?;
    let normalised = collapse_whitespace(&message);
    Ensure::equal("flash message", &normalised, &expected)?;
    Ok(())
}
