//! Generation of the Node driver program
//!
//! The driver is a self-contained script: it launches the configured
//! engine, opens one page, announces readiness, then serves commands from
//! stdin until a `close` command or EOF. Each command is answered with
//! exactly one JSON line carrying the request id.

use crate::config::BrowserConfig;

/// Build the driver source for a session.
pub fn driver_script(config: &BrowserConfig) -> String {
    format!(
        r#"const {{ {engine} }} = require('playwright');
const readline = require('readline');

function reply(obj) {{
  process.stdout.write(JSON.stringify(obj) + '\n');
}}

(async () => {{
  let browser;
  try {{
    browser = await {engine}.launch({{ headless: {headless} }});
    const context = await browser.newContext({{
      viewport: {{ width: {width}, height: {height} }}
    }});
    context.setDefaultTimeout({timeout_ms});
    const page = await context.newPage();

    const handlers = {{
      goto: async (cmd) => {{
        await page.goto(cmd.url, {{ waitUntil: 'load' }});
        return {{}};
      }},
      reload: async () => {{
        await page.reload({{ waitUntil: 'load' }});
        return {{}};
      }},
      fill: async (cmd) => {{
        await page.locator(cmd.selector).first().fill(cmd.value);
        return {{}};
      }},
      click: async (cmd) => {{
        await page.locator(cmd.selector).first().click();
        return {{}};
      }},
      text: async (cmd) => {{
        return {{ value: await page.locator(cmd.selector).first().innerText() }};
      }},
      text_all: async (cmd) => {{
        return {{ values: await page.locator(cmd.selector).allInnerTexts() }};
      }},
      attribute: async (cmd) => {{
        const value = await page.locator(cmd.selector).first().getAttribute(cmd.name);
        return value === null ? {{}} : {{ value }};
      }},
      wait_for: async (cmd) => {{
        await page.locator(cmd.selector).first().waitFor({{
          state: cmd.state,
          timeout: cmd.timeout_ms
        }});
        return {{}};
      }},
      close: async () => {{
        return {{}};
      }},
    }};

    reply({{ ok: true, event: 'ready' }});

    const rl = readline.createInterface({{ input: process.stdin }});
    for await (const line of rl) {{
      if (!line.trim()) continue;
      let cmd;
      try {{
        cmd = JSON.parse(line);
      }} catch (err) {{
        reply({{ ok: false, error: 'unparseable command: ' + err.message }});
        continue;
      }}
      const handler = handlers[cmd.action];
      if (!handler) {{
        reply({{ id: cmd.id, ok: false, error: 'unknown action: ' + cmd.action }});
        continue;
      }}
      try {{
        const result = await handler(cmd);
        reply({{ id: cmd.id, ok: true, ...result }});
      }} catch (err) {{
        reply({{ id: cmd.id, ok: false, error: err.message }});
      }}
      if (cmd.action === 'close') break;
    }}
  }} catch (err) {{
    reply({{ ok: false, error: err.message }});
    process.exitCode = 1;
  }} finally {{
    if (browser) await browser.close();
  }}
}})();
"#,
        engine = config.engine.as_str(),
        headless = config.headless,
        width = config.viewport_width,
        height = config.viewport_height,
        timeout_ms = config.command_timeout.as_millis(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Engine;

    #[test]
    fn test_driver_script_default() {
        let script = driver_script(&BrowserConfig::default());
        assert!(script.contains("require('playwright')"));
        assert!(script.contains("chromium.launch({ headless: true })"));
        assert!(script.contains("width: 1280, height: 720"));
        assert!(script.contains("setDefaultTimeout(30000)"));
        assert!(script.contains("event: 'ready'"));
        assert!(script.contains("browser.close()"));
    }

    #[test]
    fn test_driver_script_firefox_headed() {
        let config = BrowserConfig {
            engine: Engine::Firefox,
            headless: false,
            ..Default::default()
        };
        let script = driver_script(&config);
        assert!(script.contains("const { firefox } = require('playwright')"));
        assert!(script.contains("firefox.launch({ headless: false })"));
    }

    #[test]
    fn test_driver_script_handles_every_protocol_action() {
        let script = driver_script(&BrowserConfig::default());
        for action in [
            "goto", "reload", "fill", "click", "text", "text_all", "attribute", "wait_for",
            "close",
        ] {
            assert!(
                script.contains(&format!("{action}: async")),
                "driver lacks a handler for `{action}`"
            );
        }
    }
}
