//! Driver session lifecycle and command dispatch

use std::fmt;
use std::process::Stdio;
use std::time::Duration;

use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::BrowserConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::protocol::{PageCommand, PageResponse, Request, WaitState};
use crate::script::driver_script;

/// A live browser page behind a Node driver process.
///
/// One session means one browser, one context, one page. Scenarios that
/// need isolation launch their own session.
pub struct Session {
    child: Child,
    stdin: ChildStdin,
    lines: Lines<BufReader<ChildStdout>>,
    next_id: u64,
    command_timeout: Duration,
    // Holds the driver script on disk for the lifetime of the process
    _script_dir: TempDir,
}

impl Session {
    /// Launch the driver and wait for its ready handshake.
    pub async fn launch(config: &BrowserConfig) -> BridgeResult<Self> {
        check_node_installed()?;

        let script_dir = tempfile::tempdir()?;
        let script_path = script_dir.path().join("driver.js");
        std::fs::write(&script_path, driver_script(config))?;

        debug!("Spawning browser driver: {}", script_path.display());

        let mut command = Command::new("node");
        command
            .arg(&script_path)
            .current_dir(script_dir.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &config.node_modules_dir {
            command.env("NODE_PATH", dir);
        }

        let mut child = command
            .spawn()
            .map_err(|e| BridgeError::DriverStartup(format!("failed to spawn node: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| BridgeError::DriverStartup("driver stdin unavailable".into()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| BridgeError::DriverStartup("driver stdout unavailable".into()))?;
        if let Some(stderr) = child.stderr.take() {
            forward_stderr(stderr);
        }

        let mut session = Self {
            child,
            stdin,
            lines: BufReader::new(stdout).lines(),
            next_id: 0,
            command_timeout: config.command_timeout,
            _script_dir: script_dir,
        };

        session.wait_for_ready(config.startup_timeout).await?;
        info!("Browser driver ready ({})", config.engine);
        Ok(session)
    }

    /// Block until the driver announces the page is open.
    async fn wait_for_ready(&mut self, startup_timeout: Duration) -> BridgeResult<()> {
        let line = timeout(startup_timeout, self.lines.next_line())
            .await
            .map_err(|_| BridgeError::Timeout(startup_timeout.as_millis() as u64))?
            .map_err(BridgeError::Io)?
            .ok_or_else(|| BridgeError::DriverGone("closed stdout before handshake".into()))?;

        let response: PageResponse = serde_json::from_str(&line)
            .map_err(|e| BridgeError::Protocol(format!("bad handshake line `{line}`: {e}")))?;

        match response {
            PageResponse { ok: true, event: Some(ref event), .. } if event == "ready" => Ok(()),
            PageResponse { error: Some(message), .. } => {
                Err(BridgeError::DriverStartup(message))
            }
            other => Err(BridgeError::Protocol(format!(
                "unexpected handshake response: {other:?}"
            ))),
        }
    }

    /// Send one command and await its response.
    pub async fn execute(&mut self, command: PageCommand) -> BridgeResult<PageResponse> {
        self.next_id += 1;
        let request = Request { id: self.next_id, command };
        let action = request.command.action();

        debug!("-> {}", action);

        let mut payload = serde_json::to_string(&request)?;
        payload.push('\n');
        self.stdin.write_all(payload.as_bytes()).await?;
        self.stdin.flush().await?;

        loop {
            let line = timeout(self.command_timeout, self.lines.next_line())
                .await
                .map_err(|_| BridgeError::Timeout(self.command_timeout.as_millis() as u64))?
                .map_err(BridgeError::Io)?
                .ok_or_else(|| {
                    BridgeError::DriverGone(format!("no response to `{action}`"))
                })?;

            let response: PageResponse = serde_json::from_str(&line)
                .map_err(|e| BridgeError::Protocol(format!("bad response line `{line}`: {e}")))?;

            if response.id != Some(request.id) {
                // Stray event or stale reply; keep waiting for ours
                warn!("ignoring out-of-band driver line: {line}");
                continue;
            }

            if response.ok {
                return Ok(response);
            }
            return Err(BridgeError::Command {
                action: action.to_string(),
                message: response.error.unwrap_or_else(|| "unknown driver error".into()),
            });
        }
    }

    /// Navigate to an absolute URL.
    pub async fn goto(&mut self, url: &str) -> BridgeResult<()> {
        self.execute(PageCommand::Goto { url: url.to_string() }).await?;
        Ok(())
    }

    /// Full page reload; resolves once the navigation completes.
    pub async fn reload(&mut self) -> BridgeResult<()> {
        self.execute(PageCommand::Reload).await?;
        Ok(())
    }

    pub async fn fill(&mut self, selector: &str, value: &str) -> BridgeResult<()> {
        self.execute(PageCommand::Fill {
            selector: selector.to_string(),
            value: value.to_string(),
        })
        .await?;
        Ok(())
    }

    pub async fn click(&mut self, selector: &str) -> BridgeResult<()> {
        self.execute(PageCommand::Click { selector: selector.to_string() }).await?;
        Ok(())
    }

    /// Inner text of the first matching element.
    pub async fn text(&mut self, selector: &str) -> BridgeResult<String> {
        let response = self.execute(PageCommand::Text { selector: selector.to_string() }).await?;
        response.value.ok_or_else(|| {
            BridgeError::Protocol(format!("`text` returned no value for `{selector}`"))
        })
    }

    /// Inner texts of all matching elements, in document order.
    pub async fn text_all(&mut self, selector: &str) -> BridgeResult<Vec<String>> {
        let response =
            self.execute(PageCommand::TextAll { selector: selector.to_string() }).await?;
        Ok(response.values.unwrap_or_default())
    }

    /// Attribute value of the first matching element; None when absent.
    pub async fn attribute(
        &mut self,
        selector: &str,
        name: &str,
    ) -> BridgeResult<Option<String>> {
        let response = self
            .execute(PageCommand::Attribute {
                selector: selector.to_string(),
                name: name.to_string(),
            })
            .await?;
        Ok(response.value)
    }

    pub async fn wait_for(
        &mut self,
        selector: &str,
        state: WaitState,
        wait_timeout: Duration,
    ) -> BridgeResult<()> {
        self.execute(PageCommand::WaitFor {
            selector: selector.to_string(),
            state,
            timeout_ms: wait_timeout.as_millis() as u64,
        })
        .await?;
        Ok(())
    }

    /// Ask the driver to shut down, then reap the process.
    pub async fn close(&mut self) -> BridgeResult<()> {
        if let Err(e) = self.execute(PageCommand::Close).await {
            warn!("driver close command failed: {e}");
        }
        match timeout(Duration::from_secs(5), self.child.wait()).await {
            Ok(status) => {
                debug!("driver exited: {:?}", status?);
            }
            Err(_) => {
                warn!("driver did not exit in time, killing");
                self.child.kill().await?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("next_id", &self.next_id)
            .field("command_timeout", &self.command_timeout)
            .finish_non_exhaustive()
    }
}

/// Check that a Node runtime is on PATH.
fn check_node_installed() -> BridgeResult<()> {
    let status = std::process::Command::new("node")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => Ok(()),
        _ => Err(BridgeError::NodeNotFound),
    }
}

/// Surface driver diagnostics without letting the pipe fill up.
fn forward_stderr(stderr: tokio::process::ChildStderr) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(stderr).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            debug!("driver stderr: {line}");
        }
    });
}
