use anyhow::{Context, Result};
use rmcp::model::CallToolRequestParam;
use rmcp::service::{RoleClient, RunningService, ServiceExt};
use rmcp::transport::TokioChildProcess;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

pub fn locate_docscan_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_docscan-mcp") {
        return Ok(PathBuf::from(path));
    }

    // Try to resolve from the current test executable location.
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("docscan-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    // Final fallback: search the repo target dirs.
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/docscan-mcp", "target/release/docscan-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate docscan-mcp binary; build with: cargo build -p docscan-mcp")
}

/// Spawn the server with the documents root pointed at `docs_root`.
pub async fn start_server(docs_root: &Path) -> Result<RunningService<RoleClient, ()>> {
    let bin = locate_docscan_mcp_bin()?;

    let mut cmd = Command::new(bin);
    cmd.env("DOCSCAN_DOCUMENTS_DIR", docs_root);
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;
    Ok(service)
}

/// Call one tool and return its single text payload.
pub async fn call_tool(
    service: &RunningService<RoleClient, ()>,
    name: &'static str,
    args: serde_json::Value,
) -> Result<String> {
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: name.into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {name}"))??;

    assert_ne!(result.is_error, Some(true), "{name} returned error");
    let text = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .with_context(|| format!("{name} missing text output"))?;
    Ok(text)
}
