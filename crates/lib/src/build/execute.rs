//! Build script invocation.
//!
//! Runs `build.sh --profile <path> [--bin <path>]` and echoes its stdout line by
//! line from a detached task while waiting for it to exit. The echo task is never
//! joined, so its last lines may land after the caller has moved on.
//!
//! The pipe is drained to EOF whatever bytes arrive. Closing it early would kill
//! the tool with SIGPIPE on its next write.

use std::io::Write;
use std::path::Path;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, trace};

use crate::build::types::ExecuteError;

/// Where build script output is echoed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToolOutput {
  #[default]
  Stdout,
  Stderr,
}

/// Run the build script against `profile`.
///
/// Succeeds only if the script exits with status zero.
pub async fn run_build_script(
  script: &Path,
  profile: &Path,
  bin: Option<&Path>,
  output: ToolOutput,
) -> Result<(), ExecuteError> {
  let mut command = Command::new(script);
  command.arg("--profile").arg(profile);
  if let Some(bin) = bin {
    command.arg("--bin").arg(bin);
  }
  command.stdout(Stdio::piped());

  debug!(script = ?script, profile = ?profile, bin = ?bin, "spawning build script");

  let mut child = command.spawn().map_err(|source| ExecuteError::Spawn {
    script: script.to_path_buf(),
    source,
  })?;

  if let Some(stdout) = child.stdout.take() {
    tokio::spawn(async move {
      match output {
        ToolOutput::Stdout => echo_lines(stdout, std::io::stdout()).await,
        ToolOutput::Stderr => echo_lines(stdout, std::io::stderr()).await,
      }
    });
  }

  let status = child.wait().await.map_err(|source| ExecuteError::Wait {
    script: script.to_path_buf(),
    source,
  })?;

  if !status.success() {
    return Err(ExecuteError::Exit {
      script: script.to_path_buf(),
      code: status.code(),
    });
  }

  Ok(())
}

/// Copy `reader` to `out` line by line until EOF.
///
/// Lines that are not valid UTF-8 are echoed lossily. Write failures on `out`
/// are ignored so the tool's pipe keeps draining.
async fn echo_lines<R, W>(reader: R, mut out: W)
where
  R: AsyncRead + Unpin,
  W: Write,
{
  let mut reader = BufReader::new(reader);
  let mut buf = Vec::new();

  loop {
    buf.clear();
    match reader.read_until(b'\n', &mut buf).await {
      Ok(0) => break,
      Ok(_) => {
        let line = String::from_utf8_lossy(&buf);
        let _ = writeln!(out, "{}", line.trim_end_matches(['\r', '\n']));
      }
      Err(e) => {
        trace!(error = %e, "build output stream failed");
        break;
      }
    }
  }
}
