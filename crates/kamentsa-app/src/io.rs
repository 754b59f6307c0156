use std::sync::Arc;

use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::events::{Request, handle_request};
use crate::state::AppState;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub handled: usize,
    pub rejected: usize,
}

/// Answer JSON-line requests from `reader`, one JSON line per request.
///
/// Blank lines are skipped; a line that is not a valid request gets an
/// `{"error": ...}` line and the batch carries on.
pub async fn run_batch<R, W>(
    state: Arc<AppState>,
    reader: R,
    mut writer: W,
) -> anyhow::Result<BatchStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    tracing::info!(
        "Batch mode: policy {:?}, min quality {}",
        state.config.validation.policy,
        state.config.validation.min_quality
    );

    let mut stats = BatchStats::default();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => {
                tracing::debug!("Batch request: {:?}", request);
                stats.handled += 1;
                handle_request(&state, request)?
            }
            Err(e) => {
                tracing::warn!("Rejected batch line: {}", e);
                stats.rejected += 1;
                json!({ "error": e.to_string() })
            }
        };

        let mut out = serde_json::to_string(&response)?;
        out.push('\n');
        writer.write_all(out.as_bytes()).await?;
    }

    writer.flush().await?;
    Ok(stats)
}
