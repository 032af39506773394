//! History normalization: one assistant turn per run of consecutive assistant turns.

use crate::ignore::IgnoreListSource;
use crate::turn::Turn;

/// Separator placed between assistant contents merged into one turn.
pub const MERGE_SEPARATOR: &str = "\n---\n";

/// Collapse every maximal run of `"assistant"` turns into a single assistant turn.
///
/// `pending_user_turn` is a message not yet stored in `history` but about to be sent; it is
/// appended before the scan unless its role or content is empty. Non-assistant turns pass
/// through unchanged and in order, so the output is only free of adjacent assistant turns,
/// not strictly alternating. The input is not modified.
#[must_use]
pub fn normalize_history(history: &[Turn], pending_user_turn: Option<&Turn>) -> Vec<Turn> {
    let pending =
        pending_user_turn.filter(|turn| !turn.role.is_empty() && !turn.content.is_empty());
    let mut out = Vec::with_capacity(history.len() + 1);
    let mut assistant_run: Vec<&str> = Vec::new();
    let mut merged_runs = 0usize;

    for turn in history.iter().chain(pending) {
        if turn.is_assistant() {
            assistant_run.push(&turn.content);
            continue;
        }
        if flush_assistant_run(&mut assistant_run, &mut out) > 1 {
            merged_runs += 1;
        }
        out.push(turn.clone());
    }
    if flush_assistant_run(&mut assistant_run, &mut out) > 1 {
        merged_runs += 1;
    }

    tracing::debug!(
        input_turns = history.len(),
        pending = pending.is_some(),
        output_turns = out.len(),
        merged_runs,
        "normalized chat history"
    );
    out
}

/// Pending user turn to pass to [`normalize_history`], if any.
///
/// Present only when `include_pending` is set and both role and content are supplied.
#[must_use]
pub fn pending_user_turn(
    include_pending: bool,
    role: Option<String>,
    content: Option<String>,
) -> Option<Turn> {
    match (include_pending, role, content) {
        (true, Some(role), Some(content)) => Some(Turn::new(role, content)),
        _ => None,
    }
}

/// Push the buffered run as one assistant turn. Returns how many turns were merged.
fn flush_assistant_run(run: &mut Vec<&str>, out: &mut Vec<Turn>) -> usize {
    let len = run.len();
    if len == 0 {
        return 0;
    }
    out.push(Turn::assistant(run.join(MERGE_SEPARATOR)));
    run.clear();
    len
}

/// True when two adjacent turns both have role `"assistant"`.
#[must_use]
pub fn has_consecutive_assistant_turns(turns: &[Turn]) -> bool {
    turns
        .windows(2)
        .any(|pair| matches!(pair, [a, b] if a.is_assistant() && b.is_assistant()))
}

/// Copy of `history` without the user turns `source` marks as ignored.
#[must_use]
pub fn strip_ignored_user_turns<S>(history: &[Turn], source: &S) -> Vec<Turn>
where
    S: IgnoreListSource + ?Sized,
{
    history
        .iter()
        .filter(|turn| !source.is_ignored(&turn.role, &turn.content))
        .cloned()
        .collect()
}
