//! Draft-input rules for the footer.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

/// True when the current draft can be sent.
///
/// Deliberately no trimming: any non-empty string, including whitespace,
/// enables sending. Matches shipped behavior; see DESIGN.md.
pub fn can_send(draft: &str) -> bool {
    !draft.is_empty()
}
