//! Trailer toggling (`Signed-off-by: Name <email>` and friends)
//!
//! Toggling is exact-match: the line `key: value` is either removed
//! everywhere in the body or appended after the last body line. Toggling
//! twice gives back the original lines.

use super::message::CommitMessage;
use super::is_blank;
use crate::error::EditorError;
use crate::git::IdentityProvider;

/// Trailer key used for the sign-off toggle
pub const SIGN_OFF_KEY: &str = "Signed-off-by";

/// Whether a line looks like a git trailer (`Key: value`).
///
/// The key is made of word characters and dashes, the value is non-empty.
pub fn is_trailer_line(line: &str) -> bool {
    let Some((key, value)) = line.split_once(": ") else {
        return false;
    };

    !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '-')
        && !value.is_empty()
}

/// Add or remove the trailer `key: value`
pub fn toggle_trailer(message: &CommitMessage, key: &str, value: &str) -> CommitMessage {
    let trailer = format!("{key}: {value}");
    let mut lines = message.to_lines();
    let content_end = message.comment_start();

    let present: Vec<usize> = (1..content_end).filter(|&i| lines[i] == trailer).collect();

    if present.is_empty() {
        insert_trailer(&mut lines, content_end, trailer);
    } else {
        remove_trailers(&mut lines, content_end, &present);
    }

    CommitMessage::parse(&lines)
}

/// Resolve the committer and toggle their `Signed-off-by` trailer.
///
/// Fails with [`EditorError::MissingIdentity`] without touching anything
/// when the identity can't be resolved.
pub fn toggle_sign_off(
    message: &CommitMessage,
    provider: &dyn IdentityProvider,
) -> Result<CommitMessage, EditorError> {
    let identity = provider.identity()?;
    Ok(toggle_trailer(message, SIGN_OFF_KEY, &identity.sign_off_value()))
}

fn insert_trailer(lines: &mut Vec<String>, content_end: usize, trailer: String) {
    // Trailing blank lines (and the comment block) stay after the trailer
    let mut at = content_end;
    while at > 1 && is_blank(&lines[at - 1]) {
        at -= 1;
    }

    let after_title = at == 1;
    if after_title || !is_trailer_line(&lines[at - 1]) {
        lines.insert(at, String::new());
        at += 1;
    }

    tracing::debug!(line = at, "Inserting trailer");
    lines.insert(at, trailer);
}

fn remove_trailers(lines: &mut Vec<String>, mut content_end: usize, present: &[usize]) {
    for &idx in present.iter().rev() {
        tracing::debug!(line = idx, "Removing trailer");
        lines.remove(idx);
        content_end -= 1;

        // Drop the blank line that only separated this trailer from the text above
        let gap_after = idx >= content_end || is_blank(&lines[idx]);
        if gap_after && idx >= 2 && is_blank(&lines[idx - 1]) {
            lines.remove(idx - 1);
            content_end -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Identity;

    const KEY: &str = "Signed-off-by";
    const VALUE: &str = "Test User <test@example.com>";
    const LINE: &str = "Signed-off-by: Test User <test@example.com>";

    fn toggle(text: &str) -> String {
        toggle_trailer(&CommitMessage::from_text(text), KEY, VALUE).to_text()
    }

    struct Fixed(Option<Identity>);

    impl IdentityProvider for Fixed {
        fn identity(&self) -> Result<Identity, EditorError> {
            self.0.clone().ok_or(EditorError::MissingIdentity)
        }
    }

    #[test]
    fn test_is_trailer_line() {
        assert!(is_trailer_line(LINE));
        assert!(is_trailer_line("Acked-by: Someone"));
        assert!(is_trailer_line("Fixes: #123"));
        assert!(is_trailer_line("Co_authored: x"));
        assert!(!is_trailer_line("Just prose: with a colon"));
        assert!(!is_trailer_line(" Indented: value"));
        assert!(!is_trailer_line("Key:value"));
        assert!(!is_trailer_line("Key: "));
        assert!(!is_trailer_line(": value"));
    }

    #[test]
    fn test_adds_blank_line_after_prose() {
        assert_eq!(toggle("Title\n\nBody text"), format!("Title\n\nBody text\n\n{LINE}"));
    }

    #[test]
    fn test_title_only_gets_separator() {
        assert_eq!(toggle("Title"), format!("Title\n\n{LINE}"));
    }

    #[test]
    fn test_empty_title_keeps_trailer_off_separator_line() {
        assert_eq!(toggle(""), format!("\n\n{LINE}"));
    }

    #[test]
    fn test_groups_with_existing_trailers() {
        assert_eq!(
            toggle("Title\n\nBody\n\nAcked-by: Someone <s@example.com>"),
            format!("Title\n\nBody\n\nAcked-by: Someone <s@example.com>\n{LINE}")
        );
    }

    #[test]
    fn test_inserts_before_trailing_blank_lines() {
        assert_eq!(toggle("Title\n\nBody\n"), format!("Title\n\nBody\n\n{LINE}\n"));
    }

    #[test]
    fn test_inserts_before_git_comments() {
        let text = "Title\n\nBody\n\n# Please enter the commit message\n# Lines starting with '#'";
        let toggled = toggle(text);
        let signoff_pos = toggled.find(LINE).unwrap();
        let comment_pos = toggled.find("# Please").unwrap();
        assert!(signoff_pos < comment_pos);
        assert_eq!(
            toggled,
            format!("Title\n\nBody\n\n{LINE}\n\n# Please enter the commit message\n# Lines starting with '#'")
        );
    }

    #[test]
    fn test_git_template_with_empty_message() {
        let text = "\n\n# Please enter the commit message";
        assert_eq!(toggle(text), format!("\n\n{LINE}\n\n# Please enter the commit message"));
    }

    #[test]
    fn test_removes_existing_trailer() {
        assert_eq!(toggle(&format!("Title\n\nBody\n\n{LINE}")), "Title\n\nBody");
    }

    #[test]
    fn test_removes_every_exact_match() {
        let text = format!("Title\n\nBody\n\n{LINE}\nAcked-by: x\n{LINE}");
        assert_eq!(toggle(&text), "Title\n\nBody\n\nAcked-by: x");
    }

    #[test]
    fn test_removal_keeps_neighbouring_trailers_block() {
        let text = format!("Title\n\nBody\n\nAcked-by: x\n{LINE}");
        assert_eq!(toggle(&text), "Title\n\nBody\n\nAcked-by: x");
    }

    #[test]
    fn test_removal_before_comments() {
        let text = format!("Title\n\nBody\n\n{LINE}\n\n# comment");
        assert_eq!(toggle(&text), "Title\n\nBody\n\n# comment");
    }

    #[test]
    fn test_different_value_is_not_removed() {
        let other = "Signed-off-by: Someone Else <else@example.com>";
        let toggled = toggle(&format!("Title\n\nBody\n\n{other}"));
        assert_eq!(toggled, format!("Title\n\nBody\n\n{other}\n{LINE}"));
    }

    #[test]
    fn test_signoff_in_comment_block_is_ignored() {
        let text = format!("Title\n\n# {LINE}");
        assert_eq!(toggle(&text), format!("Title\n\n{LINE}\n\n# {LINE}"));
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        for text in [
            "",
            "Title",
            "Title\n",
            "Title\n\n",
            "Title\n\nBody text",
            "Title\n\nBody text\n",
            "Title\n\nBody\n\nAcked-by: x",
            "Title\nmalformed body",
            "Title\n\nBody\n\n# comment\n# more",
            "\n\n# Please enter the commit message",
            "Title\n\nFirst\n\nSecond\nparagraph\n\n",
        ] {
            let once = toggle(text);
            assert_ne!(once, text);
            assert_eq!(toggle(&once), text, "round trip of {text:?}");
        }
    }

    #[test]
    fn test_toggle_sign_off_uses_identity() {
        let provider = Fixed(Some(Identity {
            name: "Test User".into(),
            email: "test@example.com".into(),
        }));
        let msg = CommitMessage::from_text("Title\n\nBody");
        let toggled = toggle_sign_off(&msg, &provider).unwrap();
        assert_eq!(toggled.to_text(), format!("Title\n\nBody\n\n{LINE}"));
    }

    #[test]
    fn test_toggle_sign_off_missing_identity() {
        let msg = CommitMessage::from_text("Title\n\nBody");
        let result = toggle_sign_off(&msg, &Fixed(None));
        assert_eq!(result, Err(EditorError::MissingIdentity));
    }
}
