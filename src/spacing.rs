//! Space restoration for the glyph-level path.
//!
//! The glyph engine drops inter-word spacing, but its whole-page annotation
//! keeps it. [`transfer_spaces`] re-inserts that spacing into the assembled
//! space-less text by a greedy character walk against the spaced reference.
//!
//! The pipeline treats the aligner as an injected pure function
//! (`Fn(&str, &str) -> String`), so callers can substitute their own; this
//! module only provides the default.

/// How far ahead the walk looks for a matching reference character after an
/// OCR divergence before giving up on resynchronization.
const RESYNC_WINDOW: usize = 8;

/// Align a spaced reference string against a space-less candidate and
/// return the candidate's character sequence with the reference's spacing
/// re-inserted.
///
/// Newlines in the candidate come from line assembly and are kept verbatim;
/// reference line breaks count as spacing. When the two character streams
/// diverge (OCR errors), the walk resynchronizes on a nearby match and the
/// output is best-effort; alignment quality is not validated or retried.
///
/// ```
/// use unocr::spacing::transfer_spaces;
///
/// assert_eq!(transfer_spaces("a bc def", "abcdef"), "a bc def");
/// ```
pub fn transfer_spaces(spaced: &str, unspaced: &str) -> String {
    let reference: Vec<char> = spaced.chars().collect();
    let mut j = 0;
    let mut out = String::with_capacity(spaced.len());

    for c in unspaced.chars() {
        if c == '\n' {
            // Assembled line breaks win over reference spacing; swallow
            // whatever whitespace the reference carries here.
            out.push('\n');
            while j < reference.len() && reference[j].is_whitespace() {
                j += 1;
            }
            continue;
        }

        let mut saw_space = false;
        while j < reference.len() && (reference[j] == ' ' || reference[j] == '\n') {
            saw_space = true;
            j += 1;
        }
        if saw_space && !out.is_empty() && !out.ends_with([' ', '\n']) {
            out.push(' ');
        }

        out.push(c);

        if j < reference.len() {
            if reference[j] == c {
                j += 1;
            } else if let Some(k) = reference[j..]
                .iter()
                .take(RESYNC_WINDOW)
                .position(|&r| r == c)
            {
                j += k + 1;
            }
        }
    }

    out
}
