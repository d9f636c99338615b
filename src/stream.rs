//! Marker-aware processing of the assistant token stream.
//!
//! The model signals UI actions by embedding literal markers such as
//! `[SHOW_PROJECTS]` in its output. A marker can arrive split across several
//! tokens, so naive per-token forwarding would leak fragments like `[SHOW_P`
//! to the client. This processor accumulates the full response, withholds any
//! suffix that is a strict prefix of a known marker until the ambiguity
//! resolves, strips completed markers from the visible text, and at stream end
//! extracts the structured action plus any text still withheld.
//!
//! The processor is synchronous and transport-agnostic: the HTTP layer feeds
//! it tokens and adapts its output to server-sent events.

use crate::models::{ActionSignal, ProjectFilter, UiAction};

/// Known UI markers, most specific first. Detection priority follows this
/// order: a `[SHOW_PROJECTS:fullstack]` in the text wins over a later
/// `[SHOW_SKILLS]`.
pub const UI_MARKERS: [&str; 4] = [
    "[SHOW_PROJECTS:fullstack]",
    "[SHOW_PROJECTS:frontend]",
    "[SHOW_PROJECTS]",
    "[SHOW_SKILLS]",
];

/// What each marker maps to when it survives to stream end.
const MARKER_ACTIONS: [(&str, UiAction, ProjectFilter); 4] = [
    ("[SHOW_PROJECTS:fullstack]", UiAction::ShowProjects, ProjectFilter::Fullstack),
    ("[SHOW_PROJECTS:frontend]", UiAction::ShowProjects, ProjectFilter::Frontend),
    ("[SHOW_PROJECTS]", UiAction::ShowProjects, ProjectFilter::All),
    ("[SHOW_SKILLS]", UiAction::ShowSkills, ProjectFilter::All),
];

/// Per-request state for one token stream. Create at stream start, feed every
/// token through [`push`](Self::push) in arrival order, then call
/// [`finish`](Self::finish) exactly once when the upstream source completes.
#[derive(Debug, Default)]
pub struct MarkerStreamProcessor {
    /// Everything received from upstream, markers included.
    full_response: String,
    /// Everything already emitted downstream, markers stripped.
    streamed_response: String,
    /// Byte offset into `full_response` that has been handled (emitted or
    /// stripped). Text between this offset and the end is currently withheld.
    processed: usize,
    pending_marker_candidate: bool,
}

/// Result of draining the processor at stream end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamOutcome {
    /// Cleaned text that was never emitted during streaming, if any.
    pub remainder: Option<String>,
    /// The first marker found in priority order, if any.
    pub action: Option<ActionSignal>,
}

impl MarkerStreamProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the accumulated text currently ends in a suspected partial
    /// marker (text is being withheld).
    pub fn is_withholding(&self) -> bool {
        self.pending_marker_candidate
    }

    /// Feed one upstream token. Returns text that is safe to emit now, or
    /// `None` while the tail of the accumulated response might still grow
    /// into a marker.
    pub fn push(&mut self, token: &str) -> Option<String> {
        self.full_response.push_str(token);

        if ends_with_partial_marker(&self.full_response) {
            self.pending_marker_candidate = true;
            return None;
        }
        self.pending_marker_candidate = false;

        let mut content = self.full_response[self.processed..].to_string();
        for marker in UI_MARKERS {
            content = content.replacen(marker, "", 1);
        }
        self.processed = self.full_response.len();

        if content.is_empty() {
            None
        } else {
            self.streamed_response.push_str(&content);
            Some(content)
        }
    }

    /// Drain the processor once the upstream source has completed: scan the
    /// full response for markers in priority order, strip the winning one,
    /// and flush whatever cleaned text was never emitted (including any
    /// withheld suffix that turned out not to be a marker).
    pub fn finish(self) -> StreamOutcome {
        let mut action = None;
        let mut cleaned = self.full_response.clone();

        for (marker, ui_action, filter) in MARKER_ACTIONS {
            if self.full_response.contains(marker) {
                action = Some(ActionSignal {
                    action: ui_action,
                    filter,
                });
                cleaned = self
                    .full_response
                    .replacen(marker, "", 1)
                    .trim()
                    .to_string();
                break;
            }
        }

        // Trimming can make `cleaned` shorter than what already streamed; in
        // that case there is nothing left to flush.
        let remainder = cleaned
            .get(self.streamed_response.len()..)
            .filter(|tail| !tail.is_empty())
            .map(str::to_string);

        StreamOutcome { remainder, action }
    }
}

/// True when `text` ends with a strict, non-empty prefix of any known marker.
fn ends_with_partial_marker(text: &str) -> bool {
    UI_MARKERS
        .iter()
        .any(|marker| (1..marker.len()).any(|len| text.ends_with(&marker[..len])))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run a whole token sequence through a fresh processor.
    fn run(tokens: &[&str]) -> (Vec<String>, StreamOutcome) {
        let mut processor = MarkerStreamProcessor::new();
        let mut emitted = Vec::new();
        for token in tokens {
            if let Some(content) = processor.push(token) {
                emitted.push(content);
            }
        }
        (emitted, processor.finish())
    }

    fn no_marker_fragment(emitted: &[String]) {
        let joined = emitted.concat();
        for marker in UI_MARKERS {
            assert!(!joined.contains(marker), "leaked full marker in {joined:?}");
        }
        assert!(!joined.contains("[SHOW_"), "leaked marker fragment in {joined:?}");
    }

    #[test]
    fn plain_text_passes_through_unchanged() {
        let (emitted, outcome) = run(&["Hello ", "there, ", "visitor!"]);
        assert_eq!(emitted.concat(), "Hello there, visitor!");
        assert_eq!(outcome.remainder, None);
        assert_eq!(outcome.action, None);
    }

    #[test]
    fn marker_split_across_tokens_is_never_leaked() {
        let (emitted, outcome) = run(&["Sure! ", "[SHOW_P", "ROJECTS", "]"]);
        assert_eq!(emitted.concat(), "Sure! ");
        no_marker_fragment(&emitted);
        assert_eq!(
            outcome.action,
            Some(ActionSignal {
                action: UiAction::ShowProjects,
                filter: ProjectFilter::All,
            })
        );
        assert_eq!(outcome.remainder, None);
    }

    #[test]
    fn marker_in_single_token_is_stripped() {
        let (emitted, outcome) = run(&["Here you go [SHOW_SKILLS]"]);
        assert_eq!(emitted.concat(), "Here you go ");
        assert_eq!(
            outcome.action,
            Some(ActionSignal {
                action: UiAction::ShowSkills,
                filter: ProjectFilter::All,
            })
        );
    }

    #[test]
    fn fullstack_filter_is_detected() {
        let (emitted, outcome) = run(&["[SHOW_PROJECTS:f", "ullstack]"]);
        no_marker_fragment(&emitted);
        assert_eq!(
            outcome.action,
            Some(ActionSignal {
                action: UiAction::ShowProjects,
                filter: ProjectFilter::Fullstack,
            })
        );
    }

    #[test]
    fn frontend_filter_is_detected() {
        let (_, outcome) = run(&["Take a look. [SHOW_PROJECTS:frontend]"]);
        assert_eq!(
            outcome.action,
            Some(ActionSignal {
                action: UiAction::ShowProjects,
                filter: ProjectFilter::Frontend,
            })
        );
    }

    #[test]
    fn fullstack_marker_outranks_skills_marker() {
        let (_, outcome) = run(&["a [SHOW_SKILLS] b [SHOW_PROJECTS:fullstack] c"]);
        assert_eq!(
            outcome.action,
            Some(ActionSignal {
                action: UiAction::ShowProjects,
                filter: ProjectFilter::Fullstack,
            })
        );
    }

    #[test]
    fn text_after_marker_does_not_leak_fragments() {
        // Prose continuing for several tokens after a stripped marker must
        // stay aligned with the emitted offset.
        let (emitted, outcome) = run(&["abc", "[SHOW_SKILLS]", "xyz", "pq"]);
        assert_eq!(emitted.concat(), "abcxyzpq");
        no_marker_fragment(&emitted);
        assert_eq!(
            outcome.action,
            Some(ActionSignal {
                action: UiAction::ShowSkills,
                filter: ProjectFilter::All,
            })
        );
        assert_eq!(outcome.remainder, None);
    }

    #[test]
    fn false_prefix_resolves_and_streams() {
        // "[SHOWING]" shares a prefix with the markers but is ordinary text;
        // once the ambiguity resolves it streams through intact.
        let (emitted, outcome) = run(&["see ", "[SHOW", "ING] the demo"]);
        assert_eq!(emitted.concat(), "see [SHOWING] the demo");
        assert_eq!(outcome.action, None);
        assert_eq!(outcome.remainder, None);
    }

    #[test]
    fn unresolved_prefix_is_flushed_at_stream_end() {
        let (emitted, outcome) = run(&["see ", "[SHOW"]);
        assert_eq!(emitted.concat(), "see ");
        assert_eq!(outcome.remainder.as_deref(), Some("[SHOW"));
        assert_eq!(outcome.action, None);
    }

    #[test]
    fn withholding_flag_tracks_partial_state() {
        let mut processor = MarkerStreamProcessor::new();
        processor.push("text [SHOW_PRO");
        assert!(processor.is_withholding());
        processor.push("JECTS] done");
        assert!(!processor.is_withholding());
    }

    #[test]
    fn whole_response_withheld_until_marker_resolves() {
        // A message that is nothing but a split marker emits no content at
        // all, only the action.
        let (emitted, outcome) = run(&["[", "SHOW_PROJECTS", "]"]);
        assert!(emitted.is_empty());
        assert_eq!(
            outcome.action,
            Some(ActionSignal {
                action: UiAction::ShowProjects,
                filter: ProjectFilter::All,
            })
        );
        assert_eq!(outcome.remainder, None);
    }

    #[test]
    fn empty_stream_yields_nothing() {
        let (emitted, outcome) = run(&[]);
        assert!(emitted.is_empty());
        assert_eq!(outcome.remainder, None);
        assert_eq!(outcome.action, None);
    }

    #[test]
    fn only_first_marker_type_is_honored() {
        let (_, outcome) = run(&["x [SHOW_PROJECTS] y [SHOW_SKILLS] z"]);
        assert_eq!(
            outcome.action,
            Some(ActionSignal {
                action: UiAction::ShowProjects,
                filter: ProjectFilter::All,
            })
        );
    }
}
