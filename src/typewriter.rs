//! Character-by-character reveal schedule.
//!
//! The schedule is computed up front from the original text of every target
//! node. Each step carries the prefix to show instead of the character to
//! append, so a step never depends on an earlier one having fired.

/// One timer callback of the typing effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    /// Delay from the start of the effect.
    pub at_ms: u32,
    /// Index of the text node this step updates.
    pub node: usize,
    /// Byte length of the prefix to show; always on a char boundary.
    pub end: usize,
}

/// Elements whose text is not rendered as prose and is never typed.
pub const SKIPPED_TAGS: [&str; 4] = ["script", "style", "template", "noscript"];

/// Whether a descendant element named `tag` is left out of a tree reveal.
pub fn skips_element(tag: &str) -> bool {
    SKIPPED_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Whether a text node takes part in a tree reveal.
///
/// Whitespace-only nodes (markup indentation) are left alone so they add no
/// delay.
pub fn is_typed_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Schedules one step per character of `texts`, in order.
///
/// The clock keeps running across nodes, so a subtree types as a single
/// stream. Empty nodes get no steps.
pub fn reveal_schedule<S: AsRef<str>>(texts: &[S], delay_ms: u32) -> Vec<RevealStep> {
    let total: usize = texts.iter().map(|t| t.as_ref().chars().count()).sum();
    let mut steps = Vec::with_capacity(total);
    let mut tick: u32 = 0;
    for (node, text) in texts.iter().enumerate() {
        for (idx, ch) in text.as_ref().char_indices() {
            steps.push(RevealStep {
                at_ms: tick.saturating_mul(delay_ms),
                node,
                end: idx + ch.len_utf8(),
            });
            tick = tick.saturating_add(1);
        }
    }
    steps
}

/// Visible state of a set of nodes while a schedule is replayed.
#[derive(Debug, Clone)]
pub struct Reveal<'a, S: AsRef<str>> {
    texts: &'a [S],
    shown: Vec<usize>,
}

impl<'a, S: AsRef<str>> Reveal<'a, S> {
    /// Starts with every node cleared.
    pub fn new(texts: &'a [S]) -> Self {
        Self {
            texts,
            shown: vec![0; texts.len()],
        }
    }

    /// Steps for unknown nodes are ignored; `end` is clamped to the text and
    /// rounded down to a char boundary.
    pub fn apply(&mut self, step: RevealStep) {
        let (Some(text), Some(shown)) = (self.texts.get(step.node), self.shown.get_mut(step.node))
        else {
            return;
        };
        let text = text.as_ref();
        let mut end = step.end.min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        *shown = end;
    }

    /// Visible prefix of `node`, empty for an unknown node.
    pub fn visible(&self, node: usize) -> &str {
        match (self.texts.get(node), self.shown.get(node)) {
            (Some(text), Some(&end)) => text.as_ref().get(..end).unwrap_or_default(),
            _ => "",
        }
    }

    /// Concatenated visible text of all nodes.
    pub fn text(&self) -> String {
        (0..self.texts.len()).map(|n| self.visible(n)).collect()
    }
}
