//! Applies mapped matches to a page's containers, and resets them.

use textlayer_common::{char_slice, Fragment, MappedMatch};
use tracing::{debug, trace, warn};

use crate::container::Container;

/// Mark every match inside `containers`.
///
/// Matches are processed in ascending `original_offset` order, shorter
/// first on ties. Each later match sees the state left by earlier ones.
/// Containers that are `None` are skipped.
pub fn highlight_matches(
    matches: &[MappedMatch],
    fragments: &[Fragment],
    containers: &mut [Option<Container>],
) {
    let mut ordered: Vec<&MappedMatch> = matches.iter().collect();
    ordered.sort_by_key(|m| m.render_key());

    for m in ordered {
        let (first, last) = (m.start.fragment_index, m.end.fragment_index);
        if first == last {
            mark_fragment(fragments, containers, first, m.start.offset, Some(m.end.offset));
            continue;
        }
        for index in m.fragment_indices() {
            if index == first {
                mark_fragment(fragments, containers, index, m.start.offset, None);
            } else if index == last {
                mark_fragment(fragments, containers, index, 0, Some(m.end.offset));
            } else {
                mark_fragment(fragments, containers, index, 0, None);
            }
        }
    }

    debug!(
        matches = matches.len(),
        containers = containers.len(),
        "applied highlights"
    );
}

/// Restore every promoted container to its fragment's original text.
pub fn reset_containers(fragments: &[Fragment], containers: &mut [Option<Container>]) {
    let mut restored = 0;
    for (slot, fragment) in containers.iter_mut().zip(fragments) {
        if let Some(container) = slot {
            if container.is_promoted() {
                container.reset(&fragment.text);
                restored += 1;
            }
        }
    }
    debug!(restored, "reset containers");
}

/// Highlight `[start, end)` of one fragment's container; `end = None` means
/// to the end of the fragment. Offsets past the fragment are clamped.
fn mark_fragment(
    fragments: &[Fragment],
    containers: &mut [Option<Container>],
    index: usize,
    start: usize,
    end: Option<usize>,
) {
    let Some(container) = containers.get_mut(index).and_then(Option::as_mut) else {
        trace!(index, "no container, skipping");
        return;
    };
    let Some(fragment) = fragments.get(index) else {
        warn!(index, fragments = fragments.len(), "match refers to a missing fragment");
        return;
    };

    let len = fragment.char_len();
    let end = end.unwrap_or(len);
    if start > len || end > len {
        warn!(index, start, end, len, "highlight offsets clamped to fragment");
    }
    let start = start.min(len);
    let end = end.min(len);

    container.mark(start, end, char_slice(&fragment.text, start, end));
}
