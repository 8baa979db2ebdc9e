use std::collections::BTreeSet;

use crate::transcripts::TranscriptDescriptor;

/// Language offered when a video declares no transcripts at all
pub const FALLBACK_LANGUAGE: &str = "en";

/// Resolve the translation languages available for a transcript descriptor.
///
/// A non-empty descriptor yields exactly its keys and the fallback flag is
/// ignored. An empty descriptor yields `{"en"}` when `fallback_enabled` is
/// set, and nothing otherwise.
pub fn available_translations(
    descriptor: &TranscriptDescriptor,
    fallback_enabled: bool,
) -> BTreeSet<String> {
    if descriptor.is_empty() {
        if fallback_enabled {
            return BTreeSet::from([FALLBACK_LANGUAGE.to_string()]);
        }
        return BTreeSet::new();
    }

    descriptor.languages().map(str::to_string).collect()
}
