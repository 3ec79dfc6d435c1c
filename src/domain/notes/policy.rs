//! Generation policy - fixed constants that shape the outbound call.

use super::{DetailLevel, GenerationRequest, NoteType};

/// Token budget for concise notes.
pub const CONCISE_MAX_TOKENS: u32 = 1024;

/// Token budget for detailed notes.
pub const DETAILED_MAX_TOKENS: u32 = 2048;

/// Sampling temperature used for every request.
pub const NOTES_TEMPERATURE: f32 = 0.7;

/// Derives the system instruction, token budget and temperature from a
/// request's selectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationPolicy;

impl GenerationPolicy {
    /// System instruction for the given selectors.
    pub fn system_instruction(note_type: NoteType, detail: DetailLevel) -> String {
        format!(
            "You are a helpful assistant that generates {} {} notes.",
            detail.as_str(),
            note_type.as_str()
        )
    }

    /// Maximum completion tokens for the detail level.
    pub fn max_tokens(detail: DetailLevel) -> u32 {
        match detail {
            DetailLevel::Concise => CONCISE_MAX_TOKENS,
            DetailLevel::Detailed => DETAILED_MAX_TOKENS,
        }
    }

    /// Sampling temperature for the detail level.
    pub fn temperature(_detail: DetailLevel) -> f32 {
        NOTES_TEMPERATURE
    }

    /// Convenience accessor for a full request.
    pub fn instruction_for(request: &GenerationRequest) -> String {
        Self::system_instruction(request.note_type(), request.detail())
    }
}
