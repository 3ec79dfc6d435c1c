//! The workspace reducer.
//!
//! `reduce` is pure: it never performs I/O. When an event needs the outside
//! world (generation, export) the transition carries an [`Effect`] and the
//! caller feeds the result back as another event.

use super::{
    Effect, ExportStatus, GenerationStatus, Notification, RequestToken, Transition,
    WorkspaceEvent, WorkspaceState,
};
use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::notes::{ExportOptions, GenerationRequest};

/// Produces the next snapshot for `event`.
pub fn reduce(state: &WorkspaceState, event: WorkspaceEvent) -> Transition {
    let mut next = state.clone();

    match event {
        WorkspaceEvent::PromptChanged(prompt) => {
            next.prompt = prompt;
            Transition::applied(next)
        }
        WorkspaceEvent::NoteTypeSelected(note_type) => {
            next.note_type = note_type;
            Transition::applied(next)
        }
        WorkspaceEvent::DetailSelected(detail) => {
            next.detail = detail;
            Transition::applied(next)
        }
        WorkspaceEvent::GenerateRequested {
            prompt,
            note_type,
            detail,
        } => {
            if let Some(prompt) = prompt {
                next.prompt = prompt;
            }
            if let Some(note_type) = note_type {
                next.note_type = note_type;
            }
            if let Some(detail) = detail {
                next.detail = detail;
            }
            request_generation(next)
        }
        WorkspaceEvent::GenerationSucceeded { token, notes } => {
            if !is_current(state, token) {
                return Transition::stale(next);
            }
            if let Err(err) = advance_generation(&mut next, GenerationStatus::Rendered) {
                return Transition::rejected(next, err);
            }
            next.in_flight = None;
            next.notes = Some(notes);
            if next.export != ExportStatus::Exporting {
                next.export = ExportStatus::Ready;
            }
            Transition::applied(next)
        }
        WorkspaceEvent::GenerationFailed { token, .. } => {
            if !is_current(state, token) {
                return Transition::stale(next);
            }
            let fallback = if next.notes.is_some() {
                GenerationStatus::Rendered
            } else {
                GenerationStatus::Idle
            };
            if let Err(err) = advance_generation(&mut next, fallback) {
                return Transition::rejected(next, err);
            }
            next.in_flight = None;
            next.notification = Some(Notification::generation_failed());
            Transition::applied(next)
        }
        WorkspaceEvent::ExportRequested { title } => request_export(next, title),
        WorkspaceEvent::ExportSucceeded { .. } => {
            match next.export.transition_to(ExportStatus::Done) {
                Ok(status) => {
                    next.export = status;
                    next.notification = Some(Notification::export_succeeded());
                    Transition::applied(next)
                }
                Err(_) => Transition::stale(next),
            }
        }
        WorkspaceEvent::ExportFailed { .. } => {
            match next.export.transition_to(ExportStatus::Failed) {
                Ok(status) => {
                    next.export = status;
                    next.notification = Some(Notification::export_failed());
                    Transition::applied(next)
                }
                Err(_) => Transition::stale(next),
            }
        }
        WorkspaceEvent::NotificationDismissed => {
            next.notification = None;
            Transition::applied(next)
        }
        WorkspaceEvent::NotesCleared => {
            next.notes = None;
            // A running request keeps the generating phase.
            if next.generation == GenerationStatus::Rendered {
                if let Err(err) = advance_generation(&mut next, GenerationStatus::Idle) {
                    return Transition::rejected(next, err);
                }
            }
            if next.export != ExportStatus::Exporting {
                next.export = ExportStatus::Ready;
            }
            Transition::applied(next)
        }
    }
}

fn is_current(state: &WorkspaceState, token: RequestToken) -> bool {
    state.in_flight == Some(token)
}

fn advance_generation(
    next: &mut WorkspaceState,
    target: GenerationStatus,
) -> Result<(), ValidationError> {
    next.generation = next.generation.transition_to(target)?;
    Ok(())
}

fn request_generation(mut next: WorkspaceState) -> Transition {
    let request = match GenerationRequest::compose(&next.prompt, next.note_type, next.detail) {
        Ok(request) => request,
        Err(err) => {
            next.notification = Some(Notification::prompt_required());
            return Transition::rejected(next, err);
        }
    };

    if let Err(err) = advance_generation(&mut next, GenerationStatus::Generating) {
        return Transition::rejected(next, err);
    }
    // Any earlier in-flight token is superseded here.
    let token = RequestToken::after(next.last_token);
    next.last_token = token.value();
    next.in_flight = Some(token);

    Transition::with_effect(next, Effect::Generate { token, request })
}

fn request_export(mut next: WorkspaceState, title: Option<String>) -> Transition {
    let notes = match next.notes.as_ref() {
        Some(notes) if !notes.is_empty() => notes.clone(),
        _ => {
            next.notification = Some(Notification::nothing_to_export());
            return Transition::rejected(
                next,
                ValidationError::empty_export_target("no generated notes"),
            );
        }
    };

    let status = match next.export.transition_to(ExportStatus::Exporting) {
        Ok(status) => status,
        Err(err) => {
            next.notification = Some(Notification::export_in_progress());
            return Transition::rejected(next, err);
        }
    };
    next.export = status;

    let options = ExportOptions::for_prompt(notes.request().prompt());
    // A blank override keeps the prompt as heading.
    let options = match title.filter(|t| !t.trim().is_empty()) {
        Some(title) => options.with_title(title),
        None => options,
    };

    Transition::with_effect(next, Effect::Export { notes, options })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notes::{DetailLevel, GeneratedNotes, NoteType};
    use crate::domain::workspace::{ErrorKind, Outcome};

    fn apply(state: &WorkspaceState, events: Vec<WorkspaceEvent>) -> WorkspaceState {
        events
            .into_iter()
            .fold(state.clone(), |s, e| reduce(&s, e).state)
    }

    fn with_prompt(prompt: &str) -> WorkspaceState {
        apply(
            &WorkspaceState::new(),
            vec![WorkspaceEvent::PromptChanged(prompt.to_string())],
        )
    }

    fn generate(state: &WorkspaceState) -> (WorkspaceState, RequestToken, GenerationRequest) {
        let t = reduce(state, WorkspaceEvent::generate());
        match t.effect {
            Some(Effect::Generate { token, request }) => (t.state, token, request),
            other => panic!("expected generate effect, got {:?}", other),
        }
    }

    fn notes_for(request: &GenerationRequest, markdown: &str) -> GeneratedNotes {
        GeneratedNotes::new(request.clone(), markdown, "test-model")
    }

    fn rendered(prompt: &str, markdown: &str) -> WorkspaceState {
        let (state, token, request) = generate(&with_prompt(prompt));
        reduce(
            &state,
            WorkspaceEvent::GenerationSucceeded {
                token,
                notes: notes_for(&request, markdown),
            },
        )
        .state
    }

    // ───────────────────────────────────────────────────────────────
    // Composer
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn selectors_update_state() {
        let state = apply(
            &WorkspaceState::new(),
            vec![
                WorkspaceEvent::NoteTypeSelected(NoteType::Code),
                WorkspaceEvent::DetailSelected(DetailLevel::Detailed),
            ],
        );
        assert_eq!(state.note_type(), NoteType::Code);
        assert_eq!(state.detail(), DetailLevel::Detailed);
    }

    #[test]
    fn submission_applies_selections_in_one_step() {
        let t = reduce(
            &with_prompt("Graph theory"),
            WorkspaceEvent::GenerateRequested {
                prompt: Some("SQL joins".to_string()),
                note_type: Some(NoteType::Logic),
                detail: Some(DetailLevel::Detailed),
            },
        );
        let request = match t.effect {
            Some(Effect::Generate { request, .. }) => request,
            other => panic!("expected generate effect, got {:?}", other),
        };
        assert_eq!(request.prompt(), "SQL joins");
        assert_eq!(request.note_type(), NoteType::Logic);
        assert_eq!(request.detail(), DetailLevel::Detailed);
        assert_eq!(t.state.prompt(), "SQL joins");
        assert_eq!(t.state.note_type(), NoteType::Logic);
    }

    #[test]
    fn submission_without_selections_keeps_current_ones() {
        let state = apply(
            &with_prompt("Graph theory"),
            vec![WorkspaceEvent::NoteTypeSelected(NoteType::Code)],
        );
        let (_, _, request) = generate(&state);
        assert_eq!(request.prompt(), "Graph theory");
        assert_eq!(request.note_type(), NoteType::Code);
        assert_eq!(request.detail(), DetailLevel::Concise);
    }

    #[test]
    fn blank_prompt_is_rejected_without_effect() {
        for prompt in ["", "   ", "\n\t"] {
            let t = reduce(&with_prompt(prompt), WorkspaceEvent::generate());
            assert!(t.effect.is_none());
            assert!(matches!(
                t.outcome,
                Outcome::Rejected(ValidationError::EmptyField { .. })
            ));
            let notification = t.state.notification().unwrap();
            assert_eq!(notification.title, "Prompt required");
            assert_eq!(notification.error_kind, Some(ErrorKind::Validation));
            assert_eq!(t.state.generation(), GenerationStatus::Idle);
        }
    }

    #[test]
    fn generate_request_carries_selectors_and_trimmed_prompt() {
        let state = apply(
            &with_prompt("  SQL joins  "),
            vec![
                WorkspaceEvent::NoteTypeSelected(NoteType::Logic),
                WorkspaceEvent::DetailSelected(DetailLevel::Detailed),
            ],
        );
        let (state, token, request) = generate(&state);
        assert_eq!(request.prompt(), "SQL joins");
        assert_eq!(request.note_type(), NoteType::Logic);
        assert_eq!(request.detail(), DetailLevel::Detailed);
        assert_eq!(state.in_flight(), Some(token));
        assert_eq!(state.generation(), GenerationStatus::Generating);
        assert!(!state.can_submit());
    }

    // ───────────────────────────────────────────────────────────────
    // Generation results
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn success_stores_markdown_verbatim() {
        let markdown = "# Title\n\n```rust\nfn main() {}\n```\n\n  trailing  \n";
        let state = rendered("Rust basics", markdown);
        assert_eq!(state.content(), markdown);
        assert_eq!(state.generation(), GenerationStatus::Rendered);
        assert!(state.in_flight().is_none());
        assert!(state.shows_export_control());
    }

    #[test]
    fn failure_keeps_previous_content_and_notifies_once() {
        let state = rendered("Graph theory", "# Old notes");
        let (state, token, _) = generate(&state);

        let t = reduce(
            &state,
            WorkspaceEvent::GenerationFailed {
                token,
                reason: "502".to_string(),
            },
        );
        assert_eq!(t.outcome, Outcome::Applied);
        assert_eq!(t.state.content(), "# Old notes");
        assert_eq!(t.state.generation(), GenerationStatus::Rendered);
        let notification = t.state.notification().unwrap();
        assert_eq!(notification.title, "Generation failed");
        assert_eq!(notification.error_kind, Some(ErrorKind::ExternalCall));

        // A repeated failure for the same token is stale and changes nothing.
        let dismissed = reduce(&t.state, WorkspaceEvent::NotificationDismissed).state;
        let again = reduce(
            &dismissed,
            WorkspaceEvent::GenerationFailed {
                token,
                reason: "502".to_string(),
            },
        );
        assert!(again.is_stale());
        assert!(again.state.notification().is_none());
    }

    #[test]
    fn failure_without_content_returns_to_idle() {
        let (state, token, _) = generate(&with_prompt("CNN"));
        let state = reduce(
            &state,
            WorkspaceEvent::GenerationFailed {
                token,
                reason: "timeout".to_string(),
            },
        )
        .state;
        assert_eq!(state.generation(), GenerationStatus::Idle);
        assert!(!state.shows_export_control());
    }

    #[test]
    fn superseded_response_is_discarded() {
        let (state, first, first_request) = generate(&with_prompt("Python basics"));
        let state = reduce(&state, WorkspaceEvent::PromptChanged("SQL joins".to_string())).state;
        let (state, second, second_request) = generate(&state);
        assert!(second > first);

        let state = reduce(
            &state,
            WorkspaceEvent::GenerationSucceeded {
                token: second,
                notes: notes_for(&second_request, "# SQL"),
            },
        )
        .state;

        let late = reduce(
            &state,
            WorkspaceEvent::GenerationSucceeded {
                token: first,
                notes: notes_for(&first_request, "# Python"),
            },
        );
        assert!(late.is_stale());
        assert_eq!(late.state.content(), "# SQL");
    }

    #[test]
    fn late_failure_of_superseded_request_is_ignored() {
        let (state, first, _) = generate(&with_prompt("Python basics"));
        let (state, _second, _) = generate(&state);
        let t = reduce(
            &state,
            WorkspaceEvent::GenerationFailed {
                token: first,
                reason: "boom".to_string(),
            },
        );
        assert!(t.is_stale());
        assert!(t.state.notification().is_none());
        assert_eq!(t.state.generation(), GenerationStatus::Generating);
    }

    // ───────────────────────────────────────────────────────────────
    // Export
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn export_without_content_is_rejected() {
        let t = reduce(&WorkspaceState::new(), WorkspaceEvent::ExportRequested { title: None });
        assert!(t.effect.is_none());
        assert!(matches!(
            t.outcome,
            Outcome::Rejected(ValidationError::EmptyExportTarget { .. })
        ));
        assert_eq!(t.state.notification().unwrap().title, "Nothing to export");
    }

    #[test]
    fn export_of_empty_markdown_is_rejected() {
        let state = rendered("Python basics", "");
        assert!(!state.shows_export_control());
        let t = reduce(&state, WorkspaceEvent::ExportRequested { title: None });
        assert!(t.effect.is_none());
    }

    #[test]
    fn export_effect_uses_prompt_for_title_and_filename() {
        let state = rendered("Explain Binary Search with code", "# Binary Search");
        let t = reduce(&state, WorkspaceEvent::ExportRequested { title: None });
        match t.effect {
            Some(Effect::Export { notes, options }) => {
                assert_eq!(notes.markdown(), "# Binary Search");
                assert_eq!(options.title.as_deref(), Some("Explain Binary Search with code"));
                assert_eq!(options.filename, "Explain-Binary-Search-with-cod-notes.pdf");
            }
            other => panic!("expected export effect, got {:?}", other),
        }
        assert_eq!(t.state.export(), ExportStatus::Exporting);
    }

    #[test]
    fn export_title_can_be_overridden() {
        let state = rendered("SQL joins", "# Joins");
        let t = reduce(
            &state,
            WorkspaceEvent::ExportRequested {
                title: Some("Join cheat sheet".to_string()),
            },
        );
        match t.effect {
            Some(Effect::Export { options, .. }) => {
                assert_eq!(options.title.as_deref(), Some("Join cheat sheet"));
                assert_eq!(options.filename, "SQL-joins-notes.pdf");
            }
            other => panic!("expected export effect, got {:?}", other),
        }
    }

    #[test]
    fn blank_export_title_keeps_prompt_heading() {
        let state = rendered("SQL joins", "# Joins");
        let t = reduce(
            &state,
            WorkspaceEvent::ExportRequested {
                title: Some("   ".to_string()),
            },
        );
        match t.effect {
            Some(Effect::Export { options, .. }) => {
                assert_eq!(options.title.as_deref(), Some("SQL joins"));
            }
            other => panic!("expected export effect, got {:?}", other),
        }
    }

    #[test]
    fn second_export_while_running_is_rejected() {
        let state = rendered("SQL joins", "# Joins");
        let state = reduce(&state, WorkspaceEvent::ExportRequested { title: None }).state;
        let t = reduce(&state, WorkspaceEvent::ExportRequested { title: None });
        assert!(t.effect.is_none());
        assert!(matches!(t.outcome, Outcome::Rejected(_)));
        assert_eq!(t.state.export(), ExportStatus::Exporting);
    }

    #[test]
    fn export_results_update_status_and_notify() {
        let state = rendered("SQL joins", "# Joins");
        let exporting = reduce(&state, WorkspaceEvent::ExportRequested { title: None }).state;

        let done = reduce(
            &exporting,
            WorkspaceEvent::ExportSucceeded {
                filename: "SQL-joins-notes.pdf".to_string(),
            },
        )
        .state;
        assert_eq!(done.export(), ExportStatus::Done);
        assert_eq!(done.notification().unwrap().title, "Export successful");

        let failed = reduce(
            &exporting,
            WorkspaceEvent::ExportFailed {
                reason: "wkhtmltopdf missing".to_string(),
            },
        )
        .state;
        assert_eq!(failed.export(), ExportStatus::Failed);
        assert_eq!(failed.notification().unwrap().title, "Export failed");
        assert_eq!(failed.content(), "# Joins");
    }

    #[test]
    fn export_result_without_running_export_is_stale() {
        let state = rendered("SQL joins", "# Joins");
        let t = reduce(
            &state,
            WorkspaceEvent::ExportSucceeded {
                filename: "x.pdf".to_string(),
            },
        );
        assert!(t.is_stale());
    }

    // ───────────────────────────────────────────────────────────────
    // Housekeeping
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn clearing_while_generating_keeps_generating_phase() {
        let (state, token, request) = generate(&with_prompt("SQL joins"));
        let state = reduce(&state, WorkspaceEvent::NotesCleared).state;
        assert_eq!(state.generation(), GenerationStatus::Generating);

        let state = reduce(
            &state,
            WorkspaceEvent::GenerationSucceeded {
                token,
                notes: notes_for(&request, "# Joins"),
            },
        )
        .state;
        assert_eq!(state.generation(), GenerationStatus::Rendered);
    }

    #[test]
    fn clearing_an_empty_workspace_stays_idle() {
        let t = reduce(&WorkspaceState::new(), WorkspaceEvent::NotesCleared);
        assert_eq!(t.outcome, Outcome::Applied);
        assert_eq!(t.state.generation(), GenerationStatus::Idle);
    }

    #[test]
    fn clearing_notes_hides_export_control() {
        let state = rendered("SQL joins", "# Joins");
        let state = reduce(&state, WorkspaceEvent::NotesCleared).state;
        assert_eq!(state.content(), "");
        assert_eq!(state.generation(), GenerationStatus::Idle);
        assert!(!state.shows_export_control());
    }

    #[test]
    fn dismissing_clears_notification() {
        let t = reduce(&WorkspaceState::new(), WorkspaceEvent::generate());
        assert!(t.state.notification().is_some());
        let state = reduce(&t.state, WorkspaceEvent::NotificationDismissed).state;
        assert!(state.notification().is_none());
    }

    #[test]
    fn reduce_leaves_input_snapshot_untouched() {
        let state = with_prompt("Graph theory");
        let before = state.clone();
        let _ = reduce(&state, WorkspaceEvent::generate());
        assert_eq!(state, before);
    }
}
