//! Server-rendered workspace page.

use crate::adapters::document::html_escape;
use crate::domain::notes::{DetailLevel, NoteType, RenderedRegion, PROMPT_SUGGESTIONS};
use crate::domain::workspace::{Notification, NotificationVariant, WorkspaceState};
use crate::ports::ProviderInfo;

const PAGE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #fffdf5; color: #1f2937; }
main { max-width: 960px; margin: 0 auto; padding: 24px; }
header h1 { margin: 0 0 4px; color: #ca8a04; }
header p { margin: 0 0 24px; color: #6b7280; }
textarea { width: 100%; min-height: 96px; font: inherit; padding: 8px; box-sizing: border-box; }
.selectors { display: flex; gap: 16px; align-items: center; margin: 12px 0; flex-wrap: wrap; }
.suggestions { display: flex; gap: 8px; flex-wrap: wrap; margin: 12px 0; }
.suggestions button { border-radius: 999px; border: 1px solid #fde68a; background: #fef9c3; padding: 4px 12px; cursor: pointer; }
.notification { border-radius: 8px; padding: 12px 16px; margin-bottom: 16px; display: flex; justify-content: space-between; gap: 16px; }
.notification.default { background: #ecfdf5; border: 1px solid #a7f3d0; }
.notification.destructive { background: #fef2f2; border: 1px solid #fecaca; }
.notes { border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px 24px; background: #fff; margin-top: 24px; }
.placeholder { color: #9ca3af; text-align: center; padding: 48px 0; }
.actions { display: flex; gap: 8px; margin-top: 12px; }
pre { background: #f6f8fa; padding: 12px; overflow-x: auto; }
"#;

/// Renders the whole page for a snapshot.
///
/// `region` is the rendered form of the current notes, if any.
pub fn render_page(
    state: &WorkspaceState,
    region: Option<&RenderedRegion>,
    provider: &ProviderInfo,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Yellow Notes</title>
<style>{css}</style>
</head>
<body>
<main>
<header>
<h1>Yellow Notes</h1>
<p>Generate study notes on any topic. Powered by {provider} ({model}).</p>
</header>
{notification}
{composer}
{suggestions}
{notes}
</main>
</body>
</html>
"#,
        css = PAGE_CSS,
        provider = html_escape(&provider.name),
        model = html_escape(&provider.model),
        notification = state
            .notification()
            .map(render_notification)
            .unwrap_or_default(),
        composer = render_composer(state),
        suggestions = render_suggestions(),
        notes = render_notes(state, region),
    )
}

fn render_notification(notification: &Notification) -> String {
    let class = match notification.variant {
        NotificationVariant::Default => "default",
        NotificationVariant::Destructive => "destructive",
    };
    format!(
        r#"<div class="notification {class}" role="alert">
<div><strong>{title}</strong><p>{description}</p></div>
<form method="post" action="/notifications/dismiss"><button type="submit" aria-label="Dismiss">×</button></form>
</div>"#,
        class = class,
        title = html_escape(&notification.title),
        description = html_escape(&notification.description),
    )
}

fn render_composer(state: &WorkspaceState) -> String {
    let note_types: String = NoteType::ALL
        .iter()
        .map(|note_type| {
            format!(
                r#"<label><input type="radio" name="note_type" value="{value}"{checked}> {label}</label>"#,
                value = note_type.as_str(),
                checked = checked(state.note_type() == *note_type),
                label = note_type.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let detail = state.detail();
    let (button_label, disabled) = if state.is_generating() {
        ("Generating...", " disabled")
    } else {
        ("Generate Notes", "")
    };

    format!(
        r#"<form method="post" action="/generate" class="composer">
<textarea name="prompt" placeholder="Enter a topic or question..." required>{prompt}</textarea>
<div class="selectors">
{note_types}
<label><input type="checkbox" name="detailed" value="on"{detailed}> {detail_label}</label>
<small>{detail_hint}</small>
</div>
<button type="submit"{disabled}>{button_label}</button>
</form>"#,
        prompt = html_escape(state.prompt()),
        note_types = note_types,
        detailed = checked(detail == DetailLevel::Detailed),
        detail_label = DetailLevel::Detailed.label(),
        detail_hint = detail.hint(),
        disabled = disabled,
        button_label = button_label,
    )
}

fn render_suggestions() -> String {
    let buttons: String = PROMPT_SUGGESTIONS
        .iter()
        .map(|suggestion| {
            format!(
                r#"<form method="post" action="/suggestion"><button type="submit" name="prompt" value="{value}">{value}</button></form>"#,
                value = html_escape(suggestion),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(r#"<div class="suggestions">{}</div>"#, buttons)
}

fn render_notes(state: &WorkspaceState, region: Option<&RenderedRegion>) -> String {
    let region = match region {
        Some(region) if state.shows_export_control() => region,
        _ => {
            return r#"<section class="notes"><p class="placeholder">Your generated notes will appear here</p></section>"#
                .to_string()
        }
    };

    format!(
        r#"<section class="notes">
<div class="actions">
<form method="post" action="/export">
<input type="text" name="title" placeholder="PDF title (optional)">
<button type="submit">Export PDF</button>
</form>
<form method="post" action="/clear"><button type="submit">Clear</button></form>
</div>
<article id="notes-region" class="markdown-body">
{html}
</article>
</section>"#,
        html = region.html(),
    )
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notes::{GeneratedNotes, GenerationRequest};
    use crate::domain::workspace::{reduce, Effect, WorkspaceEvent};

    fn provider() -> ProviderInfo {
        ProviderInfo::new("groq", "compound-beta")
    }

    fn rendered_state(markdown: &str) -> WorkspaceState {
        let state = reduce(
            &WorkspaceState::new(),
            WorkspaceEvent::PromptChanged("Graph theory fundamentals".to_string()),
        )
        .state;
        let t = reduce(&state, WorkspaceEvent::generate());
        let token = match t.effect {
            Some(Effect::Generate { token, .. }) => token,
            other => panic!("expected generate effect, got {:?}", other),
        };
        let request = GenerationRequest::compose(
            "Graph theory fundamentals",
            NoteType::Theory,
            DetailLevel::Concise,
        )
        .unwrap();
        reduce(
            &t.state,
            WorkspaceEvent::GenerationSucceeded {
                token,
                notes: GeneratedNotes::new(request, markdown, "compound-beta"),
            },
        )
        .state
    }

    #[test]
    fn empty_workspace_has_no_export_control() {
        let html = render_page(&WorkspaceState::new(), None, &provider());
        assert!(html.contains("Your generated notes will appear here"));
        assert!(!html.contains("action=\"/export\""));
        assert!(html.contains("Generate Notes"));
    }

    #[test]
    fn rendered_notes_show_export_control() {
        let state = rendered_state("# Graphs");
        let region = RenderedRegion::new("<h1>Graphs</h1>");
        let html = render_page(&state, Some(&region), &provider());
        assert!(html.contains("action=\"/export\""));
        assert!(html.contains("<h1>Graphs</h1>"));
    }

    #[test]
    fn prompt_and_suggestions_are_escaped() {
        let state = reduce(
            &WorkspaceState::new(),
            WorkspaceEvent::PromptChanged("<script>alert(1)</script>".to_string()),
        )
        .state;
        let html = render_page(&state, None, &provider());
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert"));
        for suggestion in PROMPT_SUGGESTIONS {
            assert!(html.contains(suggestion));
        }
    }

    #[test]
    fn notification_has_dismiss_button() {
        let state = reduce(&WorkspaceState::new(), WorkspaceEvent::generate()).state;
        let html = render_page(&state, None, &provider());
        assert!(html.contains("Prompt required"));
        assert!(html.contains("notification destructive"));
        assert!(html.contains("/notifications/dismiss"));
    }

    #[test]
    fn selectors_reflect_state() {
        let state = reduce(
            &WorkspaceState::new(),
            WorkspaceEvent::NoteTypeSelected(NoteType::Code),
        )
        .state;
        let state = reduce(&state, WorkspaceEvent::DetailSelected(DetailLevel::Detailed)).state;
        let html = render_page(&state, None, &provider());
        assert!(html.contains(r#"value="code" checked"#));
        assert!(html.contains(r#"name="detailed" value="on" checked"#));
        assert!(html.contains("Comprehensive content"));
    }
}
