use askama::Template;
use chrono::NaiveDate;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use tracing::debug;

use crate::config::SiteConfig;
use crate::domain::{PartialSpeaker, Session};
use crate::error::Result;
use crate::i18n::Translations;
use crate::links::{feedback_url, youtube_url};
use crate::schedule::SlotTable;
use crate::speakers::SpeakerDirectory;

/// Everything a session page reads besides the session itself.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub slots: &'a SlotTable,
    pub speakers: &'a SpeakerDirectory,
    pub translations: &'a Translations,
    pub site: &'a SiteConfig,
}

#[derive(Template, Debug)]
#[template(path = "session.html")]
pub struct SessionPage {
    pub lang: String,
    pub title: String,
    pub cancelled: bool,
    pub cancelled_label: String,
    pub talk_type: String,
    pub tags: Vec<String>,
    pub complexity: Option<String>,
    pub flag: Option<String>,
    pub slot_label: String,
    pub room: String,
    pub speakers: Vec<PartialSpeaker>,
    pub youtube_url: Option<String>,
    pub slides_url: Option<String>,
    /// Abstract as HTML; raw HTML in the source is escaped
    pub abstract_html: Option<String>,
    pub session_date: NaiveDate,
    pub feedback_url: Option<String>,
}

impl SessionPage {
    /// Resolves slot and speakers and derives the links. Fails only when a
    /// speaker key is unknown.
    pub fn build(session: &Session, ctx: &RenderContext<'_>) -> Result<Self> {
        let speakers = session
            .speaker_keys()
            .iter()
            .map(|key| ctx.speakers.resolve(key))
            .collect::<Result<Vec<_>>>()?;

        let session_date = ctx.site.dates.date_for(session.day());

        Ok(Self {
            lang: ctx.translations.locale.code().to_string(),
            title: session.title.clone(),
            cancelled: session.cancelled,
            cancelled_label: ctx.translations.cancelled.clone(),
            talk_type: session.talk_type.clone(),
            tags: session.tags.clone(),
            complexity: session.complexity.clone(),
            flag: session.language.as_deref().map(language_flag),
            slot_label: ctx.slots.label(&session.slot, &ctx.translations.day_labels()),
            room: session.room.clone(),
            speakers,
            youtube_url: session
                .youtube
                .as_deref()
                .map(|id| youtube_url(id, &ctx.site.youtube_playlist)),
            slides_url: session.slides.clone(),
            abstract_html: session.summary.as_deref().and_then(markdown_to_html),
            session_date,
            feedback_url: session
                .openfeedback_id
                .as_deref()
                .map(|id| feedback_url(&ctx.site.feedback_project, session_date, id)),
        })
    }

    pub fn has_media(&self) -> bool {
        self.youtube_url.is_some() || self.slides_url.is_some()
    }

    pub fn title_class(&self) -> &'static str {
        if self.cancelled {
            "session-title cancelled"
        } else {
            "session-title"
        }
    }
}

/// Renders the full HTML page of one session.
pub fn render_session(session: &Session, ctx: &RenderContext<'_>) -> Result<String> {
    let page = SessionPage::build(session, ctx)?;
    let html = page.render()?;
    debug!(session = %session.key, bytes = html.len(), "Rendered session page");
    Ok(html)
}

/// Flag emoji for known languages, the upper-cased code otherwise.
fn language_flag(language: &str) -> String {
    match language.to_lowercase().as_str() {
        "fr" | "french" => "🇫🇷".to_string(),
        "en" | "english" => "🇬🇧".to_string(),
        other => {
            debug!(language = %other, "No flag for language, showing its code");
            other.to_uppercase()
        }
    }
}

/// Renders markdown to HTML. Raw HTML blocks and inline tags come out as
/// escaped text and `javascript:` links point nowhere.
fn markdown_to_html(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if is_script_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    Some(out)
}

fn is_script_url(url: &str) -> bool {
    url.trim().to_ascii_lowercase().starts_with("javascript:")
}
