//! Story generation: request validation, variant sizing, titling and the
//! page generator.
//!
//! Everything in this module is a pure function of its inputs. The generator
//! is total over validated requests and never fails.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Price of a story in cents. Fixed; there is no payment flow.
pub const PRICE_CENTS: i64 = 1000;

/// Page count of a preview story, whatever the request asked for.
pub const PREVIEW_PAGES: u32 = 3;

/// Lower bound on the page count of a full story.
pub const MIN_FULL_PAGES: u32 = 6;

/// Upper bound on the page count of a full story.
pub const MAX_FULL_PAGES: u32 = 20;

/// Page count used when the request omits `pages`.
pub const DEFAULT_PAGES: u32 = 12;

pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 12;

pub const DEFAULT_TONE: &str = "doux";
pub const DEFAULT_LANGUAGE: &str = "fr";

/// Subtitle used for any theme without a dedicated phrase.
pub const FALLBACK_SUBTITLE: &str = "L'aventure merveilleuse";

/// Known themes (lowercased) and their title phrase.
pub const THEME_SUBTITLES: &[(&str, &str)] = &[
    ("espace", "L'odyssée stellaire"),
    ("pirates", "Le trésor des vagues d'or"),
    ("jungle", "Le coeur de la forêt magique"),
    ("château", "Le secret du château arc-en-ciel"),
];

const IMAGE_SERVICE_BASE: &str = "https://picsum.photos/seed";
pub const IMAGE_WIDTH: u32 = 960;
pub const IMAGE_HEIGHT: u32 = 640;

/// Number of narrative beats; pages cycle through them with this period.
pub const BEAT_COUNT: usize = 6;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Story size mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Preview,
    Full,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Preview => "preview",
            Variant::Full => "full",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A child profile submitted to the story endpoint.
///
/// `age` and `pages` decode as wide integers so that any integer reaches the
/// range rules; they are narrowed in [`build_story`] after validation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StoryRequest {
    #[validate(custom(function = "validate_not_blank", message = "must not be empty"))]
    pub child_name: String,
    #[validate(range(min = 1, max = 12, message = "must be between 1 and 12"))]
    pub age: i64,
    pub theme: String,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[validate(range(min = 6, max = 20, message = "must be between 6 and 20"))]
    #[serde(default = "default_pages")]
    pub pages: i64,
}

fn default_pages() -> i64 {
    i64::from(DEFAULT_PAGES)
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl StoryRequest {
    /// Tone to narrate with; absent or empty falls back to [`DEFAULT_TONE`].
    pub fn resolved_tone(&self) -> &str {
        non_empty(self.tone.as_deref()).unwrap_or(DEFAULT_TONE)
    }

    /// Language code; absent or empty falls back to [`DEFAULT_LANGUAGE`].
    pub fn resolved_language(&self) -> &str {
        non_empty(self.language.as_deref()).unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Lowercased theme, the key used for titles, beats and image seeds.
    pub fn theme_key(&self) -> String {
        self.theme.to_lowercase()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// One generated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryPage {
    pub page_number: u32,
    pub text: String,
    pub image_url: String,
}

/// The persisted story document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub child_name: String,
    pub age: u8,
    pub theme: String,
    pub tone: String,
    pub language: String,
    pub pages: u32,
    pub variant: Variant,
    pub price_cents: i64,
    pub pages_data: Vec<StoryPage>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a request at the boundary, before any generation happens.
pub fn validate_request(request: &StoryRequest) -> Result<(), CoreError> {
    request
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))
}

/// Flatten validator output into a stable `field: message; ...` string.
fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field}: {message}")
        })
        .collect();
    fields.sort();
    fields.join("; ")
}

// ---------------------------------------------------------------------------
// Sizing and titling
// ---------------------------------------------------------------------------

/// Number of pages to generate for a variant.
pub fn target_pages(variant: Variant, requested: i64) -> u32 {
    match variant {
        Variant::Preview => PREVIEW_PAGES,
        Variant::Full => {
            let clamped =
                requested.clamp(i64::from(MIN_FULL_PAGES), i64::from(MAX_FULL_PAGES));
            u32::try_from(clamped).unwrap_or(MIN_FULL_PAGES)
        }
    }
}

/// Title phrase for a theme, case-insensitive.
pub fn subtitle_for(theme: &str) -> &'static str {
    let key = theme.to_lowercase();
    THEME_SUBTITLES
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, subtitle)| *subtitle)
        .unwrap_or(FALLBACK_SUBTITLE)
}

pub fn title_for(child_name: &str, theme: &str) -> String {
    format!("{child_name} et {}", subtitle_for(theme))
}

/// Placeholder illustration for a page, seeded by `"{theme}-{page}"`.
pub fn image_url_for(theme: &str, page: u32) -> String {
    let theme = theme.to_lowercase();
    format!("{IMAGE_SERVICE_BASE}/{theme}-{page}/{IMAGE_WIDTH}/{IMAGE_HEIGHT}")
}

// ---------------------------------------------------------------------------
// Page generation
// ---------------------------------------------------------------------------

fn beats(request: &StoryRequest) -> [String; BEAT_COUNT] {
    let name = &request.child_name;
    let age = request.age;
    let theme = request.theme_key();
    let tone = request.resolved_tone();

    [
        format!(
            "{name}, {age} ans, adore l'univers {theme}. Un soir, une petite lueur vient chuchoter son prénom..."
        ),
        format!(
            "La lueur ouvre un passage secret. {name} respire doucement, son coeur bat fort mais {tone}."
        ),
        "De l'autre côté, un ami apparaît. Ensemble, ils découvrent une mission simple: écouter, aider et oser."
            .to_string(),
        format!(
            "Un petit défi arrive. {name} inspire, compte jusqu'à trois et trouve une idée lumineuse."
        ),
        format!("Le monde {theme} s'illumine. Tout devient plus doux, plus coloré, et {name} sourit."),
        "La morale: avec gentillesse et courage, on grandit chaque jour, à son rythme.".to_string(),
    ]
}

/// Generate exactly `total_pages` pages, numbered from 1.
///
/// Page `i` uses beat `(i - 1) % 6`, so beats repeat past page six.
pub fn generate_pages(request: &StoryRequest, total_pages: u32) -> Vec<StoryPage> {
    let beats = beats(request);
    let theme = request.theme_key();

    (1..=total_pages)
        .map(|page_number| StoryPage {
            page_number,
            text: beats[(page_number as usize - 1) % BEAT_COUNT].clone(),
            image_url: image_url_for(&theme, page_number),
        })
        .collect()
}

/// Age as stored on the story; the request is validated before this runs.
fn narrow_age(age: i64) -> u8 {
    u8::try_from(age.clamp(MIN_AGE, MAX_AGE)).unwrap_or(1)
}

/// Assemble the full story document for a request and variant.
pub fn build_story(request: &StoryRequest, variant: Variant) -> Story {
    let pages = target_pages(variant, request.pages);

    Story {
        title: title_for(&request.child_name, &request.theme),
        child_name: request.child_name.clone(),
        age: narrow_age(request.age),
        theme: request.theme.clone(),
        tone: request.resolved_tone().to_string(),
        language: request.resolved_language().to_string(),
        pages,
        variant,
        price_cents: PRICE_CENTS,
        pages_data: generate_pages(request, pages),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
