//! Field-level validation of incoming record payloads.
//!
//! Payloads arrive as untyped JSON. Every rule for a payload is evaluated,
//! so a single response can report all failing fields, and a payload that
//! passes is turned into a typed [`NewVideo`] or [`VideoUpdate`].

use crate::resolution::Resolution;
use crate::video::{NewVideo, VideoUpdate};
use jiff::Timestamp;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Display;
use std::sync::LazyLock;
use thiserror::Error;

pub const TITLE_MAX_CHARS: usize = 40;
pub const AUTHOR_MAX_CHARS: usize = 20;
pub const MIN_AGE_RESTRICTION: u64 = 1;
pub const MAX_AGE_RESTRICTION: u64 = 18;

static PUBLICATION_DATE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\.[0-9]{3})?Z$")
        .expect("publication date pattern is a valid regex")
});

/// A record field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Author,
    AvailableResolutions,
    CanBeDownloaded,
    MinAgeRestriction,
    PublicationDate,
}

impl Field {
    /// The field name as it appears in request and response bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::AvailableResolutions => "availableResolutions",
            Field::CanBeDownloaded => "canBeDownloaded",
            Field::MinAgeRestriction => "minAgeRestriction",
            Field::PublicationDate => "publicationDate",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub message: String,
    pub field: Field,
}

impl FieldError {
    pub fn new(field: Field) -> Self {
        Self {
            message: format!("problem with the {field} field"),
            field,
        }
    }
}

/// Every failed rule of a payload, in rule-check order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.iter().map(|error| error.field).collect()
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

/// Validates a creation payload.
///
/// Checks `title`, `author`, `availableResolutions` and `canBeDownloaded`.
/// A payload that is not a JSON object is treated as an empty one.
pub fn validate_create(input: &Value) -> Result<NewVideo, ValidationErrors> {
    let mut checker = Checker::new(input);

    let title = checker.check(Field::Title, |value| text_within(value, TITLE_MAX_CHARS));
    let author = checker.check(Field::Author, |value| text_within(value, AUTHOR_MAX_CHARS));
    let available_resolutions = checker.check(Field::AvailableResolutions, resolutions);
    let can_be_downloaded = checker.check(Field::CanBeDownloaded, download_flag);

    match (title, author, available_resolutions, can_be_downloaded) {
        (Some(title), Some(author), Some(available_resolutions), Some(can_be_downloaded)) => {
            Ok(NewVideo {
                title,
                author,
                available_resolutions,
                can_be_downloaded,
            })
        }
        _ => Err(checker.into_errors()),
    }
}

/// Validates an update payload.
///
/// Checks every creation rule plus `minAgeRestriction` and `publicationDate`.
pub fn validate_update(input: &Value) -> Result<VideoUpdate, ValidationErrors> {
    let mut checker = Checker::new(input);

    let title = checker.check(Field::Title, |value| text_within(value, TITLE_MAX_CHARS));
    let author = checker.check(Field::Author, |value| text_within(value, AUTHOR_MAX_CHARS));
    let available_resolutions = checker.check(Field::AvailableResolutions, resolutions);
    let can_be_downloaded = checker.check(Field::CanBeDownloaded, download_flag);
    let min_age_restriction = checker.check(Field::MinAgeRestriction, age_restriction);
    let publication_date = checker.check(Field::PublicationDate, publication_date);

    match (
        title,
        author,
        available_resolutions,
        can_be_downloaded,
        min_age_restriction,
        publication_date,
    ) {
        (
            Some(title),
            Some(author),
            Some(available_resolutions),
            Some(can_be_downloaded),
            Some(min_age_restriction),
            Some(publication_date),
        ) => Ok(VideoUpdate {
            title,
            author,
            available_resolutions,
            can_be_downloaded,
            min_age_restriction,
            publication_date,
        }),
        _ => Err(checker.into_errors()),
    }
}

/// Runs rules against the fields of a payload and collects the failures.
struct Checker<'a> {
    fields: Option<&'a Map<String, Value>>,
    errors: Vec<FieldError>,
}

impl<'a> Checker<'a> {
    fn new(input: &'a Value) -> Self {
        Self {
            fields: input.as_object(),
            errors: Vec::new(),
        }
    }

    /// Applies `rule` to the field's raw value. A rule returning `None`
    /// records a failure for that field.
    fn check<T>(
        &mut self,
        field: Field,
        rule: impl FnOnce(Option<&'a Value>) -> Option<T>,
    ) -> Option<T> {
        let value = self.fields.and_then(|fields| fields.get(field.as_str()));
        let checked = rule(value);
        if checked.is_none() {
            self.errors.push(FieldError::new(field));
        }
        checked
    }

    fn into_errors(self) -> ValidationErrors {
        ValidationErrors(self.errors)
    }
}

fn text_within(value: Option<&Value>, max_chars: usize) -> Option<String> {
    let text = value?.as_str()?;
    if text.trim().is_empty() || text.chars().count() > max_chars {
        return None;
    }
    Some(text.to_string())
}

fn resolutions(value: Option<&Value>) -> Option<Vec<Resolution>> {
    value?
        .as_array()?
        .iter()
        .map(|item| item.as_str()?.parse().ok())
        .collect()
}

// Absent and null both mean "not downloadable".
fn download_flag(value: Option<&Value>) -> Option<bool> {
    match value {
        None | Some(Value::Null) => Some(false),
        Some(Value::Bool(flag)) => Some(*flag),
        Some(_) => None,
    }
}

fn age_restriction(value: Option<&Value>) -> Option<Option<u8>> {
    match value {
        None | Some(Value::Null) => Some(None),
        Some(value) => value
            .as_u64()
            .filter(|age| (MIN_AGE_RESTRICTION..=MAX_AGE_RESTRICTION).contains(age))
            .and_then(|age| u8::try_from(age).ok())
            .map(Some),
    }
}

fn publication_date(value: Option<&Value>) -> Option<Timestamp> {
    let text = value?.as_str()?;
    if !PUBLICATION_DATE_FORMAT.is_match(text) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_update() -> Value {
        json!({
            "title": "Updated Video",
            "author": "Updated Author",
            "availableResolutions": ["P144", "P240"],
            "canBeDownloaded": true,
            "minAgeRestriction": 16,
            "publicationDate": "2024-05-01T10:20:30.123Z",
        })
    }

    #[test]
    fn create_accepts_minimal_payload() {
        let video = validate_create(&json!({
            "title": "Test Video",
            "author": "Test Author",
            "availableResolutions": ["P720", "P1080"],
        }))
        .unwrap();

        assert_eq!(video.title, "Test Video");
        assert_eq!(video.author, "Test Author");
        assert_eq!(
            video.available_resolutions,
            vec![Resolution::P720, Resolution::P1080]
        );
        assert!(!video.can_be_downloaded);
    }

    #[test]
    fn create_reports_missing_title_and_author_in_order() {
        let err = validate_create(&json!({ "availableResolutions": ["P720"] })).unwrap_err();
        assert_eq!(err.fields(), vec![Field::Title, Field::Author]);
        assert_eq!(err.errors()[0].message, "problem with the title field");
        assert_eq!(err.errors()[1].message, "problem with the author field");
    }

    #[test]
    fn create_reports_every_failing_field() {
        let err = validate_create(&json!({
            "title": " ",
            "author": 7,
            "availableResolutions": "P720",
            "canBeDownloaded": "yes",
        }))
        .unwrap_err();

        assert_eq!(
            err.fields(),
            vec![
                Field::Title,
                Field::Author,
                Field::AvailableResolutions,
                Field::CanBeDownloaded,
            ]
        );
    }

    #[test]
    fn non_object_payload_fails_required_fields() {
        let err = validate_create(&Value::Null).unwrap_err();
        assert_eq!(
            err.fields(),
            vec![Field::Title, Field::Author, Field::AvailableResolutions]
        );
    }

    #[test]
    fn title_and_author_length_limits() {
        let at_limit = json!({
            "title": "t".repeat(TITLE_MAX_CHARS),
            "author": "a".repeat(AUTHOR_MAX_CHARS),
            "availableResolutions": [],
        });
        assert!(validate_create(&at_limit).is_ok());

        let over_limit = json!({
            "title": "t".repeat(TITLE_MAX_CHARS + 1),
            "author": "a".repeat(AUTHOR_MAX_CHARS + 1),
            "availableResolutions": [],
        });
        let err = validate_create(&over_limit).unwrap_err();
        assert_eq!(err.fields(), vec![Field::Title, Field::Author]);
    }

    #[test]
    fn length_is_counted_in_characters() {
        let payload = json!({
            "title": "é".repeat(TITLE_MAX_CHARS),
            "author": "ü".repeat(AUTHOR_MAX_CHARS),
            "availableResolutions": ["P144"],
        });
        assert!(validate_create(&payload).is_ok());
    }

    #[test]
    fn unknown_resolution_is_rejected() {
        let err = validate_create(&json!({
            "title": "Video",
            "author": "Author",
            "availableResolutions": ["P720", "P4320"],
        }))
        .unwrap_err();
        assert_eq!(err.fields(), vec![Field::AvailableResolutions]);

        let err = validate_create(&json!({
            "title": "Video",
            "author": "Author",
            "availableResolutions": [720],
        }))
        .unwrap_err();
        assert_eq!(err.fields(), vec![Field::AvailableResolutions]);
    }

    #[test]
    fn duplicate_and_empty_resolutions_are_allowed() {
        let video = validate_create(&json!({
            "title": "Video",
            "author": "Author",
            "availableResolutions": ["P720", "P720"],
        }))
        .unwrap();
        assert_eq!(
            video.available_resolutions,
            vec![Resolution::P720, Resolution::P720]
        );

        let video = validate_create(&json!({
            "title": "Video",
            "author": "Author",
            "availableResolutions": [],
        }))
        .unwrap();
        assert!(video.available_resolutions.is_empty());
    }

    #[test]
    fn null_download_flag_defaults_to_false() {
        let video = validate_create(&json!({
            "title": "Video",
            "author": "Author",
            "availableResolutions": [],
            "canBeDownloaded": null,
        }))
        .unwrap();
        assert!(!video.can_be_downloaded);
    }

    #[test]
    fn update_accepts_full_payload() {
        let update = validate_update(&valid_update()).unwrap();
        assert_eq!(update.title, "Updated Video");
        assert!(update.can_be_downloaded);
        assert_eq!(update.min_age_restriction, Some(16));
        assert_eq!(
            update.publication_date,
            "2024-05-01T10:20:30.123Z".parse::<Timestamp>().unwrap()
        );
    }

    #[test]
    fn update_reports_age_after_title_and_author() {
        let err = validate_update(&json!({
            "availableResolutions": ["P144", "P240"],
            "canBeDownloaded": false,
            "minAgeRestriction": 21,
            "publicationDate": "2024-05-01T10:20:30.123Z",
        }))
        .unwrap_err();

        assert_eq!(
            err.fields(),
            vec![Field::Title, Field::Author, Field::MinAgeRestriction]
        );
        assert_eq!(
            err.errors()[2].message,
            "problem with the minAgeRestriction field"
        );
    }

    #[test]
    fn age_restriction_bounds() {
        for (age, ok) in [
            (json!(0), false),
            (json!(1), true),
            (json!(18), true),
            (json!(19), false),
        ] {
            let mut payload = valid_update();
            payload["minAgeRestriction"] = age;
            assert_eq!(validate_update(&payload).is_ok(), ok);
        }

        let mut payload = valid_update();
        payload["minAgeRestriction"] = json!("16");
        assert_eq!(
            validate_update(&payload).unwrap_err().fields(),
            vec![Field::MinAgeRestriction]
        );
    }

    #[test]
    fn absent_or_null_age_restriction_clears_it() {
        let mut payload = valid_update();
        payload["minAgeRestriction"] = Value::Null;
        assert_eq!(validate_update(&payload).unwrap().min_age_restriction, None);

        let mut payload = valid_update();
        payload.as_object_mut().unwrap().remove("minAgeRestriction");
        assert_eq!(validate_update(&payload).unwrap().min_age_restriction, None);
    }

    #[test]
    fn publication_date_format() {
        for (date, ok) in [
            ("2024-05-01T10:20:30Z", true),
            ("2024-05-01T10:20:30.123Z", true),
            ("2024-05-01T10:20:30.12Z", false),
            ("2024-05-01T10:20:30+00:00", false),
            ("2024-05-01 10:20:30Z", false),
            ("2024-13-01T10:20:30Z", false),
            ("yesterday", false),
        ] {
            let mut payload = valid_update();
            payload["publicationDate"] = json!(date);
            assert_eq!(validate_update(&payload).is_ok(), ok, "{date}");
        }
    }

    #[test]
    fn update_requires_publication_date() {
        let mut payload = valid_update();
        payload.as_object_mut().unwrap().remove("publicationDate");
        assert_eq!(
            validate_update(&payload).unwrap_err().fields(),
            vec![Field::PublicationDate]
        );
    }

    #[test]
    fn field_error_serializes_with_wire_names() {
        let json = serde_json::to_value(FieldError::new(Field::AvailableResolutions)).unwrap();
        assert_eq!(
            json,
            json!({
                "message": "problem with the availableResolutions field",
                "field": "availableResolutions",
            })
        );
    }
}
