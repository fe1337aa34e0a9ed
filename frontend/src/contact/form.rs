use thiserror::Error;

use crate::config;
use crate::contact::intake::SubmissionError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub message: String,
    /// Honeypot. Hidden from people, so anything in it came from a bot.
    pub bot_field: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Name,
    Email,
    Phone,
    Location,
    Message,
    BotField,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid phone number.")]
    PhoneTooShort,
    #[error("Please select your location.")]
    LocationMissing,
    #[error("Please select a location from the list.")]
    UnknownLocation,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
    pub location: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        [&self.name, &self.email, &self.phone, &self.location]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Per-brand constraints on the form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormRules {
    pub regions: Vec<String>,
    pub collect_email: bool,
}

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_LEN: usize = 10;

fn plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

pub fn validate(fields: &ContactFields, rules: &FormRules) -> Result<Submission, FieldErrors> {
    let mut errors = FieldErrors::default();

    if fields.name.chars().count() < MIN_NAME_LEN {
        errors.name = Some(FieldError::NameTooShort);
    }
    if rules.collect_email && !plausible_email(&fields.email) {
        errors.email = Some(FieldError::InvalidEmail);
    }
    if fields.phone.chars().count() < MIN_PHONE_LEN {
        errors.phone = Some(FieldError::PhoneTooShort);
    }
    if fields.location.is_empty() {
        errors.location = Some(FieldError::LocationMissing);
    } else if !rules.regions.iter().any(|r| r == &fields.location) {
        errors.location = Some(FieldError::UnknownLocation);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut fields = fields.clone();
    if !rules.collect_email {
        fields.email.clear();
    }
    Ok(Submission {
        suspect: !fields.bot_field.is_empty(),
        include_email: rules.collect_email,
        fields,
    })
}

/// Input that passed validation and is ready to hand to an intake.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    fields: ContactFields,
    include_email: bool,
    suspect: bool,
}

impl Submission {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    /// The honeypot was filled in.
    pub fn is_suspect(&self) -> bool {
        self.suspect
    }

    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let f = &self.fields;
        let mut pairs = vec![("form-name", config::FORM_NAME), ("name", f.name.as_str())];
        if self.include_email {
            pairs.push(("email", f.email.as_str()));
        }
        pairs.extend([
            ("phone", f.phone.as_str()),
            ("location", f.location.as_str()),
            ("message", f.message.as_str()),
            ("bot-field", f.bot_field.as_str()),
        ]);
        pairs
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        self.pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Unsubmitted,
    Submitting,
    Succeeded,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Acknowledgement {
    Received,
    Failed(SubmissionError),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
}

impl ContactForm {
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn set(&mut self, input: Input, value: String) {
        match input {
            Input::Name => {
                self.fields.name = value;
                self.errors.name = None;
            }
            Input::Email => {
                self.fields.email = value;
                self.errors.email = None;
            }
            Input::Phone => {
                self.fields.phone = value;
                self.errors.phone = None;
            }
            Input::Location => {
                self.fields.location = value;
                self.errors.location = None;
            }
            Input::Message => self.fields.message = value,
            Input::BotField => self.fields.bot_field = value,
        }
    }

    /// Validates and moves to `Submitting`. Returns `None` when validation
    /// fails or a submission is already in flight.
    pub fn begin_submit(&mut self, rules: &FormRules) -> Option<Submission> {
        if self.is_submitting() {
            return None;
        }
        match validate(&self.fields, rules) {
            Ok(submission) => {
                self.errors = FieldErrors::default();
                self.phase = SubmitPhase::Submitting;
                Some(submission)
            }
            Err(errors) => {
                self.errors = errors;
                self.phase = SubmitPhase::Unsubmitted;
                None
            }
        }
    }

    pub fn finish(&mut self, outcome: Result<(), SubmissionError>) -> Acknowledgement {
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.phase = SubmitPhase::Succeeded;
                Acknowledgement::Received
            }
            Err(e) => {
                self.phase = SubmitPhase::Unsubmitted;
                Acknowledgement::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> FormRules {
        FormRules {
            regions: vec!["Arusha".to_string(), "Mbeya".to_string()],
            collect_email: false,
        }
    }

    fn fields(name: &str, phone: &str, location: &str) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            phone: phone.to_string(),
            location: location.to_string(),
            ..ContactFields::default()
        }
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            fields: ContactFields {
                message: "Need two routers".to_string(),
                ..fields("Ann", "0712345678", "Arusha")
            },
            ..ContactForm::default()
        }
    }

    #[test]
    fn one_char_name_is_rejected() {
        let errors = validate(&fields("A", "0712345678", "Arusha"), &rules()).unwrap_err();
        assert_eq!(errors.name, Some(FieldError::NameTooShort));
        assert_eq!(errors.count(), 1);
    }

    #[test]
    fn short_phone_is_rejected() {
        let errors = validate(&fields("Ann", "12345", "Arusha"), &rules()).unwrap_err();
        assert_eq!(errors.phone, Some(FieldError::PhoneTooShort));
        assert_eq!(errors.name, None);
    }

    #[test]
    fn missing_location_is_rejected() {
        let errors = validate(&fields("Ann", "0712345678", ""), &rules()).unwrap_err();
        assert_eq!(errors.location, Some(FieldError::LocationMissing));
    }

    #[test]
    fn location_outside_the_list_is_rejected() {
        let errors = validate(&fields("Ann", "0712345678", "Atlantis"), &rules()).unwrap_err();
        assert_eq!(errors.location, Some(FieldError::UnknownLocation));
    }

    #[test]
    fn complete_input_is_valid() {
        let submission = validate(&fields("Ann", "0712345678", "Arusha"), &rules()).unwrap();
        assert!(!submission.is_suspect());
        assert_eq!(submission.fields().location, "Arusha");
    }

    #[test]
    fn every_failing_field_is_reported() {
        let errors = validate(&fields("", "", ""), &rules()).unwrap_err();
        assert_eq!(errors.count(), 3);
    }

    #[test]
    fn filled_honeypot_is_suspect_but_not_an_error() {
        let mut input = fields("Ann", "0712345678", "Arusha");
        input.bot_field = "http://spam.example".to_string();
        let submission = validate(&input, &rules()).unwrap();
        assert!(submission.is_suspect());
    }

    #[test]
    fn email_is_checked_only_when_collected() {
        let mut with_email = rules();
        with_email.collect_email = true;

        let mut input = fields("Ann", "0712345678", "Arusha");
        input.email = "ann@".to_string();
        assert!(validate(&input, &rules()).is_ok());
        assert_eq!(
            validate(&input, &with_email).unwrap_err().email,
            Some(FieldError::InvalidEmail)
        );

        input.email = "ann@example.com".to_string();
        assert!(validate(&input, &with_email).is_ok());
    }

    #[test]
    fn encoded_body_carries_form_name_and_every_field() {
        let mut input = fields("Ann Mushi", "0712345678", "Arusha");
        input.message = "5G & fibre?".to_string();
        let body = validate(&input, &rules()).unwrap().encode();
        assert_eq!(
            body,
            "form-name=contact-form&name=Ann%20Mushi&phone=0712345678&location=Arusha\
             &message=5G%20%26%20fibre%3F&bot-field="
        );
    }

    #[test]
    fn email_pair_follows_name_when_collected() {
        let mut with_email = rules();
        with_email.collect_email = true;
        let mut input = fields("Ann", "0712345678", "Arusha");
        input.email = "ann@example.com".to_string();
        let submission = validate(&input, &with_email).unwrap();
        let keys: Vec<_> = submission.pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["form-name", "name", "email", "phone", "location", "message", "bot-field"]
        );
    }

    #[test]
    fn invalid_submit_stays_unsubmitted() {
        let mut form = ContactForm::default();
        form.set(Input::Name, "A".to_string());
        assert!(form.begin_submit(&rules()).is_none());
        assert_eq!(form.phase, SubmitPhase::Unsubmitted);
        assert_eq!(form.errors.name, Some(FieldError::NameTooShort));

        form.set(Input::Name, "Ann".to_string());
        assert_eq!(form.errors.name, None);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = filled_form();
        assert!(form.begin_submit(&rules()).is_some());
        assert!(form.begin_submit(&rules()).is_none());
        assert!(form.is_submitting());
    }

    #[test]
    fn success_clears_fields_once() {
        let mut form = filled_form();
        form.begin_submit(&rules()).unwrap();
        let ack = form.finish(Ok(()));
        assert_eq!(ack, Acknowledgement::Received);
        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(form.phase, SubmitPhase::Succeeded);
    }

    #[test]
    fn failure_keeps_fields_and_allows_retry() {
        let mut form = filled_form();
        let before = form.fields.clone();
        form.begin_submit(&rules()).unwrap();
        let ack = form.finish(Err(SubmissionError::Rejected { status: 500 }));
        assert_eq!(ack, Acknowledgement::Failed(SubmissionError::Rejected { status: 500 }));
        assert_eq!(form.fields, before);
        assert_eq!(form.phase, SubmitPhase::Unsubmitted);
        assert!(!form.is_submitting());
        assert!(form.begin_submit(&rules()).is_some());
    }
}
