use std::fmt;

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::config;
use crate::contact::form::Submission;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("intake rejected the submission with status {status}")]
    Rejected { status: u16 },
    #[error("intake did not answer in time")]
    TimedOut,
}

/// 2xx is the only affirmative answer.
pub fn classify(status: u16) -> Result<(), SubmissionError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmissionError::Rejected { status })
    }
}

/// Where a valid submission goes.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum IntakeStrategy {
    /// Accept in the page and acknowledge. Nothing leaves the browser.
    Local,
    /// POST the encoded fields to a static-site form handler.
    Remote {
        #[serde(default)]
        endpoint: Option<String>,
    },
}

impl Default for IntakeStrategy {
    fn default() -> Self {
        IntakeStrategy::Local
    }
}

impl IntakeStrategy {
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            IntakeStrategy::Local => None,
            IntakeStrategy::Remote { endpoint } => {
                Some(endpoint.as_deref().unwrap_or(config::get_intake_url()))
            }
        }
    }

    pub async fn submit(&self, submission: &Submission) -> Result<(), SubmissionError> {
        match self.endpoint() {
            None => {
                if submission.is_suspect() {
                    warn!("Dropping contact submission with filled honeypot");
                } else {
                    info!("Contact submission accepted locally: {:?}", submission.fields());
                }
                Ok(())
            }
            Some(endpoint) => post(endpoint, submission).await,
        }
    }
}

async fn post(endpoint: &str, submission: &Submission) -> Result<(), SubmissionError> {
    if submission.is_suspect() {
        warn!("Forwarding contact submission with filled honeypot");
    }

    let request = Request::post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(submission.encode());

    let send = Box::pin(async move { request.send().await.map(|response| response.status()) });
    let timeout = Box::pin(TimeoutFuture::new(config::REQUEST_TIMEOUT_MS));

    outcome(future::select(send, timeout).await)
}

/// Maps the race between the request and the timer to a submission result.
fn outcome<E: fmt::Display, S, T>(
    raced: Either<(Result<u16, E>, S), ((), T)>,
) -> Result<(), SubmissionError> {
    match raced {
        Either::Left((Ok(status), _)) => {
            info!("Contact intake answered with status {}", status);
            classify(status)
        }
        Either::Left((Err(e), _)) => Err(SubmissionError::Transport(e.to_string())),
        Either::Right(_) => Err(SubmissionError::TimedOut),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::{validate, Acknowledgement, ContactFields, ContactForm, FormRules, Input};
    use futures::executor::block_on;

    fn submission(bot_field: &str) -> Submission {
        let fields = ContactFields {
            name: "Ann".to_string(),
            phone: "0712345678".to_string(),
            location: "Arusha".to_string(),
            bot_field: bot_field.to_string(),
            ..ContactFields::default()
        };
        let rules = FormRules {
            regions: vec!["Arusha".to_string()],
            collect_email: false,
        };
        validate(&fields, &rules).unwrap()
    }

    #[test]
    fn only_2xx_counts_as_accepted() {
        assert_eq!(classify(200), Ok(()));
        assert_eq!(classify(204), Ok(()));
        assert_eq!(classify(302), Err(SubmissionError::Rejected { status: 302 }));
        assert_eq!(classify(404), Err(SubmissionError::Rejected { status: 404 }));
        assert_eq!(classify(500), Err(SubmissionError::Rejected { status: 500 }));
    }

    #[test]
    fn race_outcome_maps_to_submission_result() {
        let answered = |status: u16| outcome::<String, (), ()>(Either::Left((Ok(status), ())));
        assert_eq!(answered(200), Ok(()));
        assert_eq!(answered(404), Err(SubmissionError::Rejected { status: 404 }));

        let offline = outcome::<String, (), ()>(Either::Left((Err("network down".to_string()), ())));
        assert_eq!(offline, Err(SubmissionError::Transport("network down".to_string())));

        let late = outcome::<String, (), ()>(Either::Right(((), ())));
        assert_eq!(late, Err(SubmissionError::TimedOut));
    }

    #[test]
    fn transport_errors_and_timeouts_fail_the_form() {
        let rules = FormRules {
            regions: vec!["Arusha".to_string()],
            collect_email: false,
        };
        let raced = [
            outcome::<String, (), ()>(Either::Left((Err("network down".to_string()), ()))),
            outcome::<String, (), ()>(Either::Right(((), ()))),
        ];
        for result in raced {
            let mut form = ContactForm::default();
            form.set(Input::Name, "Ann".to_string());
            form.set(Input::Phone, "0712345678".to_string());
            form.set(Input::Location, "Arusha".to_string());
            let before = form.fields.clone();

            assert!(form.begin_submit(&rules).is_some());
            let ack = form.finish(result.clone());
            assert_eq!(ack, Acknowledgement::Failed(result.unwrap_err()));
            assert_eq!(form.fields, before);
            assert!(!form.is_submitting());
        }
    }

    #[test]
    fn local_strategy_always_acknowledges() {
        assert_eq!(block_on(IntakeStrategy::Local.submit(&submission(""))), Ok(()));
        assert_eq!(block_on(IntakeStrategy::Local.submit(&submission("bot"))), Ok(()));
    }

    #[test]
    fn strategy_reads_from_content() {
        let local: IntakeStrategy = serde_json::from_str(r#"{"strategy":"local"}"#).unwrap();
        assert_eq!(local, IntakeStrategy::Local);
        assert_eq!(local.endpoint(), None);

        let remote: IntakeStrategy =
            serde_json::from_str(r#"{"strategy":"remote","endpoint":"/"}"#).unwrap();
        assert_eq!(remote.endpoint(), Some("/"));
    }

    #[test]
    fn remote_without_endpoint_uses_configured_url() {
        let remote: IntakeStrategy = serde_json::from_str(r#"{"strategy":"remote"}"#).unwrap();
        assert_eq!(remote.endpoint(), Some(config::get_intake_url()));
    }
}
