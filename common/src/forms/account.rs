//! Signup, signin and payment forms of the subscription site.
//!
//! These post form-encoded bodies to the same origin; the server answers with a redirect
//! to the next page, which becomes the follow-up navigation.

use crate::error::ValidationError;
use crate::model::fields::FormFields;
use crate::model::response::ServerResponse;
use crate::navigation::FollowUp;
use crate::requests::AccountRequest;
use crate::submission::{FormSchema, SubmitLabels};
use crate::validation::{email_format, password_length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Signup,
    Signin,
    Payment,
}

impl AccountKind {
    /// Same-origin endpoint the form posts to.
    pub fn action(self) -> &'static str {
        match self {
            AccountKind::Signup => "/api/signup",
            AccountKind::Signin => "/api/signin",
            AccountKind::Payment => "/api/payment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSchema {
    pub kind: AccountKind,
}

impl AccountSchema {
    pub fn new(kind: AccountKind) -> Self {
        Self { kind }
    }
}

impl FormSchema for AccountSchema {
    type Request = AccountRequest;

    fn validate(&self, fields: &FormFields) -> Result<AccountRequest, ValidationError> {
        match self.kind {
            AccountKind::Signup => {
                password_length(fields, "password")?;
                email_format(fields, "email")?;
                fields.required("full_name", "Please enter your full name")?;
            }
            AccountKind::Signin => {
                fields.required("email", "Please enter your email")?;
                fields.required("password", "Please enter your password")?;
            }
            AccountKind::Payment => {
                fields.required("token", "Please enter a payment token")?;
            }
        }
        Ok(AccountRequest {
            action: self.kind.action(),
            fields: fields.clone(),
        })
    }

    fn labels(&self) -> SubmitLabels {
        match self.kind {
            AccountKind::Signup => SubmitLabels {
                idle: "Create Account",
                pending: "Creating Account...",
            },
            AccountKind::Signin => SubmitLabels {
                idle: "Sign In",
                pending: "Signing In...",
            },
            AccountKind::Payment => SubmitLabels {
                idle: "Pay Now",
                pending: "Processing Payment...",
            },
        }
    }

    fn success_message(&self, _response: &ServerResponse) -> String {
        match self.kind {
            AccountKind::Signup => "Account created! Redirecting to sign in...",
            AccountKind::Signin => "Signed in! Redirecting...",
            AccountKind::Payment => "Payment successful! Redirecting...",
        }
        .to_string()
    }

    fn failure_message(&self, response: &ServerResponse) -> String {
        if let Some(explanation) = response.explanation() {
            return explanation.to_string();
        }
        match self.kind {
            AccountKind::Signup => "Could not create your account",
            AccountKind::Signin => "Could not sign you in",
            AccountKind::Payment => "Payment could not be processed",
        }
        .to_string()
    }

    fn follow_up(&self, response: &ServerResponse) -> Option<FollowUp> {
        response.redirected_to.clone().map(FollowUp::immediate)
    }
}

/// Interprets the final response of an account form post.
///
/// A post the server answered with a redirect succeeded, whatever the status of the page it
/// led to; the browser would have landed there anyway. Otherwise a 2xx is a success with no
/// navigation, and anything else is a failure explained by the JSON body when it has one.
pub fn account_outcome(status: u16, redirected: bool, url: &str, body: &str) -> ServerResponse {
    if redirected {
        return ServerResponse {
            redirected_to: (!url.is_empty()).then(|| url.to_string()),
            ..ServerResponse::ok()
        };
    }
    if (200..300).contains(&status) {
        return ServerResponse::ok();
    }
    let body = serde_json::from_str::<ServerResponse>(body).unwrap_or_default();
    ServerResponse {
        success: false,
        redirected_to: None,
        ..body
    }
}
