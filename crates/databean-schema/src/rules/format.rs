//! Text-format rules.

use std::sync::OnceLock;

use regex::Regex;

use crate::validator::Validator;
use crate::violation::Violation;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^\w+([-+.']\w+)*@\w+([-.]\w+)*\.\w+([-.]\w+)*$")
            .expect("email pattern is valid")
    })
}

/// Accepts syntactically valid e-mail addresses.
pub fn as_email() -> impl Validator<String> + Copy + Send + Sync {
    |value: &String| {
        if email_re().is_match(value) {
            Ok(())
        } else {
            Err(Violation::new("EMAIL_FORMAT"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        let rule = as_email();
        for ok in ["a@b.co", "first.last@sub.example.com", "tag+x@mail.io"] {
            assert!(rule.validate(&ok.to_string()).is_ok(), "{ok}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        let rule = as_email();
        for bad in ["", "plain", "@no-local.io", "a@", "a b@c.io"] {
            let err = rule.validate(&bad.to_string()).unwrap_err();
            assert_eq!(err.constraint, "EMAIL_FORMAT", "{bad}");
        }
    }
}
