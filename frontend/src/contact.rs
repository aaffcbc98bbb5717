use std::fmt;

use thiserror::Error;

use crate::config;
use crate::countries::CountryOption;

pub const MISSING_FIELDS_ALERT: &str = "Please fill in all the fields!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Country,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Company => "company",
            ContactField::Country => "country",
            ContactField::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("contact form field `{0}` is empty")]
    MissingField(ContactField),
}

/// Everything the visitor typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub company: String,
    pub country: Option<CountryOption>,
    pub message: String,
}

impl ContactFormData {
    /// Fails on the first empty field. Whitespace counts as content.
    pub fn validate(&self) -> Result<(), ContactError> {
        let checks = [
            (ContactField::Name, self.name.is_empty()),
            (ContactField::Email, self.email.is_empty()),
            (ContactField::Company, self.company.is_empty()),
            (ContactField::Country, self.country.is_none()),
            (ContactField::Message, self.message.is_empty()),
        ];

        match checks.into_iter().find(|(_, missing)| *missing) {
            Some((field, _)) => Err(ContactError::MissingField(field)),
            None => Ok(()),
        }
    }

    pub fn subject(&self) -> String {
        format!("Inquiries to Ederic from {}", self.name)
    }

    pub fn body(&self) -> String {
        let country = self
            .country
            .as_ref()
            .map(|country| country.label.as_str())
            .unwrap_or("Not specified");

        format!(
            "Name: {}\nEmail: {}\nCompany: {}\nCountry: {}\n\nMessage:\n{}",
            self.name, self.email, self.company, country, self.message
        )
    }

    /// Web-mail compose link with the subject and body pre-filled.
    pub fn compose_link(&self, recipient: &str) -> String {
        format!(
            "{}&to={}&su={}&body={}",
            config::MAIL_COMPOSE_URL,
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        )
    }

    /// Validates, then builds the link to the business inbox.
    pub fn submit(&self) -> Result<String, ContactError> {
        self.validate()?;
        Ok(self.compose_link(config::CONTACT_EMAIL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormData {
        ContactFormData {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            company: "Acme".to_string(),
            country: Some(CountryOption {
                value: "US".to_string(),
                label: "United States".to_string(),
            }),
            message: "Hello".to_string(),
        }
    }

    fn query_param<'a>(link: &'a str, key: &str) -> &'a str {
        let prefix = format!("{}=", key);
        link.split(|c| c == '?' || c == '&')
            .find_map(|pair| pair.strip_prefix(prefix.as_str()))
            .unwrap_or_else(|| panic!("no `{}` parameter in {}", key, link))
    }

    #[test]
    fn each_empty_field_blocks_submission() {
        let cases: [(ContactField, fn(&mut ContactFormData)); 5] = [
            (ContactField::Name, |form| form.name.clear()),
            (ContactField::Email, |form| form.email.clear()),
            (ContactField::Company, |form| form.company.clear()),
            (ContactField::Country, |form| form.country = None),
            (ContactField::Message, |form| form.message.clear()),
        ];

        for (field, clear) in cases {
            let mut form = filled();
            clear(&mut form);
            assert_eq!(form.submit(), Err(ContactError::MissingField(field)));
        }
    }

    #[test]
    fn reports_first_missing_field_in_form_order() {
        let form = ContactFormData {
            company: "Acme".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingField(ContactField::Name)));
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut form = filled();
        form.message = "  ".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn complete_form_produces_compose_link() {
        let link = filled().submit().unwrap();

        assert!(link.starts_with("https://mail.google.com/mail/?view=cm&fs=1&to=edenicid@gmail.com&"));

        let subject = urlencoding::decode(query_param(&link, "su")).unwrap();
        assert_eq!(subject, "Inquiries to Ederic from Jane Doe");

        let body = urlencoding::decode(query_param(&link, "body")).unwrap();
        assert_eq!(
            body,
            "Name: Jane Doe\nEmail: jane@x.com\nCompany: Acme\nCountry: United States\n\nMessage:\nHello"
        );
    }

    #[test]
    fn reserved_characters_stay_inside_their_parameter() {
        let mut form = filled();
        form.message = "Price & terms? 100% =ok #1".to_string();
        let link = form.submit().unwrap();

        let body = urlencoding::decode(query_param(&link, "body")).unwrap();
        assert!(body.ends_with("Message:\nPrice & terms? 100% =ok #1"));
        assert!(!link.contains('#'));
    }

    #[test]
    fn body_without_country_says_not_specified() {
        let mut form = filled();
        form.country = None;
        assert!(form.body().contains("Country: Not specified\n"));
    }

    #[test]
    fn missing_field_error_names_the_field() {
        let err = ContactError::MissingField(ContactField::Company);
        assert_eq!(err.to_string(), "contact form field `company` is empty");
    }
}
