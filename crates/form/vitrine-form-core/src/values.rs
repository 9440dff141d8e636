//! Field values of the contact form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Display order in the form, which is also the validation order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nom complet",
            Field::Email => "Email",
            Field::Subject => "Sujet",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Jean Dupont",
            Field::Email => "jean@example.com",
            Field::Subject => "Demande de projet",
            Field::Message => "Bonjour, je souhaite discuter d'un projet...",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First required field that is empty, in form order.
    pub fn first_missing(&self, trim: bool) -> Option<Field> {
        Field::ALL.into_iter().find(|&f| {
            let v = self.get(f);
            if trim {
                v.trim().is_empty()
            } else {
                v.is_empty()
            }
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&f| self.get(f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_missing_follows_form_order() {
        let mut v = FormValues::new("Jean", "", "", "Hello");
        assert_eq!(v.first_missing(true), Some(Field::Email));
        v.set(Field::Email, "jean@example.com");
        assert_eq!(v.first_missing(true), Some(Field::Subject));
        v.set(Field::Subject, "   ");
        assert_eq!(v.first_missing(true), Some(Field::Subject));
        assert_eq!(v.first_missing(false), None);
    }

    #[test]
    fn field_names_round_trip() {
        for f in Field::ALL {
            assert_eq!(f.as_str().parse::<Field>().unwrap(), f);
        }
        assert_eq!(
            "phone".parse::<Field>(),
            Err(FormError::UnknownField("phone".into()))
        );
    }
}
