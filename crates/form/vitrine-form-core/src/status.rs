use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// Colour family of the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonTone {
    Accent,
    Success,
    Error,
}

impl FormStatus {
    /// Submit button caption.
    pub fn label(self) -> &'static str {
        match self {
            FormStatus::Idle => "Envoyer",
            FormStatus::Sending => "Envoi...",
            FormStatus::Success => "Message envoyé !",
            FormStatus::Error => "Erreur d'envoi",
        }
    }

    pub fn tone(self) -> ButtonTone {
        match self {
            FormStatus::Success => ButtonTone::Success,
            FormStatus::Error => ButtonTone::Error,
            FormStatus::Idle | FormStatus::Sending => ButtonTone::Accent,
        }
    }

    pub fn submit_disabled(self) -> bool {
        self == FormStatus::Sending
    }
}
