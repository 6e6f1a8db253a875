//! What the skill says back for one turn, and how it goes over the wire.
//!
//! Speech and reprompts are SSML, cards are plain text. Serializing a `Reply`
//! yields the response envelope Alexa expects.
use serde::{Serialize, Serializer};

const VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reply {
    pub speech: Option<String>,
    pub reprompt: Option<String>,
    pub card: Option<Card>,
    pub end_session: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub content: String,
}

impl Reply {
    pub fn new(end_session: bool) -> Reply {
        Reply {
            end_session,
            ..Reply::default()
        }
    }

    /// Ends the session without saying anything.
    pub fn end() -> Reply {
        Reply::new(true)
    }

    pub fn speech<S: Into<String>>(mut self, ssml: S) -> Self {
        self.speech = Some(ssml.into());
        self
    }

    pub fn reprompt<S: Into<String>>(mut self, ssml: S) -> Self {
        self.reprompt = Some(ssml.into());
        self
    }

    pub fn card<T: Into<String>, C: Into<String>>(mut self, title: T, content: C) -> Self {
        self.card = Some(Card {
            title: title.into(),
            content: content.into(),
        });
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a> {
    version: &'static str,
    response: Body<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Body<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    card: Option<SimpleCard<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reprompt: Option<Reprompt>,
    should_end_session: bool,
}

#[derive(Serialize)]
struct OutputSpeech {
    #[serde(rename = "type")]
    kind: &'static str,
    ssml: String,
}

impl OutputSpeech {
    fn ssml(text: &str) -> OutputSpeech {
        OutputSpeech {
            kind: "SSML",
            ssml: format!("<speak>{}</speak>", text),
        }
    }
}

#[derive(Serialize)]
struct SimpleCard<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    title: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Reprompt {
    output_speech: OutputSpeech,
}

impl Serialize for Reply {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let envelope = Envelope {
            version: VERSION,
            response: Body {
                output_speech: self.speech.as_ref().map(|s| OutputSpeech::ssml(s)),
                card: self.card.as_ref().map(|c| SimpleCard {
                    kind: "Simple",
                    title: &c.title,
                    content: &c.content,
                }),
                reprompt: self.reprompt.as_ref().map(|s| Reprompt {
                    output_speech: OutputSpeech::ssml(s),
                }),
                should_end_session: self.end_session,
            },
        };
        envelope.serialize(serializer)
    }
}
