use crate::{
    category::Category,
    format,
    hunt::{HuntError, ProductHunt},
    log_error,
    reply::Reply,
    speech,
};
use alexa_sdk::{
    request::{IntentType, ReqType},
    Request,
};
use failure::{Error, Fail};
use log::info;

const CATEGORY_INTENT: &str = "CategoryIntent";
const CATEGORY_SLOT: &str = "category";

/// One conversational turn, boiled down to what the skill needs from it.
#[derive(Debug, Clone, PartialEq)]
enum Turn {
    Launch,
    Category(Option<String>),
    Help,
    Yes,
    Goodbye,
    Fallback,
    SessionEnded,
    Unhandled(String),
}

impl<'a> From<&'a Request> for Turn {
    fn from(request: &'a Request) -> Turn {
        match request.reqtype() {
            ReqType::LaunchRequest => Turn::Launch,
            ReqType::SessionEndedRequest => Turn::SessionEnded,
            ReqType::IntentRequest => match request.intent() {
                IntentType::User(ref s) if s == CATEGORY_INTENT => {
                    Turn::Category(request.slot_value(CATEGORY_SLOT))
                }
                IntentType::User(s) => Turn::Unhandled(s),
                IntentType::Help => Turn::Help,
                IntentType::Yes => Turn::Yes,
                IntentType::Cancel
                | IntentType::Stop
                | IntentType::No
                | IntentType::NavigateHome => Turn::Goodbye,
                IntentType::Fallback => Turn::Fallback,
                other => Turn::Unhandled(format!("{:?}", other)),
            },
            other => Turn::Unhandled(format!("{:?}", other)),
        }
    }
}

pub fn process_request(request: &Request, hunt: &ProductHunt) -> Reply {
    let turn = Turn::from(request);
    info!("Turn: {:?}", turn);

    respond(turn, hunt)
}

fn respond(turn: Turn, hunt: &ProductHunt) -> Reply {
    let reply_result = match turn {
        Turn::Category(slot) => category(slot, hunt),
        Turn::Launch => Ok(open_hello()),
        Turn::Help => Ok(open_help()),
        Turn::Yes => Ok(open_yes()),
        Turn::Goodbye => Ok(end_goodbye()),
        Turn::Fallback => Ok(open_fallback()),
        Turn::SessionEnded => Ok(end_silent()),
        Turn::Unhandled(intent) => Err(Error::from(SkillError::Unhandled { intent })),
    };

    match reply_result {
        Err(e) => {
            log_error(&e);
            match e.downcast::<HuntError>() {
                Ok(_) => end_unavailable(),
                Err(_) => open_hmm(),
            }
        }
        Ok(reply) => reply,
    }
}

fn category(slot_value: Option<String>, hunt: &ProductHunt) -> Result<Reply, Error> {
    info!("Slot Value: {:?}", slot_value);

    let category = match slot_value.as_ref().and_then(|s| Category::resolve(s)) {
        Some(category) => category,
        None => return Ok(open_unknown_category()),
    };
    info!("Resolved category: {}", category);

    let posts = hunt.top_posts(category)?;

    let fragments: String = posts.iter().map(format::speech).collect();
    let card_lines: Vec<String> = posts.iter().map(format::card_line).collect();

    Ok(Reply::new(false)
        .speech(speech::hunts(category, &fragments))
        .reprompt(speech::another_category())
        .card(speech::hunts_title(category), card_lines.join("\n")))
}

fn open_hello() -> Reply {
    Reply::new(false)
        .speech(speech::hello())
        .reprompt(speech::which_category())
        .card(speech::CARD_TITLE, speech::hello_card())
}

fn open_help() -> Reply {
    Reply::new(false)
        .speech(speech::help())
        .reprompt(speech::which_category())
}

fn open_yes() -> Reply {
    Reply::new(false)
        .speech(speech::yes())
        .reprompt(speech::which_category())
}

fn open_fallback() -> Reply {
    Reply::new(false)
        .speech(speech::fallback())
        .reprompt(speech::which_category())
}

fn open_unknown_category() -> Reply {
    Reply::new(false)
        .speech(speech::unknown_category())
        .reprompt(speech::which_category())
}

fn open_hmm() -> Reply {
    Reply::new(false)
        .speech(speech::hmm())
        .reprompt(speech::hmm())
}

fn end_silent() -> Reply {
    Reply::end()
}

fn end_goodbye() -> Reply {
    Reply::new(true).speech(speech::goodbye())
}

fn end_unavailable() -> Reply {
    Reply::new(true).speech(speech::unavailable())
}

#[derive(Fail, Debug)]
enum SkillError {
    #[fail(display = "No handler for intent: {}", intent)]
    Unhandled { intent: String },
}
