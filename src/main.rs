use env_logger::Env;
use failure::Error;
use log::error;

mod category;
mod config;
mod format;
mod hunt;
mod reply;
mod site;
mod skill;
mod speech;
#[cfg(test)]
mod test_server;

fn main() {
    env_logger::from_env(Env::default().default_filter_or("product_hunt_skill=info")).init();

    if let Err(e) = run() {
        log_error(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let matches = config::app().get_matches();
    let config = config::Config::from_matches(&matches)?;
    site::run(config)
}

/// Logs an error along with every cause underneath it.
pub fn log_error(e: &Error) {
    let mut message = e.to_string();
    for cause in e.iter_causes() {
        message.push_str(&format!("\n  caused by: {}", cause));
    }
    error!("{}", message);
}
