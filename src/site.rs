use crate::{config::Config, hunt::ProductHunt, skill::process_request};
use alexa_sdk::Request as AlexaRequest;
use failure::{format_err, Error};
use log::{debug, info, warn};
use rouille::{router, Request, Response, Server};
use std::time::Instant;

const VERSION_HEADER: &str = env!("CARGO_PKG_VERSION");

fn index(request: &Request, hunt: &ProductHunt) -> Response {
    info!("Request received...");
    let alexa_request: AlexaRequest = match rouille::input::json_input(request) {
        Ok(alexa_request) => alexa_request,
        Err(e) => {
            warn!("Could not parse request envelope: {}", e);
            return Response::text("Expected an Alexa request envelope").with_status_code(400);
        }
    };
    debug!("{:?}", alexa_request);

    let reply = process_request(&alexa_request, hunt);
    info!("Sending back response...");
    debug!("{:?}", reply);

    Response::json(&reply)
}

fn route(request: &Request, hunt: &ProductHunt) -> Response {
    let response = router!(request,
        (POST) (/) => { index(request, hunt) },
        _ => Response::empty_404()
    );
    response.with_additional_header("X-Version", VERSION_HEADER)
}

pub fn run(config: Config) -> Result<(), Error> {
    let hunt = ProductHunt::new(&config.api_url, config.credentials.clone(), config.timeout);
    info!("Starting server on {}", config.address);
    info!("Reading posts from {}", config.api_url);

    let server = Server::new(&config.address, move |request| {
        let start = Instant::now();
        let response = route(request, &hunt);
        info!(
            "{} {} -> {} ({:?})",
            request.method(),
            request.raw_url(),
            response.status_code,
            start.elapsed()
        );
        response
    })
    .map_err(|e| format_err!("Could not bind {}: {}", config.address, e))?;

    server.run();
    Ok(())
}
