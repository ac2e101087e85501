#![warn(clippy::all)]

#[macro_use]
extern crate log;

use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Result;
use dotenv::dotenv;
use listenfd::ListenFd;
use std::env;
use std::sync::Mutex;

use showcase_api::backend::{vits::Vits, TtsEngine};
use showcase_api::{config, dashboard, tts, AppState};

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().body("it works!")
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let mut listenfd = ListenFd::from_env();

    let config = config::Config::from_config()?;

    info!("Loading synthesizer model");
    let engine = Vits::from_config(config.synthesizer.clone())?;
    let state = web::Data::new(AppState {
        engine: Mutex::new(engine),
    });

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .data(config.clone())
            .wrap(Logger::default())
            .service(index)
            .configure(tts::init)
            .configure(dashboard::init)
    });

    server = match listenfd.take_tcp_listener(0)? {
        Some(listener) => server.listen(listener)?,
        None => {
            let host = env::var("HOST").unwrap_or("0.0.0.0".to_string());
            let port = env::var("PORT").unwrap_or("8080".to_string());
            server.bind(format!("{}:{}", host, port))?
        }
    };

    info!("Starting server");
    server.run().await?;

    Ok(())
}
