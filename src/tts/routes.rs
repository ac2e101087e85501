use crate::{audio, backend::TtsEngine, error::AppError, AppState};
use actix_web::{get, web, HttpResponse, Result};

const MAX_TEXT_LENGTH: usize = 200;

#[derive(Debug, Deserialize, Default)]
struct TtsGenerateQuery {
    text: String,
}

fn validate_text(text: &str) -> Result<(), HttpResponse> {
    if text.chars().count() > MAX_TEXT_LENGTH {
        return Err(
            HttpResponse::BadRequest().body("Text length must be less than 200 characters.")
        );
    }
    Ok(())
}

#[get("/tts/generate.wav")]
async fn generate_wav(
    data: web::Data<AppState>,
    query: web::Query<TtsGenerateQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    if let Err(e) = validate_text(&query.text) {
        return Ok(e);
    }

    let result = web::block(move || {
        let mut engine = data.engine.lock().map_err(|_| AppError::EngineUnavailable())?;
        let samples = engine.synthesize(&query.text)?;
        audio::encode_wav(&samples, engine.sample_rate())
    })
    .await;

    let buffer = match result {
        Ok(buffer) => buffer,
        Err(err) => {
            error!("{:#?}", err);
            return Ok(HttpResponse::InternalServerError().body("Internal server error"));
        }
    };

    Ok(HttpResponse::Ok().content_type("audio/wav").body(buffer))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_wav);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn accepts_text_up_to_the_limit() {
        let text = "क".repeat(MAX_TEXT_LENGTH);
        assert!(validate_text(&text).is_ok());
    }

    #[test]
    fn rejects_text_over_the_limit() {
        let text = "क".repeat(MAX_TEXT_LENGTH + 1);
        let response = validate_text(&text).unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
