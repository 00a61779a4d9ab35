use std::sync::Arc;

use warp::Filter;
use warp::http::StatusCode;

use game_types::{
    CountryId, GameCreate, GameError, GameId, GuessCreate, StatsRead, UserClientId, UserClientRead,
};

use crate::store::GameStore;

pub mod config;
pub mod store;

pub fn create_routes(
    store: Arc<GameStore>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let store_filter = warp::any().map({
        let store = store.clone();
        move || store.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    let list_countries = warp::path!("countries")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(handle_list_countries);

    let read_country = warp::path!("countries" / CountryId)
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(handle_read_country);

    let create_user_client = warp::path!("user_clients")
        .and(warp::post())
        .and(store_filter.clone())
        .and_then(handle_create_user_client);

    let read_user_client = warp::path!("user_clients" / UserClientId)
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(handle_read_user_client);

    let read_user_client_stats = warp::path!("user_clients" / UserClientId / "stats")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(handle_read_user_client_stats);

    let create_game = warp::path!("games")
        .and(warp::post())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(handle_create_game);

    let read_game = warp::path!("games" / GameId)
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(handle_read_game);

    let create_guess = warp::path!("games" / GameId / "guesses")
        .and(warp::post())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(handle_create_guess);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(list_countries)
        .or(read_country)
        .or(create_user_client)
        .or(read_user_client_stats)
        .or(read_user_client)
        .or(create_game)
        .or(create_guess)
        .or(read_game)
        .with(cors)
        .with(warp::log("globe_arena"))
}

/// Map a domain error onto an HTTP status: missing or unresolvable records
/// are 404, rejected transitions are 409, everything else is the caller's
/// request being unprocessable.
fn game_error_reply(err: GameError) -> warp::reply::WithStatus<warp::reply::Json> {
    let status = match &err {
        GameError::GameNotFound { .. }
        | GameError::UserClientNotFound { .. }
        | GameError::InvalidCountryReference { .. } => StatusCode::NOT_FOUND,
        GameError::GameNotActive { .. } | GameError::GuessLimitReached { .. } => {
            StatusCode::CONFLICT
        }
        GameError::NoGamesPlayed | GameError::InvalidCoordinates { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };

    warp::reply::with_status(
        warp::reply::json(&serde_json::json!({ "error": err.to_string() })),
        status,
    )
}

async fn handle_list_countries(
    store: Arc<GameStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::with_status(
        warp::reply::json(&store.countries().list()),
        StatusCode::OK,
    ))
}

async fn handle_read_country(
    country_id: CountryId,
    store: Arc<GameStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match store.countries().get(country_id) {
        Some(country) => Ok(warp::reply::with_status(
            warp::reply::json(country),
            StatusCode::OK,
        )),
        None => Ok(game_error_reply(GameError::InvalidCountryReference {
            country_id,
        })),
    }
}

async fn handle_create_user_client(
    store: Arc<GameStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let client = store.create_client().await;
    Ok(warp::reply::with_status(
        warp::reply::json(&UserClientRead {
            uuid: client.uuid,
            created_at: client.created_at,
        }),
        StatusCode::CREATED,
    ))
}

async fn handle_read_user_client(
    uuid: UserClientId,
    store: Arc<GameStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match store.find_client(uuid).await {
        Some(client) => Ok(warp::reply::with_status(
            warp::reply::json(&UserClientRead {
                uuid: client.uuid,
                created_at: client.created_at,
            }),
            StatusCode::OK,
        )),
        None => Ok(game_error_reply(GameError::UserClientNotFound { uuid })),
    }
}

async fn handle_read_user_client_stats(
    uuid: UserClientId,
    store: Arc<GameStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match store.stats_for_client(uuid).await {
        Ok(summary) => Ok(warp::reply::with_status(
            warp::reply::json(&StatsRead::from(summary)),
            StatusCode::OK,
        )),
        Err(err) => Ok(game_error_reply(err)),
    }
}

async fn handle_create_game(
    body: GameCreate,
    store: Arc<GameStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match store.create_game(body.user_client_uuid).await {
        Ok(game) => match store.render_game(&game) {
            Ok(read) => Ok(warp::reply::with_status(
                warp::reply::json(&read),
                StatusCode::CREATED,
            )),
            Err(err) => Ok(game_error_reply(err)),
        },
        Err(err) => Ok(game_error_reply(err)),
    }
}

async fn handle_read_game(
    game_id: GameId,
    store: Arc<GameStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match store.find_game(game_id).await {
        Some(game) => match store.render_game(&game) {
            Ok(read) => Ok(warp::reply::with_status(
                warp::reply::json(&read),
                StatusCode::OK,
            )),
            Err(err) => Ok(game_error_reply(err)),
        },
        None => Ok(game_error_reply(GameError::GameNotFound { game_id })),
    }
}

async fn handle_create_guess(
    game_id: GameId,
    body: GuessCreate,
    store: Arc<GameStore>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match store.submit_guess(game_id, body.guessed_country_id).await {
        Ok((game, guess)) => {
            // Re-render through the store so the response carries the same
            // recomputed fields a later read would.
            let answer = match store.countries().get(game.answer_country_id) {
                Some(answer) => answer,
                None => {
                    return Ok(game_error_reply(GameError::InvalidCountryReference {
                        country_id: game.answer_country_id,
                    }));
                }
            };
            let guessed = match store.countries().get(guess.guessed_country_id) {
                Some(guessed) => guessed,
                None => {
                    return Ok(game_error_reply(GameError::InvalidCountryReference {
                        country_id: guess.guessed_country_id,
                    }));
                }
            };
            let item = game_core::render_guess(&guess, guessed, answer);
            Ok(warp::reply::with_status(
                warp::reply::json(&item),
                StatusCode::CREATED,
            ))
        }
        Err(err) => Ok(game_error_reply(err)),
    }
}
