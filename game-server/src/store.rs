use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tokio::sync::RwLock;
use tracing::info;

use game_core::{render_guess, session};
use game_types::{
    Country, CountryId, Game, GameError, GameId, GameRead, GameStatus, Guess, StatsSummary,
    UserClient, UserClientId,
};

/// All guessable countries, loaded once at startup from a JSON file and
/// immutable afterwards.
pub struct CountryIndex {
    countries: HashMap<CountryId, Country>,
}

impl CountryIndex {
    pub fn from_countries(countries: Vec<Country>) -> Result<Self> {
        if countries.is_empty() {
            return Err(anyhow!("country list is empty, no answers to pick from"));
        }
        let countries = countries.into_iter().map(|c| (c.id, c)).collect();
        Ok(Self { countries })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read countries file {}", path.display()))?;
        let countries: Vec<Country> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse countries file {}", path.display()))?;
        let index = Self::from_countries(countries)?;
        info!("Loaded {} countries from {}", index.len(), path.display());
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn get(&self, id: CountryId) -> Option<&Country> {
        self.countries.get(&id)
    }

    /// All countries, sorted by display name for stable listings.
    pub fn list(&self) -> Vec<&Country> {
        let mut all: Vec<&Country> = self.countries.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Pick an answer country. Simple time-hash selection; the construction
    /// guarantees at least one country exists.
    pub fn random(&self) -> &Country {
        use std::hash::{Hash, Hasher};

        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        std::time::SystemTime::now().hash(&mut hasher);

        let candidates: Vec<&Country> = self.countries.values().collect();
        candidates[(hasher.finish() as usize) % candidates.len()]
    }
}

/// In-memory record store for clients, games, and guesses.
///
/// The write lock on `games` serializes read-modify-write per game, which
/// is what keeps guess indices sequential and the guess limit intact under
/// concurrent submissions. Durability is explicitly not this store's job.
pub struct GameStore {
    countries: Arc<CountryIndex>,
    clients: RwLock<HashMap<UserClientId, UserClient>>,
    games: RwLock<HashMap<GameId, Game>>,
}

impl GameStore {
    pub fn new(countries: Arc<CountryIndex>) -> Self {
        Self {
            countries,
            clients: RwLock::new(HashMap::new()),
            games: RwLock::new(HashMap::new()),
        }
    }

    pub fn countries(&self) -> &CountryIndex {
        &self.countries
    }

    pub async fn create_client(&self) -> UserClient {
        let client = UserClient::new();
        self.clients.write().await.insert(client.uuid, client.clone());
        client
    }

    pub async fn find_client(&self, uuid: UserClientId) -> Option<UserClient> {
        self.clients.read().await.get(&uuid).cloned()
    }

    /// Start a new game for a client, abandoning any game they still have
    /// in progress first (at most one active game per client).
    pub async fn create_game(&self, client_uuid: UserClientId) -> Result<Game, GameError> {
        if self.find_client(client_uuid).await.is_none() {
            return Err(GameError::UserClientNotFound { uuid: client_uuid });
        }

        let mut games = self.games.write().await;

        for game in games
            .values_mut()
            .filter(|g| g.user_client_id == client_uuid && g.status == GameStatus::InProgress)
        {
            session::abandon(game)?;
        }

        let answer = self.countries.random();
        let game = Game::new(client_uuid, answer.id);
        games.insert(game.id, game.clone());
        info!(game_id = %game.id, client = %client_uuid, "game created");
        Ok(game)
    }

    pub async fn find_game(&self, game_id: GameId) -> Option<Game> {
        self.games.read().await.get(&game_id).cloned()
    }

    /// Resolve both country references and run the session engine under the
    /// write lock, so concurrent submissions to one game are serialized.
    pub async fn submit_guess(
        &self,
        game_id: GameId,
        guessed_country_id: CountryId,
    ) -> Result<(Game, Guess), GameError> {
        let guessed = self
            .countries
            .get(guessed_country_id)
            .ok_or(GameError::InvalidCountryReference {
                country_id: guessed_country_id,
            })?;

        let mut games = self.games.write().await;
        let game = games
            .get_mut(&game_id)
            .ok_or(GameError::GameNotFound { game_id })?;

        let answer = self
            .countries
            .get(game.answer_country_id)
            .ok_or(GameError::InvalidCountryReference {
                country_id: game.answer_country_id,
            })?;

        let guess = session::submit_guess(game, guessed, answer)?;
        Ok((game.clone(), guess))
    }

    pub async fn games_for_client(
        &self,
        client_uuid: UserClientId,
    ) -> Result<Vec<Game>, GameError> {
        if self.find_client(client_uuid).await.is_none() {
            return Err(GameError::UserClientNotFound { uuid: client_uuid });
        }
        let games = self.games.read().await;
        Ok(games
            .values()
            .filter(|g| g.user_client_id == client_uuid)
            .cloned()
            .collect())
    }

    pub async fn stats_for_client(
        &self,
        client_uuid: UserClientId,
    ) -> Result<StatsSummary, GameError> {
        let games = self.games_for_client(client_uuid).await?;
        Ok(game_core::compute_stats(&games))
    }

    /// Assemble the API view of a game, recomputing every guess's derived
    /// fields from the stored country references.
    pub fn render_game(&self, game: &Game) -> Result<GameRead, GameError> {
        let answer = self
            .countries
            .get(game.answer_country_id)
            .ok_or(GameError::InvalidCountryReference {
                country_id: game.answer_country_id,
            })?;

        let mut guesses = Vec::with_capacity(game.guesses.len());
        for guess in &game.guesses {
            let guessed = self
                .countries
                .get(guess.guessed_country_id)
                .ok_or(GameError::InvalidCountryReference {
                    country_id: guess.guessed_country_id,
                })?;
            guesses.push(render_guess(guess, guessed, answer));
        }

        Ok(GameRead {
            id: game.id,
            user_client_id: game.user_client_id,
            answer_country_id: game.answer_country_id,
            status: game.status,
            answer_country: answer.clone(),
            guesses,
            created_at: game.created_at,
        })
    }
}
