//! Command execution pipeline
//!
//! Loadout requests flow through every stage:
//! planet name -> WorldStateResolver -> CatalogStore::eligible -> LoadoutComposer -> Presenter

use rand::Rng;
use std::fmt;

use crate::catalog::CatalogStore;
use crate::command::parser::{parse_command, Command};
use crate::core::error::{LoadoutError, Result};
use crate::loadout::{Loadout, LoadoutComposer};
use crate::present::{Briefing, Embed, PresentationMode, Presenter};
use crate::warstatus::{WarStatusSource, WorldState, WorldStateResolver};

pub const HELP_TEXT: &str = "To generate a loadout, type '!loadout' or '!l', followed by the name of a planet\n\n\
Example: !l shelt\n\n\
If the planet name consists of more than one word, put it in quotation marks\n\n\
Example: !l \"bore rock\"\n\n\
Use the suffix \"short\" for a more concise formatting of the loadout";

/// What gets sent back to the player
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Cards(Vec<Embed>),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Text(text) => writeln!(f, "{}", text),
            Reply::Cards(cards) => {
                for card in cards {
                    writeln!(f, "{}", card)?;
                }
                Ok(())
            }
        }
    }
}

/// Executes parsed commands against the loaded catalogs and war status
pub struct CommandExecutor<S> {
    catalogs: CatalogStore,
    resolver: WorldStateResolver<S>,
    composer: LoadoutComposer,
    presenter: Presenter,
}

impl<S: WarStatusSource> CommandExecutor<S> {
    pub fn new(
        catalogs: CatalogStore,
        resolver: WorldStateResolver<S>,
        composer: LoadoutComposer,
        presenter: Presenter,
    ) -> Self {
        Self {
            catalogs,
            resolver,
            composer,
            presenter,
        }
    }

    /// Parse and run one line of input. Every failure becomes a text reply.
    pub async fn handle(&self, input: &str, user: &str, rng: &mut impl Rng) -> Reply {
        let result = match parse_command(input) {
            Ok(command) => self.execute(command, user, rng).await,
            Err(e) => Err(e),
        };

        result.unwrap_or_else(|e| {
            tracing::debug!("Command failed: {}", e);
            Reply::Text(user_message(&e))
        })
    }

    /// Run a parsed command
    pub async fn execute(&self, command: Command, user: &str, rng: &mut impl Rng) -> Result<Reply> {
        match command {
            Command::Hello => Ok(Reply::Text(format!("griaß di gott, {}!", user))),
            Command::Help => Ok(Reply::Text(HELP_TEXT.to_string())),
            Command::Loadout { planet, mode } => {
                let (state, loadout) = self.generate(&planet, rng).await?;
                Ok(Reply::Cards(self.render(mode, &state, &loadout, user)))
            }
        }
    }

    /// Resolve the planet, filter the catalogs and compose a loadout
    pub async fn generate(&self, planet: &str, rng: &mut impl Rng) -> Result<(WorldState, Loadout)> {
        let state = self.resolver.resolve(planet).await?;
        let catalog = self.catalogs.eligible(Some(state.faction));
        let loadout = self.composer.compose(&catalog, state.hazards, rng)?;
        Ok((state, loadout))
    }

    fn render(&self, mode: PresentationMode, state: &WorldState, loadout: &Loadout, user: &str) -> Vec<Embed> {
        let briefing = Briefing {
            location: &state.location,
            faction: state.faction,
            user,
        };
        self.presenter.render(mode, loadout, &briefing)
    }
}

/// Text shown to the player for a failed command
pub fn user_message(error: &LoadoutError) -> String {
    match error {
        LoadoutError::UnknownCommand(name) if name.is_empty() => {
            "Type '!help' to see what I can do".to_string()
        }
        LoadoutError::UnknownCommand(name) => {
            format!("Unknown command '{}'. Type '!help' to see what I can do", name)
        }
        LoadoutError::MissingArgument(what) => {
            format!("Missing {}. Example: !l shelt", what)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, Category};
    use crate::warstatus::{Campaign, PlanetTable, SnapshotSource};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn executor() -> CommandExecutor<SnapshotSource> {
        let source = |json: &str| CatalogSource::parse_json(json).unwrap();
        let catalogs = CatalogStore::from_sources(
            source(r#"{"0": {"name": "AR-23 Liberator", "type": 0, "fire_mode": [3], "traits": [13, 14]}}"#),
            source(r#"{"0": {"name": "GP-31 Grenade Pistol", "type": 1, "fire_mode": [1], "traits": [13, 14, 18]}}"#),
            source(r#"{"0": {"name": "G-23 Stun", "traits": [14]}}"#),
            source(
                r#"{
                    "Eagle Airstrike": {"traits": [13, 14, 18]},
                    "Orbital Gas Strike": {"traits": [13]},
                    "Machine Gun Sentry": {"traits": [13, 14]},
                    "Shield Generator Relay": {"traits": [13, 14]},
                    "B-1 Supply Pack": {"traits": [13, 14, 16]}
                }"#,
            ),
        );
        let campaigns = vec![
            Campaign {
                name: "Shelt".into(),
                faction: Some("Terminids".into()),
                planet_index: Some(126),
            },
            Campaign {
                name: "Bore Rock".into(),
                faction: Some("Automatons".into()),
                planet_index: Some(163),
            },
        ];
        let resolver = WorldStateResolver::new(SnapshotSource::new(campaigns, PlanetTable::new()));
        CommandExecutor::new(catalogs, resolver, LoadoutComposer::default(), Presenter::default())
    }

    #[tokio::test]
    async fn test_hello_and_help() {
        let executor = executor();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            executor.handle("!hi", "Cadet", &mut rng).await,
            Reply::Text("griaß di gott, Cadet!".into())
        );
        assert_eq!(
            executor.handle("!help", "Cadet", &mut rng).await,
            Reply::Text(HELP_TEXT.into())
        );
    }

    #[tokio::test]
    async fn test_loadout_short_renders_one_card() {
        let executor = executor();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let Reply::Cards(cards) = executor.handle(r#"!l "bore rock" short"#, "Cadet", &mut rng).await
        else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(
            cards[0].description.as_deref(),
            Some("The finest selection of tools to destroy the Automatons on Bore Rock")
        );
        assert_eq!(cards[0].fields.len(), Loadout::SIZE);
        assert_eq!(cards[0].fields[0].value, "AR-23 Liberator");
    }

    #[tokio::test]
    async fn test_unknown_planet_message() {
        let executor = executor();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            executor.handle("!l Nowhereland", "Cadet", &mut rng).await,
            Reply::Text("Planet 'Nowhereland' not found or planet not an active warzone".into())
        );
    }

    #[tokio::test]
    async fn test_empty_grenade_pool_is_category_exhausted() {
        let executor = executor();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // The only grenade is Automaton-only
        let result = executor.generate("Shelt", &mut rng).await;
        assert!(matches!(
            result,
            Err(LoadoutError::CategoryExhausted(Category::Grenade))
        ));
    }

    #[test]
    fn test_user_message_for_parse_errors() {
        assert_eq!(
            user_message(&LoadoutError::MissingArgument("planet name")),
            "Missing planet name. Example: !l shelt"
        );
        assert!(user_message(&LoadoutError::UnknownCommand("dance".into())).contains("'dance'"));
    }
}
