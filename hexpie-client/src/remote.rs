//! Wire types and HTTP transport for the move-suggestion service

use hexpie_core::Player;
use serde::{Deserialize, Serialize};

/// Search budget the remote service should spend per request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Reply to `init`. When the local player goes second the service answers
/// with its opening move.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct InitReply {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "move")]
    pub first_move: Option<String>,
    pub current_player: Option<String>,
}

/// Reply to `submit_move`: the opponent's answer plus the service's view
/// of the result, all optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MoveReply {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "move")]
    pub opponent_move: Option<String>,
    #[serde(default)]
    pub game_over: Option<bool>,
    pub winner: Option<String>,
}

/// Reply to `request_advice`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AdviceReply {
    #[serde(rename = "move")]
    pub suggested_move: Option<String>,
    #[serde(default)]
    pub game_over: Option<bool>,
    pub winner: Option<String>,
}

/// Reply to `request_swap`: where the swapped stone landed on the remote
/// board, and the opponent's follow-up move.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SwapReply {
    #[serde(default)]
    pub success: bool,
    pub symmetric_move: Option<String>,
    #[serde(rename = "move")]
    pub opponent_move: Option<String>,
}

/// Map the service's winner codes onto local colors. The backend reports
/// "R"/"B"; be lenient about spelled-out variants.
pub(crate) fn parse_winner(code: &str) -> Option<Player> {
    match code.trim().to_ascii_lowercase().as_str() {
        "r" | "red" | "first" => Some(Player::First),
        "b" | "blue" | "second" => Some(Player::Second),
        _ => None,
    }
}

#[derive(Serialize)]
struct InitRequest {
    first: bool,
    difficulty: Difficulty,
}

#[derive(Serialize)]
struct MoveRequest<'a> {
    #[serde(rename = "move")]
    notation: &'a str,
    difficulty: Difficulty,
}

#[derive(Serialize)]
struct SwapRequest {
    difficulty: Difficulty,
}

/// HTTP client for the advice backend. Stateless apart from the base URL;
/// timeouts and retry policy are the caller's concern.
#[derive(Clone, Debug)]
pub struct RemoteClient {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Start a remote game. `first_player_is_local` tells the service
    /// whether to wait for our move or open itself.
    pub async fn init(
        &self,
        first_player_is_local: bool,
        difficulty: Difficulty,
    ) -> anyhow::Result<InitReply> {
        let reply = self
            .http
            .post(format!("{}/api/init", self.base_url))
            .json(&InitRequest {
                first: first_player_is_local,
                difficulty,
            })
            .send()
            .await?
            .json()
            .await?;
        Ok(reply)
    }

    /// Report a local move; the service answers with its own.
    pub async fn submit_move(
        &self,
        notation: &str,
        difficulty: Difficulty,
    ) -> anyhow::Result<MoveReply> {
        let reply = self
            .http
            .post(format!("{}/api/move", self.base_url))
            .json(&MoveRequest {
                notation,
                difficulty,
            })
            .send()
            .await?
            .json()
            .await?;
        Ok(reply)
    }

    /// Ask for a suggestion without committing a move.
    pub async fn request_advice(&self, difficulty: Difficulty) -> anyhow::Result<AdviceReply> {
        let reply = self
            .http
            .get(format!("{}/api/ai_move", self.base_url))
            .query(&[("difficulty", difficulty.as_str())])
            .send()
            .await?
            .json()
            .await?;
        Ok(reply)
    }

    /// Invoke the pie rule on the remote board.
    pub async fn request_swap(&self, difficulty: Difficulty) -> anyhow::Result<SwapReply> {
        let reply = self
            .http
            .post(format!("{}/api/swap", self.base_url))
            .json(&SwapRequest { difficulty })
            .send()
            .await?
            .json()
            .await?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_reply_with_all_fields() {
        let reply: MoveReply = serde_json::from_str(
            r#"{"success": true, "move": "f6", "game_over": true, "winner": "B"}"#,
        )
        .unwrap();
        assert!(reply.success);
        assert_eq!(reply.opponent_move.as_deref(), Some("f6"));
        assert_eq!(reply.game_over, Some(true));
        assert_eq!(reply.winner.as_deref(), Some("B"));
    }

    #[test]
    fn test_sparse_replies_deserialize() {
        // the service omits fields freely; everything must default
        let reply: MoveReply = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(reply.success);
        assert_eq!(reply.opponent_move, None);
        assert_eq!(reply.game_over, None);

        let init: InitReply = serde_json::from_str(r#"{}"#).unwrap();
        assert!(!init.success);
        assert_eq!(init.first_move, None);

        let swap: SwapReply =
            serde_json::from_str(r#"{"success": true, "symmetric_move": "d2"}"#).unwrap();
        assert_eq!(swap.symmetric_move.as_deref(), Some("d2"));
        assert_eq!(swap.opponent_move, None);
    }

    #[test]
    fn test_winner_codes() {
        assert_eq!(parse_winner("R"), Some(Player::First));
        assert_eq!(parse_winner("blue"), Some(Player::Second));
        assert_eq!(parse_winner(" b "), Some(Player::Second));
        assert_eq!(parse_winner("draw"), None);
        assert_eq!(parse_winner(""), None);
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), r#""hard""#);
        assert_eq!(
            serde_json::from_str::<Difficulty>(r#""easy""#).unwrap(),
            Difficulty::Easy
        );
    }
}
