use chrono::Utc;

use crate::connection::{IssuedToken, fabricate_placeholder_token};
use crate::state::{AppEvent, RequestKind};

use super::{AppCommands, SharedState};

impl AppCommands {
    /// Request a signed token for the dialog's payload.
    ///
    /// When the backend cannot issue one, an unsigned placeholder is stored instead so the
    /// connection form still carries a token.
    pub async fn generate_token(state: SharedState) -> IssuedToken {
        let payload = state.lock().token_payload.clone();
        let (ticket, client, _) = Self::begin(&state, RequestKind::Token);

        let token = match client.generate_token(&payload).await {
            Ok(token) => IssuedToken::Issued(token),
            Err(e) => {
                log::warn!("Token endpoint failed, using a placeholder token: {}", e);
                IssuedToken::Fabricated(fabricate_placeholder_token(&payload, Utc::now()))
            }
        };
        Self::apply(&state, AppEvent::TokenGenerated { ticket, token: token.clone() });
        token
    }
}
