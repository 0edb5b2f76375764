use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{spotify, types::AuthAttempt};

pub async fn auth(shared_state: Arc<Mutex<Option<AuthAttempt>>>) {
    spotify::auth::login(shared_state).await;
}
