mod session;
mod token;

pub use session::AppState;
pub use session::Session;
pub use token::TokenError;
pub use token::TokenStore;
