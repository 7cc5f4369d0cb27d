mod session;

pub use session::SESSION_STORAGE_KEY;
pub use session::SessionManager;
