//! Shared constants for CareerTech.

/// CareerTech version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default database file name, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "careertech.db";

/// Default number of read connections.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// Maximum number of read connections.
pub const MAX_READ_POOL_SIZE: usize = 8;

/// Maximum length of a feature key in bytes.
pub const MAX_FEATURE_KEY_LEN: usize = 64;

/// Default hosted chat-completion endpoint (OpenAI-compatible).
pub const DEFAULT_CHAT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default chat model.
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.1-8b-instant";

/// Default sampling temperature.
pub const DEFAULT_CHAT_TEMPERATURE: f64 = 0.7;

/// Default HTTP timeout for a completion request, in seconds.
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 30;

/// Reply substituted for the metered action once the free chat is used up.
pub const DEFAULT_REFUSAL_MESSAGE: &str =
    "Your free AI mentor session has ended. Upgrade to keep chatting with the mentor.";

/// Reply used when no completion backend is configured.
pub const BACKEND_NOT_CONFIGURED_MESSAGE: &str = "AI backend (Groq) is not configured yet.\n\
Once configured with a GROQ_API_KEY, this will give you a live roadmap.";
