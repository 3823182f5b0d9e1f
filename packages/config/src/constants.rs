// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Tokenkeep

// Token Persistence
pub const TOKENKEEP_PERSIST: &str = "TOKENKEEP_PERSIST";
pub const TOKENKEEP_AUTH_FILE: &str = "TOKENKEEP_AUTH_FILE";

// System Environment Variables
pub const HOME: &str = "HOME";

/// Directory under the home directory holding Tokenkeep state
pub const TOKENKEEP_DIR_NAME: &str = ".tokenkeep";

/// File name of the persisted token inside the Tokenkeep directory
pub const AUTH_FILE_NAME: &str = "auth.toml";
