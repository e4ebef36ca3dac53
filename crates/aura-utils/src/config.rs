//! Configuration utilities

/// Load a `.env` file from the working directory if one exists.
///
/// Returns whether a file was loaded. Variables already set in the process
/// environment win over the file.
pub fn load_env() -> bool {
    dotenvy::dotenv().is_ok()
}

/// Read an environment variable, treating blank values as unset
pub fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// First non-blank variable among `names`, in order
pub fn env_var_any(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| env_var(name))
}
