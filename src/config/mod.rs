mod errors;
mod settings;
#[cfg(test)]
mod tests;

pub use errors::ConfigError;
pub use settings::Settings;

/// Optional dotenv file read from the working directory. Real environment variables win over it.
pub const ENV_FILE: &str = ".env";

pub const DEFAULT_API_URL: &str = "https://api.creditkarma.com/graphql";

pub const DEFAULT_HELP_MESSAGE: &str =
    "Log in to Credit Karma in a browser, copy a fresh bearer token from any authenticated request, and set CREDITKARMA_TOKEN";

/// GraphQL document sent with every page request. Only the variables change between pages.
pub const TRANSACTIONS_QUERY: &str = include_str!("transactions_query.graphql");
