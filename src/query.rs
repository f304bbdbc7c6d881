use crate::params::Params;

/// Anything the [`Client`](crate::Client) can turn into a request URL.
///
/// `params` must be a pure function of the builder's fields: two builders
/// holding the same values produce the same parameter set, however they were
/// chained together.
pub trait Query {
    /// Resource path relative to the base URL, e.g. `videos/857.json`.
    fn endpoint(&self) -> String;

    /// Query parameters, excluding the access token.
    fn params(&self) -> Params;
}
