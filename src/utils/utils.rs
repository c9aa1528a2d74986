// Start of file: src/utils/utils.rs

use axum::{
    body::Body,
    http::{header::HOST, Request},
};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};

/*
    * Convert any `Serialize` type into a two-space-indented JSON string.
*/
pub fn to_two_space_indented_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let mut writer: Vec<u8> = Vec::new();

    let formatter: PrettyFormatter<'_> = PrettyFormatter::with_indent(b"  ");

    let mut ser: Serializer<&mut Vec<u8>, PrettyFormatter<'_>> =
        Serializer::with_formatter(&mut writer, formatter);

    value.serialize(&mut ser)?;

    Ok(String::from_utf8(writer)?)
}

/*
    * Rebuilds the full URL of a request (scheme, host, path and query).
    * Falls back to the bare URI when the Host header is missing.
*/
pub fn full_url(req: &Request<Body>) -> String {
    let uri = req.uri();

    if uri.scheme().is_some() {
        return uri.to_string();
    }

    let path_and_query: &str = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    match req.headers().get(HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{host}{path_and_query}"),
        None => path_and_query.to_string(),
    }
}


// End of file: src/utils/utils.rs
