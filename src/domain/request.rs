//! Request reader — what the dashboard's own caller looks like.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::extract::ConnectInfo;
use axum::http::header::USER_AGENT;
use axum::http::request::Parts;

use super::types::RequestFacts;

const NOT_AVAILABLE: &str = "N/A";
const X_FORWARDED_FOR: &str = "x-forwarded-for";

pub fn read(parts: &Parts) -> RequestFacts {
    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in &parts.headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        headers
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    RequestFacts {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        remote_address: remote_address(parts),
        user_agent: header_str(parts, USER_AGENT.as_str())
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        headers,
    }
}

/// First hop of `X-Forwarded-For`, then the socket peer, then "N/A".
fn remote_address(parts: &Parts) -> String {
    let forwarded = header_str(parts, X_FORWARDED_FOR)
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    if let Some(client) = forwarded {
        return client.to_string();
    }

    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.into())
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts(request: Request<()>) -> Parts {
        request.into_parts().0
    }

    #[test]
    fn bare_request_defaults_to_na() {
        let facts = read(&parts(
            Request::get("/api/info?verbose=1").body(()).unwrap(),
        ));
        assert_eq!(facts.method, "GET");
        assert_eq!(facts.path, "/api/info");
        assert_eq!(facts.remote_address, "N/A");
        assert_eq!(facts.user_agent, "N/A");
        assert!(facts.headers.is_empty());
    }

    #[test]
    fn forwarded_for_first_hop_wins() {
        let mut req = Request::post("/")
            .header("X-Forwarded-For", "203.0.113.9, 10.0.0.1")
            .header("User-Agent", "curl/8.5.0")
            .body(())
            .unwrap();
        req.extensions_mut()
            .insert(ConnectInfo("10.0.0.1:51000".parse::<SocketAddr>().unwrap()));

        let facts = read(&parts(req));
        assert_eq!(facts.method, "POST");
        assert_eq!(facts.remote_address, "203.0.113.9");
        assert_eq!(facts.user_agent, "curl/8.5.0");
        assert_eq!(facts.headers["user-agent"], "curl/8.5.0");
    }

    #[test]
    fn peer_address_used_without_forwarding() {
        let mut req = Request::get("/").body(()).unwrap();
        req.extensions_mut()
            .insert(ConnectInfo("192.0.2.44:40000".parse::<SocketAddr>().unwrap()));
        assert_eq!(read(&parts(req)).remote_address, "192.0.2.44");
    }

    #[test]
    fn repeated_headers_are_joined() {
        let req = Request::get("/")
            .header("Accept", "text/html")
            .header("Accept", "application/json")
            .body(())
            .unwrap();
        let facts = read(&parts(req));
        assert_eq!(facts.headers["accept"], "text/html, application/json");
    }
}
