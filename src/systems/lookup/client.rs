use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use super::error::LookupError;
use super::record::LookupRecord;

/// Something that can resolve a search term into a [`LookupRecord`].
///
/// Implementations are called from background threads and may block.
pub trait LookupClient: Send + Sync + 'static {
	fn lookup(&self, term: &str) -> Result<LookupRecord, LookupError>;
}

/// Lookup client that POSTs to `{endpoint}/{term}` and decodes a
/// `{"policy": .., "description": ..}` body.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
	client: Client,
	endpoint: Url,
}

impl HttpLookupClient {
	pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, LookupError> {
		let endpoint = parse_endpoint(endpoint)?;
		let client = Client::builder()
			.timeout(timeout)
			.build()
			.map_err(LookupError::Client)?;
		Ok(Self { client, endpoint })
	}

	/// Build the request URL with `term` as a single percent-encoded path segment.
	pub fn url_for(&self, term: &str) -> Result<Url, LookupError> {
		let mut url = self.endpoint.clone();
		{
			let mut segments = url.path_segments_mut().map_err(|()| LookupError::InvalidEndpoint {
				endpoint: self.endpoint.to_string(),
				reason: "endpoint cannot carry a path".to_string(),
			})?;
			segments.pop_if_empty().push(term);
		}
		Ok(url)
	}
}

impl LookupClient for HttpLookupClient {
	fn lookup(&self, term: &str) -> Result<LookupRecord, LookupError> {
		let url = self.url_for(term)?;
		let transport = |source| LookupError::Transport {
			term: term.to_string(),
			source,
		};

		let response = self
			.client
			.post(url)
			.header(CONTENT_TYPE, "application/json")
			.send()
			.map_err(transport)?;

		let status = response.status();
		if !status.is_success() {
			return Err(LookupError::Status {
				term: term.to_string(),
				status,
			});
		}

		let body = response.bytes().map_err(transport)?;
		decode_record(term, &body)
	}
}

/// Validate a configured endpoint. Only `http` and `https` base URLs are accepted.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, LookupError> {
	let invalid = |reason: String| LookupError::InvalidEndpoint {
		endpoint: endpoint.to_string(),
		reason,
	};
	let url = Url::parse(endpoint.trim()).map_err(|err| invalid(err.to_string()))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
	}
	if url.cannot_be_a_base() {
		return Err(invalid("endpoint cannot carry a path".to_string()));
	}
	Ok(url)
}

pub(crate) fn decode_record(term: &str, body: &[u8]) -> Result<LookupRecord, LookupError> {
	serde_json::from_slice(body).map_err(|source| LookupError::Decode {
		term: term.to_string(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use std::io::{Read, Write};
	use std::net::TcpListener;
	use std::thread::{self, JoinHandle};

	use super::*;

	/// Serve a single request with `status` and `body`, handing back the raw request head.
	fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
		let endpoint = format!(
			"http://{}/qahandbook",
			listener.local_addr().expect("local addr")
		);
		let handle = thread::spawn(move || {
			let (mut stream, _) = listener.accept().expect("accept connection");
			let mut head = Vec::new();
			let mut chunk = [0_u8; 1024];
			while !head.windows(4).any(|window| window == b"\r\n\r\n") {
				let read = stream.read(&mut chunk).expect("read request");
				if read == 0 {
					break;
				}
				head.extend_from_slice(&chunk[..read]);
			}
			let reply = format!(
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			);
			stream.write_all(reply.as_bytes()).expect("write reply");
			String::from_utf8_lossy(&head).into_owned()
		});
		(endpoint, handle)
	}

	fn client(endpoint: &str) -> HttpLookupClient {
		HttpLookupClient::new(endpoint, Duration::from_secs(5)).expect("valid endpoint")
	}

	#[test]
	fn term_is_appended_as_a_path_segment() {
		let client = client("http://127.0.0.1:5000/qahandbook");
		let url = client.url_for("vacation").unwrap();
		assert_eq!(url.as_str(), "http://127.0.0.1:5000/qahandbook/vacation");
	}

	#[test]
	fn trailing_slash_does_not_double_up() {
		let client = client("http://127.0.0.1:5000/qahandbook/");
		let url = client.url_for("remote work").unwrap();
		assert_eq!(
			url.as_str(),
			"http://127.0.0.1:5000/qahandbook/remote%20work"
		);
	}

	#[test]
	fn slashes_in_terms_stay_inside_one_segment() {
		let client = client("https://lookup.example/api");
		let url = client.url_for("a/b").unwrap();
		assert_eq!(url.path(), "/api/a%2Fb");
	}

	#[test]
	fn non_http_endpoints_are_rejected() {
		assert!(matches!(
			parse_endpoint("ftp://example.com/x"),
			Err(LookupError::InvalidEndpoint { .. })
		));
		assert!(matches!(
			parse_endpoint("not a url"),
			Err(LookupError::InvalidEndpoint { .. })
		));
	}

	#[test]
	fn policy_payload_maps_to_title_and_description() {
		let body = br#"{"policy":"Vacation Policy","description":"Employees accrue..."}"#;
		let record = decode_record("vacation", body).unwrap();
		assert_eq!(record, LookupRecord::new("Vacation Policy", "Employees accrue..."));
	}

	#[test]
	fn malformed_bodies_are_decode_errors() {
		let err = decode_record("vacation", b"<html>oops</html>").unwrap_err();
		assert!(matches!(err, LookupError::Decode { ref term, .. } if term == "vacation"));

		let missing_field = br#"{"policy":"Vacation Policy"}"#;
		assert!(decode_record("vacation", missing_field).is_err());
	}

	#[test]
	fn lookup_posts_json_to_the_term_path() {
		let (endpoint, server) = serve_once(
			"200 OK",
			r#"{"policy":"Sick Leave Policy","description":"Up to ten days."}"#,
		);

		let record = client(&endpoint).lookup("sick leave").expect("lookup succeeds");
		let request = server.join().expect("server thread");

		assert_eq!(record, LookupRecord::new("Sick Leave Policy", "Up to ten days."));
		assert!(
			request.starts_with("POST /qahandbook/sick%20leave HTTP/1.1\r\n"),
			"{request}"
		);
		assert!(
			request
				.to_ascii_lowercase()
				.contains("content-type: application/json\r\n"),
			"{request}"
		);
	}

	#[test]
	fn non_success_status_is_an_error_even_with_a_json_body() {
		let (endpoint, server) = serve_once(
			"500 Internal Server Error",
			r#"{"policy":"Vacation Policy","description":"Employees accrue..."}"#,
		);

		let err = client(&endpoint).lookup("vacation").unwrap_err();
		server.join().expect("server thread");

		match err {
			LookupError::Status { term, status } => {
				assert_eq!(term, "vacation");
				assert_eq!(status.as_u16(), 500);
			}
			other => panic!("expected a status error, got {other:?}"),
		}
	}

	#[test]
	fn unreachable_service_is_a_transport_error() {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
		let endpoint = format!(
			"http://{}/qahandbook",
			listener.local_addr().expect("local addr")
		);
		drop(listener);

		let err = client(&endpoint).lookup("vacation").unwrap_err();
		assert!(
			matches!(err, LookupError::Transport { ref term, .. } if term == "vacation"),
			"{err:?}"
		);
	}
}
