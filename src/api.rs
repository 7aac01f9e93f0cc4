// Request adapter for the compression service.
//
// Maps (method, path, body) to a status code and a JSON body without
// depending on any HTTP framework. A server only needs to forward the raw
// request pieces and write back `Response`.
//
// Routes:
//   GET  /                       banner
//   POST /api/compress/huffman   HuffmanEncoder
//   POST /api/compress/delta     DifferenceEncoder
//
// Bodies are either plain text (used as-is) or a JSON object carrying the
// payload in `text` (preferred) or `data`.

use log::{debug, info};
use serde_json::{Value, json};

use crate::delta::{DeltaOptions, DifferenceEncoder};
use crate::outcome::{CompressionOutcome, Compressor};
use crate::prefix::HuffmanEncoder;

/// Body returned by the index route.
pub const BANNER: &str = "IoT Data Compression API is running";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Empty data provided")]
    EmptyPayload,
    #[error("missing field: expected `text` or `data`")]
    MissingField,
    #[error("field `{0}` must be a string")]
    InvalidField(&'static str),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("method {method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            Self::EmptyPayload | Self::MissingField | Self::InvalidField(_) => 400,
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed { .. } => 405,
        }
    }
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Index,
    Huffman,
    Delta,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::Huffman => "/api/compress/huffman",
            Self::Delta => "/api/compress/delta",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Self::Index => "GET",
            Self::Huffman | Self::Delta => "POST",
        }
    }

    /// Resolve a request line to an endpoint.
    pub fn route(method: &str, path: &str) -> Result<Self, ApiError> {
        let path = path.split('?').next().unwrap_or(path);
        let endpoint = [Self::Index, Self::Huffman, Self::Delta]
            .into_iter()
            .find(|e| e.path() == path)
            .ok_or_else(|| ApiError::NotFound(path.to_string()))?;

        if !endpoint.method().eq_ignore_ascii_case(method) {
            return Err(ApiError::MethodNotAllowed {
                method: method.to_string(),
                path: path.to_string(),
            });
        }
        Ok(endpoint)
    }
}

// ---------------------------------------------------------------------------
// Payload extraction
// ---------------------------------------------------------------------------

/// Pull the text payload out of a request body.
///
/// A body that parses as a JSON object must carry a string `text` or `data`
/// field. Anything else is treated as the payload itself.
pub fn extract_payload(body: &[u8]) -> Result<Vec<u8>, ApiError> {
    let payload = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => {
            let (name, value) = ["text", "data"]
                .into_iter()
                .find_map(|name| map.get(name).map(|v| (name, v)))
                .ok_or(ApiError::MissingField)?;
            value
                .as_str()
                .ok_or(ApiError::InvalidField(name))?
                .as_bytes()
                .to_vec()
        }
        _ => body.to_vec(),
    };

    if payload.is_empty() {
        return Err(ApiError::EmptyPayload);
    }
    Ok(payload)
}

/// Response-shaped JSON for an outcome.
///
/// All three fields come from the outcome, so they share the encoder's size
/// unit (bytes for Huffman, `i32` elements x 4 for delta).
pub fn outcome_json(outcome: &CompressionOutcome) -> Value {
    json!({
        "originalSize": outcome.original_size,
        "compressedSize": outcome.compressed_size,
        "compressionRatio": outcome.ratio,
    })
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

impl Response {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(err: &ApiError) -> Self {
        Self {
            status: err.status(),
            body: json!({ "error": err.to_string() }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Both encoders behind the three routes. Holds no per-request state.
#[derive(Debug, Clone, Default)]
pub struct Service {
    huffman: HuffmanEncoder,
    delta: DifferenceEncoder,
}

impl Service {
    pub fn new(delta_opts: DeltaOptions) -> Self {
        Self {
            huffman: HuffmanEncoder,
            delta: DifferenceEncoder::with_options(delta_opts),
        }
    }

    /// The encoder behind a compression endpoint.
    pub fn compressor(&self, endpoint: Endpoint) -> Option<&dyn Compressor> {
        match endpoint {
            Endpoint::Index => None,
            Endpoint::Huffman => Some(&self.huffman),
            Endpoint::Delta => Some(&self.delta),
        }
    }

    pub fn handle(&self, method: &str, path: &str, body: &[u8]) -> Response {
        match self.try_handle(method, path, body) {
            Ok(resp) => resp,
            Err(err) => {
                debug!("{method} {path}: {err}");
                Response::error(&err)
            }
        }
    }

    fn try_handle(&self, method: &str, path: &str, body: &[u8]) -> Result<Response, ApiError> {
        let endpoint = Endpoint::route(method, path)?;
        let Some(compressor) = self.compressor(endpoint) else {
            return Ok(Response::ok(Value::String(BANNER.to_string())));
        };

        let payload = extract_payload(body)?;
        let outcome = compressor.compress(&payload);
        info!(
            "{}: {} -> {} bytes ({:.2}%){}",
            compressor.name(),
            payload.len(),
            outcome.compressed_size,
            outcome.ratio,
            if outcome.simulated { " [simulated]" } else { "" }
        );
        Ok(Response::ok(outcome_json(&outcome)))
    }
}
