//! Query-string builder for `api.php` calls.
//!
//! Every call is a GET with the RPC name in `__call` plus a fixed set of
//! envelope parameters. Call-specific values are percent-encoded here, so
//! callers pass raw strings.

/// Calling context; some endpoints only answer for the Android app context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Web,
    Android,
}

impl Context {
    fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web6dot0",
            Self::Android => "android",
        }
    }
}

/// A single `api.php` call
#[derive(Debug, Clone)]
pub struct ApiRequest {
    call: &'static str,
    context: Context,
    params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    pub fn new(call: &'static str, context: Context) -> Self {
        Self {
            call,
            context,
            params: Vec::new(),
        }
    }

    /// Add a call-specific parameter. The value is percent-encoded.
    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    /// RPC name, for logging
    pub fn call(&self) -> &'static str {
        self.call
    }

    /// Render the full URL against `base_url`
    pub fn url(&self, base_url: &str) -> String {
        let envelope = format!(
            "{}?__call={}&api_version=4&_format=json&_marker=0&ctx={}",
            base_url,
            self.call,
            self.context.as_str()
        );
        std::iter::once(envelope)
            .chain(
                self.params
                    .iter()
                    .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value))),
            )
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.jiosaavn.com/api.php";

    #[test]
    fn test_envelope_parameters() {
        let url = ApiRequest::new("song.getDetails", Context::Web).url(BASE);

        assert_eq!(
            url,
            "https://www.jiosaavn.com/api.php?__call=song.getDetails&api_version=4&_format=json&_marker=0&ctx=web6dot0"
        );
    }

    #[test]
    fn test_android_context() {
        let url = ApiRequest::new("webradio.getSong", Context::Android).url(BASE);
        assert!(url.contains("&ctx=android"));
    }

    #[test]
    fn test_params_are_encoded_in_order() {
        let url = ApiRequest::new("search.getResults", Context::Web)
            .param("q", "tum hi ho & more")
            .param("n", 25)
            .url(BASE);

        assert!(url.ends_with("&q=tum%20hi%20ho%20%26%20more&n=25"));
    }

    #[test]
    fn test_call_name() {
        let request = ApiRequest::new("webapi.get", Context::Web);
        assert_eq!(request.call(), "webapi.get");
    }
}
