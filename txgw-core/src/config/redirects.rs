use url::Url;

/// The two places a payer can be sent after `pay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPair {
    pub success: Url,
    pub error: Url,
}

impl RedirectPair {
    pub fn new(success: Url, error: Url) -> Self {
        Self { success, error }
    }

    pub fn pick(&self, accepted: bool) -> &Url {
        if accepted { &self.success } else { &self.error }
    }
}
