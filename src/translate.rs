use log::warn;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Menu labels are served from this table; everything else goes to the
/// translation service.
const MENU_LABELS: [(&str, &str); 6] = [
    ("Home", "मुख्यपृष्ठ"),
    ("Disease Detection", "रोग शोध"),
    ("Market Analysis", "बाजार विश्लेषण"),
    ("Weather Analysis", "हवामान विश्लेषण"),
    ("Nearby Stores", "नजीकची खते दुकाने"),
    ("Crop Prediction", "पिक अंदाज"),
];

#[derive(Debug)]
pub enum TranslateError {
    Network(reqwest::Error),
    /// The service answered, but not with the expected nested-array body.
    Malformed,
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Network(e) => write!(f, "translation service unreachable: {}", e),
            TranslateError::Malformed => write!(f, "unexpected translation payload"),
        }
    }
}

impl std::error::Error for TranslateError {}

pub struct Translator {
    http: reqwest::Client,
    curated: BTreeMap<&'static str, &'static str>,
}

impl Translator {
    pub fn new() -> Self {
        Translator {
            http: reqwest::Client::new(),
            curated: MENU_LABELS.into_iter().collect(),
        }
    }

    /// English to Marathi. Curated labels never touch the network.
    pub async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        if let Some(hit) = self.curated.get(text) {
            return Ok((*hit).to_string());
        }
        let response = self
            .http
            .get(TRANSLATE_URL)
            .query(&[
                ("client", "gtx"),
                ("sl", "en"),
                ("tl", "mr"),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(TranslateError::Network)?;
        let body: Value = response.json().await.map_err(TranslateError::Network)?;
        match extract_translation(&body) {
            Some(translated) => Ok(patch_known_mistranslations(&translated)),
            None => {
                warn!("Translation service returned an unexpected body for {:?}", text);
                Err(TranslateError::Malformed)
            }
        }
    }

    pub fn menu_label(&self, label: &str) -> Option<&'static str> {
        self.curated.get(label).copied()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

// The gtx endpoint answers [[["segment", "source", ...], ...], ...]; the
// translation is the concatenation of the first element of each segment.
pub fn extract_translation(body: &Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let mut out = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(Value::as_str) {
            out.push_str(text);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Three known machine-translation misses, patched after the fact.
pub fn patch_known_mistranslations(text: &str) -> String {
    text.replace("अॅप", "अ‍ॅप")
        .replace("प्लांट", "वनस्पती")
        .replace("हेल्थ", "आरोग्य")
}
