//! The uploaded document model and its access rules.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::DocumentId;

/// Upload metadata carried in the `meta` multipart field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub file: bool,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub mime: String,
    #[serde(default)]
    pub grant: Vec<String>,
}

impl DocumentMeta {
    /// A document needs either a name or an attached file.
    pub fn is_identifiable(&self) -> bool {
        !self.name.is_empty() || self.file
    }
}

/// A stored document.
///
/// `content` is skipped during serialization, so the serialized form is the
/// view kept in the document cache.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub login: String,
    pub name: String,
    pub mime: String,
    pub is_file: bool,
    pub is_public: bool,
    pub grant: Vec<String>,
    #[serde(skip)]
    pub content: Option<Bytes>,
    #[serde(serialize_with = "serialize_payload")]
    pub json: Option<Bytes>,
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Build a new document owned by `login` from upload metadata.
    ///
    /// The grant list is derived with [`effective_grant`].
    pub fn from_meta(login: impl Into<String>, meta: &DocumentMeta) -> Self {
        let login = login.into();
        let grant = effective_grant(&login, meta.public, &meta.grant);

        Self {
            id: DocumentId::new(),
            login,
            name: meta.name.clone(),
            mime: meta.mime.clone(),
            is_file: meta.file,
            is_public: meta.public,
            grant,
            content: None,
            json: None,
            created_at: Utc::now(),
        }
    }

    /// The JSON payload as a value for the upload response.
    ///
    /// Falls back to a plain string when the payload is not valid JSON,
    /// and to `null` when there is no payload.
    pub fn json_echo(&self) -> serde_json::Value {
        match self.json.as_deref() {
            None | Some([]) => serde_json::Value::Null,
            Some(raw) => serde_json::from_slice(raw).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(raw).into_owned())
            }),
        }
    }
}

fn serialize_payload<S>(payload: &Option<Bytes>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match payload {
        Some(raw) => serializer.serialize_some(&*String::from_utf8_lossy(raw)),
        None => serializer.serialize_none(),
    }
}

/// Grant list for a new document.
///
/// A private document without an explicit grant list is granted to its
/// owner alone. Otherwise the requested logins are kept in order with
/// duplicates and empty entries removed.
pub fn effective_grant(owner: &str, public: bool, requested: &[String]) -> Vec<String> {
    let mut grant: Vec<String> = Vec::with_capacity(requested.len());
    for login in requested {
        if !login.is_empty() && !grant.contains(login) {
            grant.push(login.clone());
        }
    }

    if !public && grant.is_empty() {
        grant.push(owner.to_string());
    }

    grant
}
