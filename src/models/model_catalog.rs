use serde::{Deserialize, Serialize};

use super::chat_request::DEFAULT_MODEL;
use crate::utils::prefixed_token;

const MODEL_CREATED: i64 = 1677610602;
const MODEL_OWNER: &str = "anthropic";
const PERMISSION_ID_PREFIX: &str = "modelperm-";

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub object: String,
    pub data: Vec<ModelDescriptor>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub owned_by: String,
    pub permission: Vec<ModelPermission>,
    pub root: String,
    pub parent: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelPermission {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub allow_create_engine: bool,
    pub allow_sampling: bool,
    pub allow_logprobs: bool,
    pub allow_search_indices: bool,
    pub allow_view: bool,
    pub allow_fine_tuning: bool,
    pub organization: String,
    pub group: Option<String>,
    pub is_blocking: bool,
}

impl ModelPermission {
    fn permissive() -> Self {
        ModelPermission {
            id: prefixed_token(PERMISSION_ID_PREFIX),
            object: "model_permission".to_string(),
            created: MODEL_CREATED,
            allow_create_engine: true,
            allow_sampling: true,
            allow_logprobs: true,
            allow_search_indices: true,
            allow_view: true,
            allow_fine_tuning: true,
            organization: "*".to_string(),
            group: None,
            is_blocking: false,
        }
    }
}

impl ModelDescriptor {
    fn new(id: &str) -> Self {
        ModelDescriptor {
            id: id.to_string(),
            object: "model".to_string(),
            created: MODEL_CREATED,
            owned_by: MODEL_OWNER.to_string(),
            permission: vec![ModelPermission::permissive()],
            root: id.to_string(),
            parent: None,
        }
    }
}

/// The single-entry model catalog. Permission ids are regenerated on every
/// call.
pub fn list_models() -> ModelCatalog {
    ModelCatalog {
        object: "list".to_string(),
        data: vec![ModelDescriptor::new(DEFAULT_MODEL)],
    }
}
