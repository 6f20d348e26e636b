//! Request and response shapes shared by every resource

use serde::{Deserialize, Serialize};

/// `{"id": ...}` answered by every create endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Created {
    pub id: i64,
}

/// Body of every delete endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct IdBody {
    pub id: Option<i64>,
}
