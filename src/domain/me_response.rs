use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct MeResponse {
    pub principal: String,
    pub authorities: Vec<String>,
}
