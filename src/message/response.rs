use serde::{Deserialize, Serialize};

/// Reply to a handled request: the converted pixels and the dimensions the
/// caller sent, echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceResponse {
    pub pixels: Vec<u8>,
    pub height: u32,
    pub width: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_keys() {
        let response = ServiceResponse { pixels: vec![1, 1, 1, 9], height: 1, width: 1 };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"Pixels":[1,1,1,9],"Height":1,"Width":1}"#);
    }
}
