use crate::issue_report::domain::IssuesResponse;
use crate::shared::error::IssueFormatError;
use crate::shared::Result;
use serde_json::Value;

/// PayloadParser - decodes a raw search response into the domain model
///
/// Operates on bytes so invalid UTF-8 surfaces as a JSON error rather than
/// an I/O error. The document is first read into a `Value`, so an object that
/// repeats a key keeps its last value.
pub struct PayloadParser;

impl PayloadParser {
    pub fn parse(payload: &[u8]) -> Result<IssuesResponse> {
        let document: Value = serde_json::from_slice(payload).map_err(invalid_json)?;
        Ok(serde_json::from_value(document).map_err(invalid_json)?)
    }
}

fn invalid_json(error: serde_json::Error) -> IssueFormatError {
    IssueFormatError::InvalidJson {
        details: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_json_details(payload: &[u8]) -> String {
        let err = PayloadParser::parse(payload).unwrap_err();
        match err.downcast_ref::<IssueFormatError>() {
            Some(IssueFormatError::InvalidJson { details }) => details.clone(),
            other => panic!("expected InvalidJson, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_valid_payload() {
        let response = PayloadParser::parse(
            br#"{"total":1,"issues":[{"rule":"python:S1481","line":3}],"components":[]}"#,
        )
        .unwrap();
        assert_eq!(response.issues().len(), 1);
        assert_eq!(response.issues()[0].rule(), "python:S1481");
    }

    #[test]
    fn test_parse_truncated_payload() {
        let details = invalid_json_details(br#"{"issues":[{"rule":"a""#);
        assert!(details.contains("EOF"));
    }

    #[test]
    fn test_parse_empty_input() {
        let details = invalid_json_details(b"");
        assert!(details.contains("EOF"));
    }

    #[test]
    fn test_parse_top_level_array_rejected() {
        let details = invalid_json_details(b"[]");
        assert!(details.contains("invalid type"));
    }

    #[test]
    fn test_parse_wrong_collection_type_rejected() {
        let details = invalid_json_details(br#"{"issues":{"rule":"a"}}"#);
        assert!(details.contains("invalid type"));
    }

    #[test]
    fn test_parse_duplicate_keys_keep_last_value() {
        let response = PayloadParser::parse(
            br#"{"total":1,"total":4,"issues":[{"rule":"a","rule":"b"}]}"#,
        )
        .unwrap();
        assert_eq!(response.total(), 4);
        assert_eq!(response.issues()[0].rule(), "b");
    }

    #[test]
    fn test_parse_tolerates_malformed_secondary_impact() {
        let response = PayloadParser::parse(
            br#"{"issues":[{"rule":"r","severity":3,"impacts":[
                {"severity":"HIGH","softwareQuality":"SECURITY"},{"severity":"LOW"}]}]}"#,
        )
        .unwrap();
        let issue = &response.issues()[0];
        assert_eq!(issue.impact_severity(), "HIGH");
        assert_eq!(issue.software_quality(), "SECURITY");
    }

    #[test]
    fn test_parse_component_without_key_rejected() {
        let details = invalid_json_details(br#"{"components":[{"path":"a.py"}]}"#);
        assert!(details.contains("missing field `key`"));
    }

    #[test]
    fn test_parse_invalid_utf8_rejected() {
        invalid_json_details(b"{\"issues\":[{\"message\":\"\xff\"}]}");
    }
}
