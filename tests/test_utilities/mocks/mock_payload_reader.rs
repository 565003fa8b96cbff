use sonar_issues::prelude::*;

/// Mock PayloadReader for testing
pub struct MockPayloadReader {
    pub content: Vec<u8>,
    pub should_fail: bool,
}

impl MockPayloadReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.as_bytes().to_vec(),
            should_fail: false,
        }
    }

    pub fn from_bytes(content: Vec<u8>) -> Self {
        Self {
            content,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: Vec::new(),
            should_fail: true,
        }
    }
}

impl PayloadReader for MockPayloadReader {
    fn read_payload(&self) -> Result<Vec<u8>> {
        if self.should_fail {
            anyhow::bail!("Mock payload read failure");
        }
        Ok(self.content.clone())
    }

    fn source_name(&self) -> String {
        "mock payload".to_string()
    }
}
