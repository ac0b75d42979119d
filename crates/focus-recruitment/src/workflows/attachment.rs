use serde::{Deserialize, Serialize};

/// File extensions the CV pickers accept.
pub const ACCEPTED_CV_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// A CV chosen by the visitor. Only the file name is ever captured; the bytes stay on the
/// visitor's machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvAttachment {
    pub file_name: String,
}

impl CvAttachment {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }

    pub fn has_accepted_extension(&self) -> bool {
        self.extension()
            .is_some_and(|ext| ACCEPTED_CV_EXTENSIONS.contains(&ext.as_str()))
    }
}
