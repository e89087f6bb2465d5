//! Built-in example documents the backend can load by file name.

use serde::Serialize;

/// One catalog entry: a document the backend serves from its examples
/// directory, with a suggested question to ask about it.
#[derive(Debug, Clone, Serialize)]
pub struct Example {
    pub id: &'static str,
    pub title: &'static str,
    pub question: &'static str,
    pub file_name: &'static str,
    pub description: &'static str,
    pub doc_type: &'static str,
}

const EXAMPLES: &[Example] = &[
    Example {
        id: "google-env-2024",
        title: "Google 2024 Environmental Report",
        question: "Retrieve the data center PUE efficiency values for \
                   Singapore facility 2 in 2019 and 2022. Also retrieve the \
                   regional average CFE in Asia-Pacific in 2023.",
        file_name: "google-2024-environmental-report.pdf",
        description: "Google's annual report on its environmental initiatives",
        doc_type: "Environmental Report",
    },
    Example {
        id: "deepseek-r1",
        title: "DeepSeek-R1 Technical Report",
        question: "Summarize the DeepSeek-R1 model's performance evaluation \
                   on all coding tasks against the OpenAI o1-mini model.",
        file_name: "DeepSeek Technical Report.pdf",
        description: "Technical documentation for the DeepSeek-R1 model",
        doc_type: "Technical Report",
    },
];

pub fn all() -> &'static [Example] {
    EXAMPLES
}

pub fn find(id: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|example| example.id == id)
}
