use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{Document, DocumentFormat};

/// Joins the text of every paragraph in document order. Paragraphs are not
/// filtered, so empty paragraphs contribute empty lines.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_paragraphs(data: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let docx = docx_rs::read_docx(data)
            .map_err(|e| ExtractionError::ParseFailed(format!("failed to parse DOCX: {e}")))?;

        let mut paragraphs = Vec::new();

        for child in docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                let mut line = String::new();
                for paragraph_child in paragraph.children {
                    if let ParagraphChild::Run(run) = paragraph_child {
                        for run_child in run.children {
                            if let RunChild::Text(text) = run_child {
                                line.push_str(&text.text);
                            }
                        }
                    }
                }
                paragraphs.push(line);
            }
        }

        Ok(paragraphs)
    }
}

#[async_trait]
impl TextExtractor for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        if document.format != DocumentFormat::Docx {
            return Err(ExtractionError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        let data_owned = data.to_vec();
        let paragraphs = tokio::task::spawn_blocking(move || Self::extract_paragraphs(&data_owned))
            .await
            .map_err(|e| ExtractionError::ParseFailed(format!("task join error: {e}")))??;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        Ok(paragraphs.join("\n"))
    }
}
