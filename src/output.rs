use crate::{document::Document, error::Error};
use log::debug;
use tokio::{
    fs::write,
    io::{AsyncWrite, AsyncWriteExt},
};

/// Writes a serialized document.
///
/// The whole string is written to the document's output file at once if it
/// is set. Otherwise, it is written to `console` followed by a newline.
pub async fn write_document(
    document: &Document,
    string: &str,
    console: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    if let Some(path) = document.output() {
        debug!("writing a document to {}", path.display());
        write(path, string).await?;
    } else {
        debug!("writing a document to console");
        console.write_all(string.as_bytes()).await?;
        console.write_all(b"\n").await?;
        console.flush().await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element_options::ElementOptions;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;
    use tokio::fs::read_to_string;

    #[tokio::test]
    async fn write_to_file() {
        let directory = tempdir().unwrap();
        let path = directory.path().join("index.html");
        let document = Document::new("html", ElementOptions::new(), Some(path.clone()));
        let mut console = Vec::<u8>::new();

        write_document(&document, &document.serialize(), &mut console)
            .await
            .unwrap();

        assert_eq!(read_to_string(&path).await.unwrap(), "<html></html>");
        assert!(console.is_empty());
    }

    #[tokio::test]
    async fn write_to_console() {
        let document = Document::new("html", ElementOptions::new(), None);
        let mut console = Vec::<u8>::new();

        write_document(&document, &document.serialize(), &mut console)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(console).unwrap(), "<html></html>\n");
    }

    #[tokio::test]
    async fn fail_to_write_to_missing_directory() {
        let directory = tempdir().unwrap();
        let document = Document::new(
            "html",
            ElementOptions::new(),
            Some(directory.path().join("missing").join("index.html")),
        );

        assert!(matches!(
            write_document(&document, &document.serialize(), &mut Vec::<u8>::new()).await,
            Err(Error::Io(_))
        ));
    }
}
