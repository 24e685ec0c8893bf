mod options;

pub use self::options::{RenderFormat, RenderOptions};
use crate::{document::Document, element::Element, error::Error};
use itertools::Itertools;
use log::debug;

/// Renders an element and its descendants.
///
/// An element with children is rendered as a block of lines. An element
/// without children is rendered as a single indented line. No character is
/// escaped.
pub fn render(element: &Element) -> String {
    let name = element.name();
    let attributes = render_attributes(element);

    if element.children().is_empty() {
        if element.is_void() {
            format!("\t<{name} {attributes}>\n")
        } else {
            format!("\t<{name} {attributes}>{}</{name}>\n", element.text())
        }
    } else {
        format!(
            "<{name} {attributes}>{}\n{}</{name}>\n",
            element.text(),
            render_children(element)
        )
    }
}

/// Serializes a document root element into a final string.
///
/// A root element wraps its children in its own tags without any indentation
/// or trailing newline. Any other element is rendered by [`render`].
pub fn serialize(element: &Element) -> String {
    if !element.is_root() {
        return render(element);
    }

    let name = element.name();
    let attributes = render_attributes(element);
    let string = format!(
        "<{name}{}{attributes}>{}</{name}>",
        if attributes.is_empty() { "" } else { " " },
        render_children(element)
    );

    debug!("serialized document {name} into {} bytes", string.len());

    string
}

/// Renders a document in a format.
pub fn render_document(document: &Document, options: &RenderOptions) -> Result<String, Error> {
    Ok(match options.format() {
        RenderFormat::Text => document.serialize(),
        RenderFormat::Json => serde_json::to_string_pretty(document.root())?,
    })
}

fn render_attributes(element: &Element) -> String {
    element
        .attributes()
        .map(|(name, value)| format!("{name}='{value}'"))
        .join(" ")
}

fn render_children(element: &Element) -> String {
    element.children().iter().map(render).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element_options::ElementOptions;
    use pretty_assertions::assert_eq;

    fn leaf(name: &str, text: &str) -> Element {
        let mut element = Element::new(name, ElementOptions::new());
        element.set_text(text);
        element
    }

    #[test]
    fn render_leaf() {
        assert_eq!(render(&leaf("title", "Hello")), "\t<title >Hello</title>\n");
    }

    #[test]
    fn render_void_element() {
        let element = Element::new(
            "img",
            ElementOptions::new()
                .set_void(true)
                .set_attribute("src", "/icon.png"),
        );

        assert_eq!(render(&element), "\t<img src='/icon.png'>\n");
    }

    #[test]
    fn ignore_text_of_void_element() {
        let mut element = Element::new("br", ElementOptions::new().set_void(true));
        element.set_text("ignored");

        assert_eq!(render(&element), "\t<br >\n");
    }

    #[test]
    fn render_class_names() {
        let element = Element::new(
            "div",
            ElementOptions::new().set_classes(["container", "container-fluid"]),
        );

        assert!(render(&element).contains("class='container container-fluid'"));
    }

    #[test]
    fn render_empty_class_names() {
        let element = Element::new("div", ElementOptions::new().set_classes(Vec::<String>::new()));

        assert_eq!(render(&element), "\t<div class=''></div>\n");
    }

    #[test]
    fn render_attributes_in_order() {
        let element = Element::new(
            "input",
            ElementOptions::new()
                .set_attribute("type", "text")
                .set_attribute("name", "query")
                .set_attribute("data_role", "search"),
        );

        assert_eq!(
            render(&element),
            "\t<input type='text' name='query' data_role='search'></input>\n"
        );
    }

    #[test]
    fn render_branch() {
        let mut element = leaf("head", "");
        element.attach(leaf("title", "Hello"));

        assert_eq!(render(&element), "<head >\n\t<title >Hello</title>\n</head>\n");
    }

    #[test]
    fn render_text_of_branch() {
        let mut element = leaf("p", "Hello");
        element.attach(leaf("b", "world"));

        assert_eq!(render(&element), "<p >Hello\n\t<b >world</b>\n</p>\n");
    }

    #[test]
    fn render_children_in_attachment_order() {
        let mut element = leaf("ul", "");
        element.attach(leaf("li", "foo")).attach(leaf("li", "bar"));

        let string = render(&element);

        assert!(string.contains(&(render(&leaf("li", "foo")) + &render(&leaf("li", "bar")))));
    }

    #[test]
    fn render_nested_branches() {
        let mut inner = leaf("div", "");
        inner.attach(leaf("p", "foo"));
        let mut outer = leaf("body", "");
        outer.attach(inner);

        assert_eq!(
            render(&outer),
            "<body >\n<div >\n\t<p >foo</p>\n</div>\n</body>\n"
        );
    }

    #[test]
    fn render_idempotently() {
        let mut element = leaf("div", "");
        element.attach(leaf("p", "foo"));

        assert_eq!(render(&element), render(&element));
    }

    #[test]
    fn serialize_document() {
        let mut head = leaf("head", "");
        head.attach(leaf("title", "Hello"));
        let mut html = Element::new("html", ElementOptions::new().set_root(true));
        html.attach(head);

        assert_eq!(
            serialize(&html),
            "<html><head >\n\t<title >Hello</title>\n</head>\n</html>"
        );
    }

    #[test]
    fn serialize_empty_document() {
        assert_eq!(
            serialize(&Element::new("html", ElementOptions::new().set_root(true))),
            "<html></html>"
        );
    }

    #[test]
    fn serialize_document_with_attributes() {
        assert_eq!(
            serialize(&Element::new(
                "html",
                ElementOptions::new()
                    .set_root(true)
                    .set_attribute("lang", "en")
            )),
            "<html lang='en'></html>"
        );
    }

    #[test]
    fn serialize_non_root_element() {
        assert_eq!(
            serialize(&leaf("title", "Hello")),
            "\t<title >Hello</title>\n"
        );
    }

    #[test]
    fn render_document_in_json() {
        let document = Document::new("html", ElementOptions::new(), None);

        let string = render_document(
            &document,
            &RenderOptions::new().set_format(RenderFormat::Json),
        )
        .unwrap();

        assert!(string.contains(r#""name": "html""#));
        assert!(string.contains(r#""root": true"#));
    }

    #[test]
    fn render_document_in_text() {
        let document = Document::new("html", ElementOptions::new(), None);

        assert_eq!(
            render_document(&document, &RenderOptions::new()).unwrap(),
            "<html></html>"
        );
    }
}
