use crate::{document::Document, element::Element, element_options::ElementOptions};
use core::convert::Infallible;
use std::path::PathBuf;

/// Builds a demo page.
pub fn demo_document(output: Option<PathBuf>) -> Document {
    let Ok(document) = Document::build::<Infallible>("html", ElementOptions::new(), output, |html| {
        html.attach(build_head()).attach(build_body());
        Ok(())
    });

    document
}

fn build_head() -> Element {
    let Ok(head) = Element::build::<Infallible>("head", ElementOptions::new(), |head| {
        let Ok(title) = Element::build::<Infallible>("title", ElementOptions::new(), |title| {
            title.set_text("Hello");
            Ok(())
        });
        head.attach(title);
        Ok(())
    });

    head
}

fn build_body() -> Element {
    let Ok(body) = Element::build::<Infallible>("body", ElementOptions::new(), |body| {
        let Ok(heading) = Element::build::<Infallible>(
            "h1",
            ElementOptions::new().set_classes(["main-text"]),
            |heading| {
                heading.set_text("Test");
                Ok(())
            },
        );
        body.attach(heading);

        let Ok(division) = Element::build::<Infallible>(
            "div",
            ElementOptions::new()
                .set_classes(["container", "container-fluid"])
                .set_attribute("id", "lead"),
            |division| {
                let Ok(paragraph) =
                    Element::build::<Infallible>("p", ElementOptions::new(), |paragraph| {
                        paragraph.set_text("Another test");
                        Ok(())
                    });
                division.attach(paragraph).attach(Element::new(
                    "img",
                    ElementOptions::new()
                        .set_void(true)
                        .set_attribute("src", "/icon.png")
                        .set_attribute("data_image", "responsive"),
                ));
                Ok(())
            },
        );
        body.attach(division);

        Ok(())
    });

    body
}
