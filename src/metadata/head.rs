use super::MetadataRecord;
use html_escape::{encode_double_quoted_attribute, encode_text};
use log::warn;
use std::fmt::Write;

/// Render a [`MetadataRecord`] as `<head>` markup: title, description,
/// keywords, Open Graph and Twitter card tags, plus the JSON-LD block when
/// the record carries structured data.
pub fn render_head(metadata: &MetadataRecord) -> String {
    let mut head = String::new();

    let _ = writeln!(head, "<title>{}</title>", encode_text(&metadata.title));
    push_meta(&mut head, "name", "description", &metadata.description);
    if !metadata.keywords.is_empty() {
        push_meta(&mut head, "name", "keywords", &metadata.keywords.join(", "));
    }

    push_meta(&mut head, "property", "og:title", &metadata.title);
    push_meta(&mut head, "property", "og:description", &metadata.description);
    let og_type = if metadata.structured_data.is_some() {
        "article"
    } else {
        "website"
    };
    push_meta(&mut head, "property", "og:type", og_type);

    let card = match &metadata.image {
        Some(image) => {
            push_meta(&mut head, "property", "og:image", image);
            "summary_large_image"
        }
        None => "summary",
    };
    push_meta(&mut head, "name", "twitter:card", card);
    push_meta(&mut head, "name", "twitter:title", &metadata.title);
    push_meta(&mut head, "name", "twitter:description", &metadata.description);
    if let Some(image) = &metadata.image {
        push_meta(&mut head, "name", "twitter:image", image);
    }

    if let Some(data) = &metadata.structured_data {
        match data.to_json() {
            Ok(json) => {
                // Keep a literal "</script>" inside string values from closing the block
                let json = json.replace("</", "<\\/");
                let _ = writeln!(
                    head,
                    "<script type=\"application/ld+json\">{json}</script>"
                );
            }
            Err(e) => warn!("Skipping structured data block: {}", e),
        }
    }

    head
}

fn push_meta(head: &mut String, attr: &str, key: &str, content: &str) {
    let _ = writeln!(
        head,
        "<meta {attr}=\"{key}\" content=\"{}\">",
        encode_double_quoted_attribute(content)
    );
}
