use crate::images::ImageLookup;
use maud::{html, Markup};

/// Placeholder that asks the server for the model's image once it is on screen.
pub fn image_slot(model: &str) -> Markup {
    let query: String = url::form_urlencoded::byte_serialize(model.as_bytes()).collect();

    html! {
        div
            class="model-image"
            hx-get=(format!("/image?model={query}"))
            hx-trigger="load"
            hx-swap="outerHTML"
        {
            "Loading image…"
        }
    }
}

pub fn model_image(model: &str, lookup: &ImageLookup) -> Markup {
    html! {
        div class="model-image" {
            @match lookup {
                ImageLookup::Found(url) => {
                    figure style="margin: 0;" {
                        img src=(url) alt=(model) loading="lazy";
                        figcaption { (model) }
                    }
                }
                ImageLookup::NotFound => {
                    p { "Image not found." }
                }
            }
        }
    }
}
