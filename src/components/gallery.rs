use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config::GalleryItem;

/// A section is revealed once its top edge is this far above the viewport bottom.
const REVEAL_MARGIN_PX: f64 = 100.0;
const SLIDE_DISTANCE_PX: i32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GallerySide {
    ImageLeft,
    ImageRight,
}

impl GallerySide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            GallerySide::ImageLeft
        } else {
            GallerySide::ImageRight
        }
    }

    /// Horizontal offset the section slides in from.
    pub fn entry_offset(self) -> i32 {
        match self {
            GallerySide::ImageLeft => -SLIDE_DISTANCE_PX,
            GallerySide::ImageRight => SLIDE_DISTANCE_PX,
        }
    }

    fn class(self) -> &'static str {
        match self {
            GallerySide::ImageLeft => "gallery-section image-left",
            GallerySide::ImageRight => "gallery-section image-right",
        }
    }
}

pub fn ordinal_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub fn should_reveal(section_top: f64, viewport_height: f64) -> bool {
    section_top < viewport_height - REVEAL_MARGIN_PX
}

fn reveal_if_visible(node: &NodeRef, revealed: &UseStateHandle<bool>) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(viewport_height) = window.inner_height().ok().and_then(|h| h.as_f64()) else {
        return false;
    };
    match node.cast::<Element>() {
        Some(el) if should_reveal(el.get_bounding_client_rect().top(), viewport_height) => {
            revealed.set(true);
            true
        }
        _ => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct GallerySectionProps {
    pub index: usize,
    pub item: GalleryItem,
}

#[function_component(GallerySection)]
pub fn gallery_section(props: &GallerySectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let mut done = reveal_if_visible(&node, &revealed);

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if !done {
                        done = reveal_if_visible(&node, &revealed);
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        warn!("Failed to watch scroll for gallery reveal: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        if let Err(e) = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                            warn!("Failed to remove gallery scroll listener: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    let side = GallerySide::for_index(props.index);
    let motion = if *revealed {
        "opacity: 1; transform: translateX(0);".to_string()
    } else {
        format!("opacity: 0; transform: translateX({}px);", side.entry_offset())
    };

    html! {
        <section ref={node} class={side.class()} style={motion}>
            <div class="gallery-image">
                <img src={props.item.url.clone()} alt={props.item.caption.clone()} referrerpolicy="no-referrer" />
            </div>
            <div class="gallery-text">
                <span class="gallery-ordinal">{ordinal_label(props.index)}</span>
                <h2>{&props.item.caption}</h2>
                <div class="gallery-rule"></div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub items: Vec<GalleryItem>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    html! {
        <>
            { for props.items.iter().enumerate().map(|(index, item)| html! {
                <GallerySection key={index} index={index} item={item.clone()} />
            }) }
            <style>
                {r#"
                .gallery-section {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                    margin-bottom: 8rem;
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                }
                .gallery-section.image-right {
                    flex-direction: row-reverse;
                }
                .gallery-image {
                    width: 50%;
                    aspect-ratio: 4 / 5;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(254, 205, 211, 0.5);
                }
                .gallery-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s;
                }
                .gallery-image img:hover {
                    transform: scale(1.05);
                }
                .gallery-text {
                    width: 50%;
                    text-align: left;
                }
                .gallery-ordinal {
                    display: block;
                    color: #fda4af;
                    font-family: monospace;
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }
                .gallery-text h2 {
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 1.875rem;
                    margin-bottom: 1rem;
                }
                .gallery-rule {
                    height: 1px;
                    width: 5rem;
                    background: #fecdd3;
                }
                @media (max-width: 768px) {
                    .gallery-section,
                    .gallery-section.image-right {
                        flex-direction: column;
                    }
                    .gallery-image,
                    .gallery-text {
                        width: 100%;
                        text-align: center;
                    }
                    .gallery-rule {
                        margin: 0 auto;
                    }
                }
                "#}
            </style>
        </>
    }
}
