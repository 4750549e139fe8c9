use contracts::domain::a003_catalog_entry::CatalogEntry;
use contracts::usecases::u602_render_page::{SocialLink, StoreProfile};
use serde_json::json;

use super::assets::{
    CART_SCRIPT, CONFIG_ELEMENT_ID, FONTS_CSS, FONT_AWESOME_CSS, STYLES, SWIPER_CSS, SWIPER_JS,
};
use super::cart::CartItem;
use super::document::{Document, Element, Node, ScriptCall};
use super::escape::script_json;

/// Текст заглушки, когда ни один товар фида не найден в таблице
pub const NO_MATCHES_TEXT: &str = "No se encontraron productos que coincidan con el Excel.";

const ADD_TO_CART_HANDLER: &str = "agregarCarrito";

/// Собрать HTML-документ каталога.
///
/// Одна карточка на позицию в порядке `entries`; пустой список даёт ровно одну заглушку.
pub fn render_page(profile: &StoreProfile, entries: &[CatalogEntry]) -> String {
    let contact = profile.contact_digits();
    if contact.is_empty() {
        tracing::warn!(
            "Contact number {:?} has no digits, WhatsApp link is disabled",
            profile.contact_number
        );
    }

    let page_config = json!({
        "storeName": profile.store_name,
        "currency": profile.currency_symbol,
        "contact": contact,
    });

    let catalog = Element::new("div").class("catalogo").id("catalogo");
    let catalog = if entries.is_empty() {
        catalog.child(Element::new("div").class("sin-resultados").text(NO_MATCHES_TEXT))
    } else {
        catalog.children(
            entries
                .iter()
                .enumerate()
                .map(|(i, entry)| product_card(i, entry, &profile.currency_symbol)),
        )
    };

    Document::new("es")
        .head(Element::new("meta").attr("charset", "UTF-8"))
        .head(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .head(Element::new("title").text(profile.store_name.as_str()))
        .head(stylesheet(FONTS_CSS))
        .head(stylesheet(SWIPER_CSS))
        .head(stylesheet(FONT_AWESOME_CSS))
        .head(Element::new("style").raw(STYLES))
        .body(header(profile))
        .body(cart_panel())
        .body(catalog)
        .body(
            Element::new("script")
                .attr("type", "application/json")
                .id(CONFIG_ELEMENT_ID)
                .raw(script_json(&page_config)),
        )
        .body(Element::new("script").attr("src", SWIPER_JS))
        .body(Element::new("script").raw(CART_SCRIPT))
        .render()
}

fn stylesheet(href: &'static str) -> Element {
    Element::new("link").attr("rel", "stylesheet").attr("href", href)
}

fn header(profile: &StoreProfile) -> Element {
    let redes = Element::new("div")
        .class("redes")
        .children(profile.active_links().into_iter().map(social_link));

    let toggle = Element::new("div")
        .id("toggleCarrito")
        .attr("title", "Ver carrito")
        .attr("aria-label", "Ver carrito")
        .child(Element::new("span").text("🛒"))
        .child(Element::new("span").class("badge").id("cart-count").text("0"));

    Element::new("header").child(
        Element::new("div")
            .class("header-inner")
            .child(Element::new("h1").text(profile.store_name.as_str()))
            .child(
                Element::new("div")
                    .class("header-right")
                    .child(redes)
                    .child(toggle),
            ),
    )
}

fn social_link(link: &SocialLink) -> Element {
    Element::new("a")
        .id(link.platform.element_id())
        .attr("href", link.url.trim())
        .attr("title", link.platform.title())
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .child(Element::new("i").class(link.platform.icon_class()))
}

fn cart_panel() -> Element {
    Element::new("div")
        .id("carrito")
        .attr("aria-hidden", "true")
        .child(
            Element::new("button")
                .id("cerrarCarrito")
                .attr("aria-label", "Cerrar carrito")
                .text("✖"),
        )
        .child(Element::new("h3").text("Carrito"))
        .child(Element::new("ul").id("lista-carrito"))
        .child(Element::new("div").id("carrito-total"))
        .child(
            Element::new("a")
                .id("whatsapp")
                .class("disabled")
                .attr("href", "#")
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .text("Carrito vacío"),
        )
}

fn product_card(index: usize, entry: &CatalogEntry, currency: &str) -> Node {
    let slides: Vec<Element> = if entry.has_images() {
        entry
            .images
            .iter()
            .map(|src| {
                Element::new("div").class("swiper-slide").child(
                    Element::new("img")
                        .attr("src", src.as_str())
                        .attr("alt", entry.name.as_str()),
                )
            })
            .collect()
    } else {
        vec![Element::new("div")
            .class("swiper-slide sin-imagen")
            .text("Sin imagen")]
    };

    let item = CartItem::from(entry);
    let add = ScriptCall::new(ADD_TO_CART_HANDLER, [item.name, item.price, item.sizes]);

    Element::new("div")
        .class("producto")
        .child(Element::new("h2").text(entry.name.as_str()))
        .child(
            Element::new("div")
                .class("precio")
                .text(format!("Precio: {}{}", currency, entry.price)),
        )
        .child(
            Element::new("div")
                .class("tallas")
                .text(format!("Tallas disponibles: {}", entry.sizes)),
        )
        .child(
            Element::new("div")
                .class("swiper")
                .id(format!("swiper-{}", index))
                .child(Element::new("div").class("swiper-wrapper").children(slides))
                .child(Element::new("div").class("swiper-pagination")),
        )
        .child(
            Element::new("button")
                .class("boton")
                .on_click(add)
                .text("🛒 Agregar al carrito"),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u602_render_page::SocialPlatform;

    fn profile() -> StoreProfile {
        StoreProfile {
            store_name: "Regate FutStore".to_string(),
            currency_symbol: "₡".to_string(),
            contact_number: "50670107098".to_string(),
            social_links: vec![
                SocialLink {
                    platform: SocialPlatform::Facebook,
                    url: "https://fb.test/regate".to_string(),
                },
                SocialLink {
                    platform: SocialPlatform::Instagram,
                    url: String::new(),
                },
            ],
        }
    }

    fn entry(name: &str, images: &[&str]) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            price: "15000".to_string(),
            sizes: "38-42".to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_catalog_has_single_placeholder() {
        let html = render_page(&profile(), &[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert_eq!(html.matches(NO_MATCHES_TEXT).count(), 1);
        assert!(!html.contains("class=\"producto\""));
    }

    #[test]
    fn test_cards_in_input_order() {
        let entries = vec![entry("Zeta", &[]), entry("Alfa", &[]), entry("Media", &[])];
        let html = render_page(&profile(), &entries);

        let positions: Vec<usize> = ["<h2>Zeta</h2>", "<h2>Alfa</h2>", "<h2>Media</h2>"]
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("id=\"swiper-0\""));
        assert!(html.contains("id=\"swiper-2\""));
        assert!(!html.contains(NO_MATCHES_TEXT));
    }

    #[test]
    fn test_card_with_and_without_images() {
        let html = render_page(
            &profile(),
            &[
                entry("Con fotos", &["https://cdn.test/1.jpg", "https://cdn.test/2.jpg"]),
                entry("Sin fotos", &[]),
            ],
        );
        assert_eq!(html.matches("class=\"swiper-slide\"").count(), 2);
        assert_eq!(html.matches(">Sin imagen</div>").count(), 1);
        assert!(html.contains(r#"<img src="https://cdn.test/1.jpg" alt="Con fotos">"#));
        assert!(html.contains("Precio: ₡15000"));
        assert!(html.contains("Tallas disponibles: 38-42"));
    }

    #[test]
    fn test_only_active_social_links() {
        let html = render_page(&profile(), &[]);
        assert!(html.contains(r#"<a id="link-facebook" href="https://fb.test/regate""#));
        assert!(!html.contains("link-instagram"));
        assert!(!html.contains("link-twitter"));
    }

    #[test]
    fn test_hostile_names_are_escaped_everywhere() {
        let name = r#"Bota <script>alert("x")</script> O'Neil \"#;
        let html = render_page(&profile(), &[entry(name, &["https://cdn.test/a.jpg"])]);

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("<h2>Bota &lt;script&gt;alert(\"x\")&lt;/script&gt; O'Neil \\</h2>"));
        assert!(html.contains(
            r#"onclick="agregarCarrito('Bota &lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; O\'Neil \\', '15000', '38-42')""#
        ));
    }

    #[test]
    fn test_page_config_block() {
        let mut store = profile();
        store.store_name = "A&B </script>".to_string();
        store.contact_number = "+506 7010-7098".to_string();
        let html = render_page(&store, &[]);

        assert_eq!(html.matches("</script>").count(), 3);
        assert!(html.contains(r#"<script type="application/json" id="catalog-config">{"#));
        assert!(html.contains(r#""contact":"50670107098""#));
        assert!(html.contains(r#""storeName":"A\u0026B \u003c/script\u003e""#));
        assert!(html.contains("<title>A&amp;B &lt;/script&gt;</title>"));
    }

    #[test]
    fn test_contact_without_digits_still_renders() {
        let mut store = profile();
        store.contact_number = "pendiente".to_string();
        let html = render_page(&store, &[entry("Bota X", &[])]);
        assert!(html.contains(r#""contact":"""#));
        assert!(html.contains("<h2>Bota X</h2>"));
    }
}
