use common::product::Product;
use dioxus::prelude::*;

fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[component]
pub fn ProductCard(product: ReadSignal<Product>) -> Element {
    let product = product.read().clone();
    let stars = "★".repeat(product.rating.round() as usize);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                padding: 14px;
                border-radius: 12px;
                background: white;
                border: 1px solid rgba(0,0,0,0.08);
                box-shadow: 0 2px 8px rgba(0,0,0,0.04);
            ",
            if let Some(image) = product.image.clone() {
                img { src: "{image}", alt: "{product.name}", style: "width: 100%; height: 200px; object-fit: contain;" }
            } else {
                div { style: "width: 100%; height: 200px; background: #EFE7DD; border-radius: 8px;" }
            }
            div { style: "font-size: 12px; color: #6B7280; text-transform: uppercase;", "{product.brand}" }
            div { style: "font-size: 16px; font-weight: 500;", "{product.name}" }
            div { style: "font-size: 13px; color: #B7791F;", "{stars} ({product.review_count})" }
            div {
                style: "display: flex; gap: 8px; align-items: baseline;",
                span { style: "font-size: 18px; font-weight: 600;", "{format_price(product.effective_price())}" }
                if product.is_discounted() {
                    span { style: "font-size: 13px; color: #9CA3AF; text-decoration: line-through;", "{format_price(product.price)}" }
                }
            }
        }
    }
}
