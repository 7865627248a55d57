//! HTML rendering
//!
//! Every view is a small HTML document built around [`layout`], which also
//! shows pending flash notices. All catalog and user text goes through
//! [`escape`].

use std::fmt::Write;

use crate::{
    cart::CartSummary,
    catalog::{models::format_price, Item},
};

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wraps `body` in the site chrome.
pub fn layout(title: &str, flashes: &[String], body: &str) -> String {
    let mut notices = String::new();
    if !flashes.is_empty() {
        notices.push_str("<ul class=\"flashes\">\n");
        for message in flashes {
            let _ = writeln!(notices, "  <li class=\"flash\">{}</li>", escape(message));
        }
        notices.push_str("</ul>\n");
    }

    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} - Ubermelon</title>\n\
         </head>\n\
         <body>\n\
         <nav>\n\
         <a href=\"/\">Ubermelon</a>\n\
         <a href=\"/melons\">Melons</a>\n\
         <a href=\"/cart\">Shopping Cart</a>\n\
         <a href=\"/login\">Log In</a>\n\
         </nav>\n\
         {notices}\
         <main>\n\
         {body}\
         </main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// Landing page
pub fn homepage(flashes: &[String]) -> String {
    layout(
        "Home",
        flashes,
        "<h1>Ubermelon</h1>\n\
         <p>The finest melons, delivered.</p>\n\
         <p><a href=\"/melons\">Browse our melons</a></p>\n",
    )
}

/// Every melon in the catalog, each linking to its detail page
pub fn all_melons(melons: &[Item], flashes: &[String]) -> String {
    let mut body = String::from("<h1>Our Melons</h1>\n<ul class=\"melons\">\n");
    for melon in melons {
        let _ = writeln!(
            body,
            "  <li><a href=\"/melon/{}\">{}</a> {}</li>",
            melon.id,
            escape(&melon.common_name),
            melon.price_str()
        );
    }
    body.push_str("</ul>\n");

    layout("Melons", flashes, &body)
}

/// Detail page for one melon, with an add-to-cart link
pub fn melon_details(melon: &Item, flashes: &[String]) -> String {
    let body = format!(
        "<h1>{name}</h1>\n\
         <img src=\"{image_url}\" alt=\"{name}\">\n\
         <dl class=\"melon\">\n\
         <dt>Type</dt><dd>{melon_type}</dd>\n\
         <dt>Color</dt><dd>{color}</dd>\n\
         <dt>Seedless</dt><dd>{seedless}</dd>\n\
         <dt>Price</dt><dd>{price}</dd>\n\
         </dl>\n\
         <p><a href=\"/add_to_cart/{id}\">Add to cart</a></p>\n",
        name = escape(&melon.common_name),
        image_url = escape(&melon.image_url),
        melon_type = escape(&melon.melon_type),
        color = escape(&melon.color),
        seedless = if melon.seedless { "Yes" } else { "No" },
        price = melon.price_str(),
        id = melon.id,
    );

    layout(&melon.common_name, flashes, &body)
}

/// Cart lines with quantities, subtotals and the order total
pub fn cart(summary: &CartSummary, flashes: &[String]) -> String {
    let mut body = String::from("<h1>Shopping Cart</h1>\n");

    if !summary.missing.is_empty() {
        let ids = summary
            .missing
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            body,
            "<p class=\"missing\">Some melons are no longer available and were left out: {ids}</p>"
        );
    }

    if summary.is_empty() {
        body.push_str("<p class=\"empty\">Your cart is empty.</p>\n");
    } else {
        body.push_str(
            "<table class=\"cart\">\n\
             <tr><th>Melon</th><th>Price</th><th>Quantity</th><th>Total</th></tr>\n",
        );
        for line in &summary.lines {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&line.common_name),
                format_price(line.unit_cost),
                line.quantity,
                format_price(line.line_total)
            );
        }
        body.push_str("</table>\n");
    }

    let _ = writeln!(
        body,
        "<p class=\"order-total\">Order total: {}</p>\n<p><a href=\"/checkout\">Check out</a></p>",
        format_price(summary.order_total)
    );

    layout("Shopping Cart", flashes, &body)
}

/// Login form posting back to `/login`
pub fn login_form(flashes: &[String]) -> String {
    layout(
        "Log In",
        flashes,
        "<h1>Log In</h1>\n\
         <form action=\"/login\" method=\"POST\">\n\
         <label>Email <input type=\"email\" name=\"email\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Log In</button>\n\
         </form>\n",
    )
}

/// Client error page
pub fn not_found(message: &str) -> String {
    let body = format!(
        "<h1>Not Found</h1>\n<p>{}</p>\n<p><a href=\"/melons\">Back to all melons</a></p>\n",
        escape(message)
    );

    layout("Not Found", &[], &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_neutralises_markup() {
        assert_eq!(
            escape("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_layout_lists_flashes() {
        let page = layout("Home", &["Saved <ok>".to_string()], "<p>hi</p>\n");

        assert!(page.contains("<li class=\"flash\">Saved &lt;ok&gt;</li>"));
        assert!(page.contains("<p>hi</p>"));
    }

    #[test]
    fn test_layout_without_flashes_has_no_list() {
        let page = layout("Home", &[], "");

        assert!(!page.contains("class=\"flashes\""));
    }

    #[test]
    fn test_empty_cart_page() {
        let page = cart(&CartSummary::default(), &[]);

        assert!(page.contains("Your cart is empty."));
        assert!(page.contains("Order total: $0.00"));
    }
}
