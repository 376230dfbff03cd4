// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Receipt and invoice rendering for the Pahana Bookshop.
//!
//! Both renderers are pure functions of an order snapshot: they produce a
//! printable HTML document and a downloadable plain-text receipt. Nothing
//! here touches the network or any store; triggering a print dialog or a
//! file download is the caller's concern.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use pahana_shop_domain::{CompletedOrder, Money};
use std::fmt::Write as _;

#[cfg(test)]
mod tests;

/// The shop name printed on every document.
pub const SHOP_NAME: &str = "Pahana Bookshop";
/// The tagline printed under the shop name.
pub const SHOP_TAGLINE: &str = "Your trusted partner in discovering amazing books";
/// The shop address.
pub const SHOP_ADDRESS: &str = "Tangalle, Southern Province, Sri Lanka";
/// The shop website printed in the plain-text footer.
pub const SHOP_WEBSITE: &str = "www.pahanabookshop.com";

/// Renders an order snapshot as a standalone printable HTML document.
///
/// The document contains the shop identity block, the customer block, an
/// itemized table (name, quantity, unit price, line total), the
/// subtotal/tax/shipping/total block, the optional notes, and a footer.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn render_printable(order: &CompletedOrder) -> String {
    let mut html: String = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <title>Receipt - {id}</title>\n\
         <style>\n\
         body {{ font-family: Arial, sans-serif; margin: 40px; color: #111; }}\n\
         .header {{ text-align: center; border-bottom: 2px solid #4f46e5; padding-bottom: 20px; }}\n\
         .order-info {{ margin: 20px 0; }}\n\
         .items-table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}\n\
         .items-table th, .items-table td {{ border: 1px solid #ddd; padding: 10px; text-align: left; }}\n\
         .items-table th {{ background: #f3f4f6; }}\n\
         .totals {{ margin-top: 20px; }}\n\
         .total-row {{ display: flex; justify-content: space-between; margin: 5px 0; }}\n\
         .final-total {{ font-weight: bold; font-size: 18px; border-top: 2px solid #4f46e5; padding-top: 10px; }}\n\
         .footer {{ text-align: center; margin-top: 30px; color: #666; }}\n\
         </style>\n\
         </head>\n\
         <body>\n",
        id = escape_html(&order.order_id)
    );

    let _ = write!(
        html,
        "<div class=\"header\">\n\
         <h1>{SHOP_NAME}</h1>\n\
         <p>{SHOP_TAGLINE}</p>\n\
         <p>{SHOP_ADDRESS}</p>\n\
         </div>\n"
    );

    let _ = write!(
        html,
        "<div class=\"order-info\">\n\
         <h2>Order Receipt</h2>\n\
         <p><strong>Order ID:</strong> {id}</p>\n\
         <p><strong>Date:</strong> {date}</p>\n\
         <p><strong>Customer:</strong> {name}</p>\n",
        id = escape_html(&order.order_id),
        date = order.completed_at.date(),
        name = escape_html(&order.customer.name),
    );
    if let Some(account) = &order.customer.account_number {
        let _ = write!(
            html,
            "<p><strong>Account:</strong> {}</p>\n",
            escape_html(account)
        );
    }
    let _ = write!(
        html,
        "<p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Phone:</strong> {phone}</p>\n\
         <p><strong>Address:</strong> {address}</p>\n\
         </div>\n",
        email = escape_html(&order.customer.email),
        phone = escape_html(&order.customer.phone),
        address = escape_html(&order.customer.address),
    );

    html.push_str(
        "<table class=\"items-table\">\n\
         <thead>\n\
         <tr><th>Description</th><th>Qty</th><th>Rate</th><th>Amount</th></tr>\n\
         </thead>\n\
         <tbody>\n",
    );
    for line in &order.line_items {
        let _ = write!(
            html,
            "<tr><td>{name}</td><td>{qty}</td><td>{rate}</td><td>{amount}</td></tr>\n",
            name = escape_html(&line.name),
            qty = line.quantity,
            rate = line.unit_price,
            amount = line.line_total(),
        );
    }
    html.push_str("</tbody>\n</table>\n");

    let _ = write!(
        html,
        "<div class=\"totals\">\n\
         <div class=\"total-row\"><span>Subtotal:</span><span>{subtotal}</span></div>\n\
         <div class=\"total-row\"><span>Tax ({rate}):</span><span>{tax}</span></div>\n",
        subtotal = order.totals.subtotal,
        rate = order.totals.tax_percent_label(),
        tax = order.totals.tax,
    );
    if let Some(shipping) = order.totals.shipping {
        let _ = write!(
            html,
            "<div class=\"total-row\"><span>Shipping:</span><span>{}</span></div>\n",
            shipping_label(shipping)
        );
    }
    let _ = write!(
        html,
        "<div class=\"total-row final-total\"><span>Total:</span><span>{total}</span></div>\n\
         </div>\n",
        total = order.totals.total,
    );

    if let Some(notes) = &order.notes {
        let _ = write!(
            html,
            "<div class=\"order-info\">\n\
             <h3>Notes</h3>\n\
             <p>{}</p>\n\
             </div>\n",
            escape_html(notes)
        );
    }

    html.push_str(
        "<div class=\"footer\">\n\
         <p>Thank you for your business!</p>\n\
         </div>\n\
         </body>\n\
         </html>\n",
    );

    html
}

/// Renders an order snapshot as a downloadable plain-text receipt.
#[must_use]
pub fn render_text(order: &CompletedOrder) -> String {
    let mut text: String = String::new();
    let _ = write!(
        text,
        "{SHOP_NAME}\n\
         {SHOP_TAGLINE}\n\
         {SHOP_ADDRESS}\n\
         \n\
         ======================================\n\
        \u{20}           ORDER RECEIPT\n\
         ======================================\n\
         \n\
         Order ID: {id}\n\
         Date: {date}\n\
         Customer: {name}\n",
        id = order.order_id,
        date = order.completed_at.date(),
        name = order.customer.name,
    );
    if let Some(account) = &order.customer.account_number {
        let _ = write!(text, "Account: {account}\n");
    }
    let _ = write!(
        text,
        "Email: {email}\n\
         Phone: {phone}\n\
         \n\
         --------------------------------------\n\
         ITEMS ORDERED:\n\
         --------------------------------------\n",
        email = order.customer.email,
        phone = order.customer.phone,
    );
    for line in &order.line_items {
        let _ = write!(
            text,
            "{name}\n  Quantity: {qty} x {rate} = {amount}\n",
            name = line.name,
            qty = line.quantity,
            rate = line.unit_price,
            amount = line.line_total(),
        );
    }
    let _ = write!(
        text,
        "\n\
         --------------------------------------\n\
         ORDER SUMMARY:\n\
         --------------------------------------\n\
         Subtotal: {subtotal}\n\
         Tax ({rate}): {tax}\n",
        subtotal = order.totals.subtotal,
        rate = order.totals.tax_percent_label(),
        tax = order.totals.tax,
    );
    if let Some(shipping) = order.totals.shipping {
        let _ = write!(text, "Shipping: {}\n", shipping_label(shipping));
    }
    let _ = write!(
        text,
        "--------------------------------------\n\
         TOTAL: {total}\n\
         --------------------------------------\n",
        total = order.totals.total,
    );
    if let Some(notes) = &order.notes {
        let _ = write!(text, "\nNotes: {notes}\n");
    }
    let _ = write!(
        text,
        "\n\
         Thank you for shopping with {SHOP_NAME}!\n\
         Visit us at {SHOP_WEBSITE}\n"
    );

    text
}

/// Formats a shipping amount, showing free shipping as the word `Free`.
fn shipping_label(shipping: Money) -> String {
    if shipping.is_zero() {
        String::from("Free")
    } else {
        shipping.to_string()
    }
}

/// Escapes the characters that would break the HTML document structure.
fn escape_html(text: &str) -> String {
    let mut escaped: String = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
