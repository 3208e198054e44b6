// File: src/contact.rs
// Purpose: mailto links for the contact form

use urlencoding::encode;

/// Builds the `mailto:` URL the contact form opens
///
/// ```
/// let link = folio::contact::mailto_link("me@example.com", "Ada", "Hello");
/// assert_eq!(
///     link,
///     "mailto:me@example.com?subject=Portfolio%20message%20from%20Ada&body=Name%3A%20Ada%0A%0AMessage%3A%0AHello"
/// );
/// ```
pub fn mailto_link(to: &str, name: &str, message: &str) -> String {
    let name = name.trim();
    let sender = if name.is_empty() { "Someone" } else { name };

    let subject = format!("Portfolio message from {}", sender);
    let body = format!("Name: {}\n\nMessage:\n{}", name, message);

    format!("mailto:{}?subject={}&body={}", to, encode(&subject), encode(&body))
}
