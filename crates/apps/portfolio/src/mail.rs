use leptos::*;

/// Address the mail form writes to.
pub const MAIL_RECIPIENT: &str = "hello@example.com";

/// Percent-encodes a mailto header value (RFC 6068 reserves everything but unreserved chars).
fn encode_mailto_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

fn mailto_href(name: &str, reply_to: &str, message: &str) -> String {
    let subject = match name.trim() {
        "" => "Hello from your desktop".to_string(),
        name => format!("Hello from {name}"),
    };
    let mut body = message.trim().to_string();
    if !reply_to.trim().is_empty() {
        body.push_str("\n\nReply to: ");
        body.push_str(reply_to.trim());
    }
    format!(
        "mailto:{MAIL_RECIPIENT}?subject={}&body={}",
        encode_mailto_component(&subject),
        encode_mailto_component(&body)
    )
}

#[component]
/// Contact form that hands the composed message to the visitor's mail client.
pub fn MailForm() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let reply_to = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let can_send = move || message.with(|m| !m.trim().is_empty());
    let href = move || mailto_href(&name.get(), &reply_to.get(), &message.get());

    view! {
        <form class="panel mail-panel" on:submit=|ev| ev.prevent_default()>
            <label>
                "Name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Your email"
                <input
                    type="email"
                    prop:value=move || reply_to.get()
                    on:input=move |ev| reply_to.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Message"
                <textarea
                    rows="6"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <a
                class=move || if can_send() { "win95-button" } else { "win95-button disabled" }
                href=move || if can_send() { href() } else { String::new() }
                aria-disabled=move || (!can_send()).to_string()
            >
                "Send"
            </a>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mailto_encodes_subject_and_body() {
        assert_eq!(
            mailto_href("Ada", "ada@example.com", "Hi there!"),
            "mailto:hello@example.com?subject=Hello%20from%20Ada\
             &body=Hi%20there%21%0A%0AReply%20to%3A%20ada%40example.com"
        );
    }

    #[test]
    fn anonymous_mail_uses_generic_subject_and_no_reply_line() {
        let href = mailto_href("  ", "", "ping");
        assert!(href.contains("subject=Hello%20from%20your%20desktop"));
        assert!(href.ends_with("&body=ping"));
    }

    #[test]
    fn multibyte_text_is_encoded_per_byte() {
        assert_eq!(encode_mailto_component("é"), "%C3%A9");
    }
}
