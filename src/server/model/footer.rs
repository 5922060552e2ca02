//! Page footer contact block.

use serde::Deserialize;

use crate::{
    model::page::{ContactLinkDto, FooterDto},
    server::util::text::non_empty,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterDocument {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub phone: Option<PhoneEntry>,
    pub email: Option<EmailEntry>,
    pub whatsapp: Option<PhoneEntry>,
    pub telegram: Option<TelegramEntry>,
    pub facebook: Option<FacebookEntry>,
    pub address: Option<AddressEntry>,
    pub google_maps: Option<MapEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhoneEntry {
    pub number: Option<String>,
    pub href: Option<String>,
    pub show: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailEntry {
    pub address: Option<String>,
    pub show: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelegramEntry {
    pub username: Option<String>,
    pub href: Option<String>,
    pub show: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FacebookEntry {
    pub url: Option<String>,
    pub show: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressEntry {
    pub text: Option<String>,
    pub show: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapEntry {
    pub show: Option<bool>,
    pub iframe_code: Option<String>,
}

/// Entries are shown unless the editor switched them off.
fn visible(show: Option<bool>) -> bool {
    show.unwrap_or(true)
}

impl FooterDocument {
    /// Returns `None` when no entry is left to display.
    pub fn into_dto(self) -> Option<FooterDto> {
        let phone = self.phone.filter(|p| visible(p.show)).and_then(|p| {
            let number = non_empty(p.number)?;
            let href = non_empty(p.href).unwrap_or_else(|| format!("tel:{}", dial_digits(&number)));
            Some(ContactLinkDto {
                label: number,
                href,
            })
        });

        let email = self.email.filter(|e| visible(e.show)).and_then(|e| {
            let address = non_empty(e.address)?;
            Some(ContactLinkDto {
                href: format!("mailto:{}", address),
                label: address,
            })
        });

        let whatsapp = self.whatsapp.filter(|w| visible(w.show)).and_then(|w| {
            let number = non_empty(w.number)?;
            let href = non_empty(w.href).unwrap_or_else(|| {
                format!("https://wa.me/{}", dial_digits(&number).trim_start_matches('+'))
            });
            Some(ContactLinkDto {
                label: number,
                href,
            })
        });

        let telegram = self.telegram.filter(|t| visible(t.show)).and_then(|t| {
            let username = non_empty(t.username)?;
            let username = username.trim_start_matches('@').to_string();
            let href = non_empty(t.href).unwrap_or_else(|| format!("https://t.me/{}", username));
            Some(ContactLinkDto {
                label: format!("@{}", username),
                href,
            })
        });

        let facebook = self.facebook.filter(|f| visible(f.show)).and_then(|f| {
            Some(ContactLinkDto {
                label: "Facebook".to_string(),
                href: non_empty(f.url)?,
            })
        });

        let address = self
            .address
            .filter(|a| visible(a.show))
            .and_then(|a| non_empty(a.text));

        let map_embed_url = self
            .google_maps
            .filter(|m| visible(m.show))
            .and_then(|m| m.iframe_code)
            .and_then(|code| map_embed_src(&code));

        let footer = FooterDto {
            title: non_empty(self.title),
            subtitle: non_empty(self.subtitle),
            phone,
            email,
            whatsapp,
            telegram,
            facebook,
            address,
            map_embed_url,
        };

        (footer != FooterDto::default()).then_some(footer)
    }
}

/// Keeps the characters a dialer understands: digits and a leading `+`.
fn dial_digits(number: &str) -> String {
    number
        .chars()
        .enumerate()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect()
}

/// Extracts the `src` URL of a pasted Google Maps `<iframe>` snippet.
///
/// A bare URL is accepted as is.
pub fn map_embed_src(code: &str) -> Option<String> {
    let code = code.trim();
    if code.starts_with("http://") || code.starts_with("https://") {
        return Some(code.to_string());
    }

    let start = code.find("src=")? + "src=".len();
    let rest = &code[start..];
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let rest = &rest[1..];
    let end = rest.find(quote)?;

    non_empty(Some(rest[..end].replace("&amp;", "&")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_iframe_src() {
        let code = r#"<iframe src="https://www.google.com/maps/embed?pb=!1m18&amp;z=1" width="600" style="border:0;"></iframe>"#;
        assert_eq!(
            map_embed_src(code),
            Some("https://www.google.com/maps/embed?pb=!1m18&z=1".to_string())
        );
        assert_eq!(
            map_embed_src(" https://maps.google.com/embed "),
            Some("https://maps.google.com/embed".to_string())
        );
        assert_eq!(map_embed_src("<iframe></iframe>"), None);
    }

    #[test]
    fn builds_contact_links() {
        let doc: FooterDocument = serde_json::from_value(json!({
            "title": "Contact us",
            "phone": {"number": "+998 (90) 123-45-67"},
            "email": {"address": "hello@example.com"},
            "whatsapp": {"number": "+998 90 123 45 67", "show": true},
            "telegram": {"username": "@kiutdental"},
            "facebook": {"url": "https://facebook.com/kiut", "show": false},
            "address": {"text": "Tashkent", "show": false},
            "googleMaps": {"iframeCode": "<iframe src='https://maps.example/e'></iframe>"}
        }))
        .unwrap();

        let footer = doc.into_dto().unwrap();
        assert_eq!(footer.phone.unwrap().href, "tel:+998901234567");
        assert_eq!(footer.email.unwrap().href, "mailto:hello@example.com");
        assert_eq!(footer.whatsapp.unwrap().href, "https://wa.me/998901234567");
        let telegram = footer.telegram.unwrap();
        assert_eq!(telegram.href, "https://t.me/kiutdental");
        assert_eq!(telegram.label, "@kiutdental");
        assert!(footer.facebook.is_none());
        assert!(footer.address.is_none());
        assert_eq!(footer.map_embed_url.as_deref(), Some("https://maps.example/e"));
    }

    #[test]
    fn explicit_hrefs_are_kept() {
        let doc: FooterDocument = serde_json::from_value(json!({
            "telegram": {"username": "kiut", "href": "https://t.me/kiut_support"}
        }))
        .unwrap();
        assert_eq!(doc.into_dto().unwrap().telegram.unwrap().href, "https://t.me/kiut_support");
    }

    #[test]
    fn empty_footer_is_omitted() {
        let doc: FooterDocument = serde_json::from_value(json!({
            "phone": {"number": "", "show": true},
            "email": {"address": "a@b.co", "show": false}
        }))
        .unwrap();
        assert!(doc.into_dto().is_none());
    }
}
