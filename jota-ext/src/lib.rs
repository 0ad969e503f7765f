//! jota Extension Function Pack
//!
//! Eleven named functions bound into a host JSON query/transform engine:
//! HTML-to-text, UUID base codecs, locale lookup, URL and path parsing,
//! date-time and duration parsing, template rendering, ASCII folding, and
//! word-aware truncation. Every function is a thin adapter over a delegate
//! library; the undefined-propagation convention and the signature encoding
//! are applied uniformly at registration time by `jota-plugin`.

mod ascii;
mod datetime;
mod helpers;
mod html;
mod locale;
mod locale_data;
mod template;
mod truncate;
mod urlpath;
mod uuid_codec;

pub use truncate::{truncate, TruncateOptions};
pub use uuid_codec::{shorten, unshorten, Base};

use jota_core::ExtError;
use jota_plugin::{ExtensionSet, HostEngine};

/// The fixed set of extension functions, in registration order
pub fn load_extensions() -> ExtensionSet {
    ExtensionSet::new()
        .with_function(html::HtmlToText)
        .with_function(uuid_codec::ShortenUuid)
        .with_function(uuid_codec::UnshortenUuid)
        .with_function(locale::LanguageInfo)
        .with_function(urlpath::ParseUrl)
        .with_function(urlpath::ParsePath)
        .with_function(datetime::ParseDateTime)
        .with_function(datetime::ParseDuration)
        .with_function(template::RenderTemplate)
        .with_function(ascii::ToAscii)
        .with_function(truncate::Truncate)
}

/// Bind the extension functions into `host`. Fails with the invalid-host
/// error when no engine is supplied.
pub fn register_extensions(host: Option<&mut dyn HostEngine>) -> Result<(), ExtError> {
    load_extensions().register_into(host)
}
