#![deny(missing_docs)]

//! # Terminal Display Helpers
//!
//! Method badges and the document header, shared by the read-only
//! commands.

use apix_core::{document_title, method_accent, ApiDocument, HttpMethod, MethodAccent};

const RESET: &str = "\x1b[0m";

fn accent_code(accent: MethodAccent) -> &'static str {
    match accent {
        MethodAccent::Primary => "\x1b[34m",
        MethodAccent::Success => "\x1b[32m",
        MethodAccent::Warning => "\x1b[33m",
        MethodAccent::Danger => "\x1b[31m",
        MethodAccent::Neutral => "\x1b[90m",
    }
}

/// Fixed-width, colored method label.
pub fn method_badge(method: HttpMethod) -> String {
    format!(
        "{}{:<7}{}",
        accent_code(method_accent(method)),
        method.as_str(),
        RESET
    )
}

/// Prints the document header: title, description, version, host, schemes.
pub fn print_header(document: &ApiDocument) {
    println!("{}", document_title(&document.info));
    if let Some(description) = &document.info.description {
        println!("{}", description);
    }

    let mut facts = Vec::new();
    if let Some(version) = &document.info.version {
        facts.push(format!("Version {}", version));
    }
    if let Some(host) = &document.host {
        facts.push(host.clone());
    }
    if !document.schemes.is_empty() {
        facts.push(document.schemes.join(", "));
    }
    if !facts.is_empty() {
        println!("{}", facts.join(" | "));
    }
}
