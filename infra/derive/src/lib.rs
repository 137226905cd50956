#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the lookup service: error enums,
//! feature slices, API models/handlers and the runtime entry point.
//!
//! Doc examples are `ignore`d because a proc-macro crate cannot use its own macros;
//! working usages live in the consuming crates and in `tests/ui`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Turns an `async fn main` into a plain `fn main` running on a preconfigured Tokio runtime.
///
/// Accepted profiles: `high_performance`, `default` (or no argument).
/// The function must be `async` and return a `Result`.
///
/// ```rust,ignore
/// #[mdc_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares an API data model (DTO).
///
/// Adds `Debug`, `Serialize` and `Deserialize` when missing, `utoipa::ToSchema` when the
/// consuming crate builds with its `server` feature, `rename_all = "camelCase"` and
/// `deny_unknown_fields` unless told otherwise.
///
/// ```rust,ignore
/// #[mdc_derive::api_model(deny_unknown_fields = false)]
/// pub struct Entity {
///     pub code: String,
///     pub label: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Registers an Axum handler with `utoipa::path` (under the `server` feature).
///
/// Arguments are forwarded verbatim to `utoipa::path`.
///
/// ```rust,ignore
/// #[mdc_derive::api_handler(
///     get,
///     path = "/lookup/{type}/{name}",
///     responses((status = OK, body = [Entity])),
///     tag = LOOKUP_TAG,
/// )]
/// pub async fn lookup_handler(/* extractors */) -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Declares a crate error enum.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` when not already derived.
/// * `<Name>Ext` trait with `.context(...)` on `Result<T, Name>` and on
///   `Result<T, Source>` for every variant that wraps a source error.
/// * `From<Source>` for variants with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. Variants carrying a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[mdc_derive::mdc_error]
/// pub enum SearchError {
///     #[error("Search transport error{}: {source}", format_context(.context))]
///     Http { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal search error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn mdc_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Declares a vertical slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`,
/// derefs to it and implements `FeatureSlice` so the kernel can register it.
///
/// ```rust,ignore
/// #[mdc_derive::mdc_slice]
/// pub struct Lookup {
///     pub service: LookupService,
/// }
///
/// let slice = Lookup::new(LookupInner { service });
/// ```
#[proc_macro_attribute]
pub fn mdc_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
