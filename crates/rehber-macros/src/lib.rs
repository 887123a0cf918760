use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ItemStruct, LitStr};

/// Shape of a route pattern, checked when the attribute is expanded.
#[derive(Debug, PartialEq)]
enum Pattern {
    Page(String),
    File(String),
    Param { prefix: String, name: String },
}

fn parse_pattern(raw: &str) -> Result<Pattern, String> {
    if !raw.starts_with('/') {
        return Err(format!("route `{raw}` must start with `/`"));
    }

    let (prefix, last) = raw.rsplit_once('/').unwrap_or(("", raw));
    if prefix.contains(['[', ']']) {
        return Err(format!(
            "route `{raw}` can only have a parameter in its last segment"
        ));
    }

    match last.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        Some(name) if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') => {
            Ok(Pattern::Param {
                prefix: format!("{prefix}/"),
                name: name.to_string(),
            })
        }
        Some(_) => Err(format!("route `{raw}` has an invalid parameter name")),
        None if last.contains(['[', ']']) => Err(format!(
            "route `{raw}` mixes a parameter with other text in the same segment"
        )),
        None if last.contains('.') => Ok(Pattern::File(raw.to_string())),
        None => Ok(Pattern::Page(raw.to_string())),
    }
}

fn pattern_tokens(pattern: &Pattern) -> TokenStream2 {
    match pattern {
        Pattern::Page(path) => quote! { rehber::route::RoutePattern::Page(#path) },
        Pattern::File(path) => quote! { rehber::route::RoutePattern::File(#path) },
        Pattern::Param { prefix, name } => quote! {
            rehber::route::RoutePattern::Param { prefix: #prefix, name: #name }
        },
    }
}

/// Registers a struct implementing `rehber::route::Route` as a route served at the given pattern.
///
/// Patterns are either a plain path (`/`), a file (`/404.html`) or a path ending in a single parameter (`/rehber/[guide]`).
#[proc_macro_attribute]
pub fn route(attrs: TokenStream, item: TokenStream) -> TokenStream {
    let item_struct = syn::parse_macro_input!(item as ItemStruct);
    let raw = syn::parse_macro_input!(attrs as LitStr);

    let pattern = match parse_pattern(&raw.value()) {
        Ok(pattern) => pattern_tokens(&pattern),
        Err(message) => return syn::Error::new(raw.span(), message).to_compile_error().into(),
    };

    let struct_name = &item_struct.ident;

    let expanded = quote! {
        impl rehber::route::FullRoute for #struct_name {
            fn pattern(&self) -> rehber::route::RoutePattern {
                #pattern
            }

            fn pages_internal(&self, ctx: &rehber::route::DynamicRouteContext) -> Vec<String> {
                rehber::route::Route::pages(self, ctx)
            }

            fn render_internal(&self, ctx: &rehber::route::PageContext) -> rehber::route::RenderResult {
                rehber::route::Route::render(self, ctx).into()
            }
        }

        #item_struct
    };

    TokenStream::from(expanded)
}
