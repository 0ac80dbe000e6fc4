mod color_macro;

use proc_macro2::{Ident, Span, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::quote;

/// Checks a `"#rrggbb"` literal at compile time and expands to it unchanged.
#[proc_macro]
pub fn hex_color(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    color_macro::hex_color(input.into()).into()
}

/// Turns a `"#rrggbb"` literal into a constant `Color`.
#[proc_macro]
pub fn color(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match duotone_crate() {
        Ok(api) => color_macro::color(input.into(), api),
        Err(error) => error,
    }
    .into()
}

// the facade is preferred, users depending only on duotone_core get its api
fn duotone_crate() -> Result<TokenStream, TokenStream> {
    crate_name("duotone")
        .or_else(|_| crate_name("duotone_core"))
        .map(|found| macro_api_path(&found))
        .map_err(|e| {
            let error = format!("color! needs duotone or duotone_core as a dependency: {}", e);
            quote!(compile_error!(#error))
        })
}

fn macro_api_path(found: &FoundCrate) -> TokenStream {
    match found {
        FoundCrate::Itself => quote!(crate::_macro_api),
        FoundCrate::Name(name) => {
            let ident = Ident::new(name, Span::call_site());
            quote!( #ident::_macro_api )
        }
    }
}
