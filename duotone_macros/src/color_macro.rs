use duotone_core::{color::channel_to_f32, hex::parse_rgb8};
use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::LitStr;

fn parse_literal(input: TokenStream) -> Result<(LitStr, [u8; 3]), TokenStream> {
    let literal: LitStr = syn::parse2(input).map_err(|e| e.to_compile_error())?;
    match parse_rgb8(&literal.value()) {
        Ok(rgb) => Ok((literal, rgb)),
        Err(e) => {
            let error = format!("{}", e);
            Err(quote::quote_spanned! { literal.span() => compile_error!(#error) })
        }
    }
}

pub fn hex_color(input: TokenStream) -> TokenStream {
    match parse_literal(input) {
        Ok((literal, _)) => quote!(#literal),
        Err(error) => error,
    }
}

pub fn color(input: TokenStream, api: TokenStream) -> TokenStream {
    match parse_literal(input) {
        Ok((_, rgb)) => {
            let [red, green, blue] = rgb;
            let red = Literal::f32_suffixed(channel_to_f32(red));
            let green = Literal::f32_suffixed(channel_to_f32(green));
            let blue = Literal::f32_suffixed(channel_to_f32(blue));
            quote!( #api::rgb(#red, #green, #blue) )
        }
        Err(error) => error,
    }
}
