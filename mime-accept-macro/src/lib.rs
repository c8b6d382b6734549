extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro_hack::proc_macro_hack;
use proc_macro2::Span;
use quote::quote;

#[proc_macro_hack]
pub fn media_type(tokens: TokenStream) -> TokenStream {
    let lit_str = syn::parse_macro_input!(tokens as syn::LitStr);
    let source = lit_str.value();

    let mime = match parse_media_type_lit(&source) {
        Ok(mime) => mime,
        Err(msg) => {
            let err = syn::Error::new(Span::call_site(), msg);
            return err.to_compile_error().into();
        }
    };

    let type_: &str = &mime.type_;
    let subtype: &str = &mime.subtype;
    let names: Vec<&str> = mime.params.iter().map(|(name, _)| &**name).collect();
    let values: Vec<&str> = mime.params.iter().map(|(_, value)| &**value).collect();

    let out = quote! {
        $crate::MediaType::private_from_proc_macro(
            #type_,
            #subtype,
            &[#((#names, #values)),*],
        )
    };
    out.into()
}

fn parse_media_type_lit(value: &str) -> Result<mime_accept_parse::Mime<'_>, String> {
    match mime_accept_parse::parse(value) {
        Ok((mime, "")) => Ok(mime),
        Ok((_, rest)) => Err(format!("invalid MediaType: unexpected {:?}", rest)),
        Err(err) => Err(format!("invalid MediaType: {}", err)),
    }
}
