//! `#[methods]` - inherent impl block -> `Overrides` table
//!
//! ```ignore
//! #[methods]
//! impl Logger {
//!     fn write(&self, s: String) { self.lines.borrow_mut().push(s) }
//! }
//! ```
//!
//! expands to the impl block unchanged plus:
//!
//! ```ignore
//! impl Logger {
//!     pub fn overrides() -> ::arbitrait::Overrides {
//!         ::arbitrait::Overrides::new()
//!             .with("write", |this: &::arbitrait::Interface<'_>, __arg0: String|
//!                 -> ::arbitrait::Result<()> {
//!                 let receiver = this.receiver::<Self>()?;
//!                 Ok(receiver.write(__arg0))
//!             })
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, Path, ReturnType, Token,
};

use crate::common::{result_ok_type, try_parse_assignment};

/// `#[methods(name = fn_name, crate = path)]`, both optional.
pub struct MethodsArgs {
    pub name: Ident,
    pub krate: Path,
}

impl Parse for MethodsArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = format_ident!("overrides");
        let mut krate: Path = syn::parse_quote!(::arbitrait);

        while !input.is_empty() {
            if try_parse_assignment(input, "name")? {
                name = input.parse()?;
            } else if input.peek(Token![crate]) {
                input.parse::<Token![crate]>()?;
                input.parse::<Token![=]>()?;
                krate = input.parse()?;
            } else {
                return Err(input.error("expected `name = ident` or `crate = path`"));
            }
            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(MethodsArgs { name, krate })
    }
}

pub fn expand_methods(args: MethodsArgs, item: ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[methods] applies to inherent impl blocks only",
        ));
    }

    let krate = &args.krate;
    let entries = item
        .items
        .iter()
        .filter_map(|it| match it {
            ImplItem::Fn(f) if takes_ref_self(f) => Some(f),
            _ => None,
        })
        .map(|f| method_entry(f, krate))
        .collect::<syn::Result<Vec<_>>>()?;

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let name = &args.name;

    Ok(quote! {
        #item

        impl #impl_generics #self_ty #where_clause {
            /// Override table forwarding to this block's `&self` methods.
            pub fn #name() -> #krate::Overrides {
                #krate::Overrides::new()
                    #(#entries)*
            }
        }
    })
}

fn takes_ref_self(f: &ImplItemFn) -> bool {
    f.sig
        .receiver()
        .is_some_and(|r| r.reference.is_some() && r.mutability.is_none() && r.colon_token.is_none())
}

fn method_entry(f: &ImplItemFn, krate: &Path) -> syn::Result<TokenStream> {
    let sig = &f.sig;
    if sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(sig.asyncness, "async methods cannot be registered"));
    }
    if sig.generics.type_params().next().is_some() || sig.generics.const_params().next().is_some() {
        return Err(syn::Error::new_spanned(&sig.generics, "generic methods cannot be registered"));
    }

    let mut names = Vec::new();
    let mut types = Vec::new();
    for (i, input) in sig.inputs.iter().skip(1).enumerate() {
        match input {
            FnArg::Typed(pt) => {
                names.push(format_ident!("__arg{}", i));
                types.push((*pt.ty).clone());
            }
            FnArg::Receiver(r) => return Err(syn::Error::new_spanned(r, "unexpected receiver")),
        }
    }

    let ident = &sig.ident;
    let (ok_ty, body) = match &sig.output {
        ReturnType::Default => (quote! { () }, quote! { Ok(receiver.#ident(#(#names),*)) }),
        ReturnType::Type(_, ty) => match result_ok_type(ty) {
            Some(ok) => (
                quote! { #ok },
                quote! { receiver.#ident(#(#names),*).map_err(::core::convert::Into::into) },
            ),
            None => (quote! { #ty }, quote! { Ok(receiver.#ident(#(#names),*)) }),
        },
    };

    Ok(quote! {
        .with(
            ::core::stringify!(#ident),
            |this: &#krate::Interface<'_>, #(#names: #types),*| -> #krate::Result<#ok_ty> {
                let receiver = this.receiver::<Self>()?;
                #body
            },
        )
    })
}
