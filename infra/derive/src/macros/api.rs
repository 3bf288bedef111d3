use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

const DEFAULT_RENAME: &str = "camelCase";

/// Arguments accepted by `#[api_model(...)]`.
#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

/// Serde settings already present on the struct.
#[derive(Default)]
struct ExistingSerde {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

pub fn expand(args: TokenStream, input: ItemStruct) -> TokenStream {
    match try_expand(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = ModelArgs::parse(args)?;
    let existing = ExistingSerde::collect(&input.attrs)?;

    let derives = derive_attr(&input.attrs);
    let rename = rename_attr(args.rename_all, &existing)?;
    let deny = deny_attr(args.deny_unknown_fields.unwrap_or(true), &existing, input)?;

    Ok(quote! {
        #derives
        #rename
        #deny
        #input
    })
}

impl ModelArgs {
    fn parse(tokens: TokenStream) -> syn::Result<Self> {
        let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(tokens)?;
        let mut args = Self::default();

        for meta in metas {
            let Meta::NameValue(pair) = meta else {
                return Err(syn::Error::new_spanned(
                    meta,
                    "expected name-value arguments like `rename_all = \"...\"`",
                ));
            };

            if pair.path.is_ident("rename_all") {
                let value = string_value(&pair)?;
                set_once(&mut args.rename_all, &pair, value)?;
            } else if pair.path.is_ident("deny_unknown_fields") {
                let value = bool_value(&pair)?;
                set_once(&mut args.deny_unknown_fields, &pair, value)?;
            } else {
                return Err(syn::Error::new_spanned(
                    pair.path,
                    "unsupported argument; expected rename_all or deny_unknown_fields",
                ));
            }
        }

        Ok(args)
    }
}

impl ExistingSerde {
    fn collect(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut existing = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    existing.rename_all = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("deny_unknown_fields") {
                    existing.deny_unknown_fields = true;
                } else if meta.input.peek(Token![=]) {
                    // Unrelated `key = value` options are left for serde to validate.
                    let _: Expr = meta.value()?.parse()?;
                }
                Ok(())
            })?;
        }

        Ok(existing)
    }
}

fn derive_attr(attrs: &[Attribute]) -> TokenStream {
    let existing = super::derived_traits(attrs);
    let mut missing = Vec::new();
    if !existing.contains("Debug") {
        missing.push(quote! { Debug });
    }
    if !existing.contains("Serialize") {
        missing.push(quote! { ::serde::Serialize });
    }
    if !existing.contains("Deserialize") {
        missing.push(quote! { ::serde::Deserialize });
    }

    if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } }
}

fn rename_attr(requested: Option<LitStr>, existing: &ExistingSerde) -> syn::Result<TokenStream> {
    let requested = requested.unwrap_or_else(|| LitStr::new(DEFAULT_RENAME, Span::call_site()));

    match &existing.rename_all {
        Some(current) if current.value() != requested.value() => Err(syn::Error::new_spanned(
            current,
            "conflicting serde rename_all; remove it or pass the same value to api_model",
        )),
        Some(_) => Ok(quote! {}),
        None => Ok(quote! { #[serde(rename_all = #requested)] }),
    }
}

fn deny_attr(
    deny: bool,
    existing: &ExistingSerde,
    input: &ItemStruct,
) -> syn::Result<TokenStream> {
    match (existing.deny_unknown_fields, deny) {
        (true, false) => Err(syn::Error::new_spanned(
            &input.ident,
            "deny_unknown_fields is already set via serde; remove it before disabling",
        )),
        (false, true) => Ok(quote! { #[serde(deny_unknown_fields)] }),
        _ => Ok(quote! {}),
    }
}

fn string_value(pair: &MetaNameValue) -> syn::Result<LitStr> {
    match &pair.value {
        Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) => Ok(lit.clone()),
        other => Err(syn::Error::new_spanned(other, "expected a string literal")),
    }
}

fn bool_value(pair: &MetaNameValue) -> syn::Result<bool> {
    match &pair.value {
        Expr::Lit(ExprLit { lit: Lit::Bool(lit), .. }) => Ok(lit.value),
        other => Err(syn::Error::new_spanned(other, "expected a boolean literal")),
    }
}

fn set_once<T>(slot: &mut Option<T>, pair: &MetaNameValue, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(pair, "duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}
