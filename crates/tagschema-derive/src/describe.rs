use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Error, Field, Fields, LitStr, Visibility};

use crate::util::{describe_bounds, where_clause_with_bounds};

// derive_describe
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    let ident = &input.ident;
    let record_name = ident.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let where_clause = where_clause_with_bounds(where_clause, &describe_bounds(&input.generics));

    let fields = named_fields(input)?;
    let mut field_exprs = Vec::with_capacity(fields.len());
    let mut errors: Option<Error> = None;

    for field in fields {
        match field_expr(field) {
            Ok(expr) => field_exprs.push(expr),
            Err(err) => match errors.as_mut() {
                Some(combined) => combined.combine(err),
                None => errors = Some(err),
            },
        }
    }

    if let Some(err) = errors {
        return Err(err);
    }

    Ok(quote! {
        impl #impl_generics ::tagschema_core::Describe for #ident #ty_generics #where_clause {
            fn describe() -> ::tagschema_core::TypeDesc {
                ::tagschema_core::TypeDesc::Record(
                    ::tagschema_core::RecordDesc::new(#record_name)
                        #(.field(#field_exprs))*
                )
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> Result<Vec<&Field>, Error> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            &input.ident,
            "Describe can only be derived for structs with named fields",
        ));
    };

    match &data.fields {
        Fields::Named(named) => Ok(named.named.iter().collect()),
        Fields::Unit => Ok(Vec::new()),
        Fields::Unnamed(_) => Err(Error::new_spanned(
            &data.fields,
            "Describe can only be derived for structs with named fields",
        )),
    }
}

fn field_expr(field: &Field) -> Result<TokenStream, Error> {
    let field_ident = field.ident.as_ref().expect("named field");
    let field_name = field_ident.unraw().to_string();
    let field_ty = &field.ty;
    let exported = matches!(field.vis, Visibility::Public(_));

    let tags = parse_tags(&field.attrs)?;
    let tag_calls = tags.iter().map(|(key, value)| quote!(.tag(#key, #value)));

    Ok(quote! {
        ::tagschema_core::FieldDesc::new(
            #field_name,
            <#field_ty as ::tagschema_core::Describe>::describe(),
        )
        .exported(#exported)
        #(#tag_calls)*
    })
}

// Collect `key = "value"` pairs from every `#[tag(...)]` on a field.
fn parse_tags(attrs: &[Attribute]) -> Result<Vec<(String, LitStr)>, Error> {
    let mut tags = Vec::new();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("tag")) {
        attr.parse_nested_meta(|meta| {
            let key = meta
                .path
                .get_ident()
                .map(|ident| ident.unraw().to_string())
                .ok_or_else(|| meta.error("expected `key = \"value\"`"))?;
            let value: LitStr = meta.value()?.parse()?;
            tags.push((key, value));
            Ok(())
        })?;
    }

    Ok(tags)
}
