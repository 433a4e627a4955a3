//! Code generation for `#[derive(Mappable)]`.

use crate::attr::{option_inner, parse_constructors, parse_field_meta, ConstructorSpec, FieldMeta, ParamSpec};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Type, Visibility};

/// A public field exposed as a property.
struct Property<'a> {
    ident: &'a Ident,
    name: LitStr,
    ty: &'a Type,
    meta: FieldMeta,
}

pub fn derive_mappable(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let type_name = LitStr::new(&ident.unraw().to_string(), ident.span());

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => &named.named,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "`Mappable` can only be derived for structs with named fields",
            ))
        }
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "`Mappable` can only be derived for structs",
            ))
        }
    };

    let mut properties = Vec::new();
    for field in fields {
        let meta = parse_field_meta(field)?;
        if meta.skip || !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        properties.push(Property {
            ident: field_ident,
            name: LitStr::new(&field_ident.unraw().to_string(), field_ident.span()),
            ty: &field.ty,
            meta,
        });
    }

    let descriptors = properties.iter().map(property_descriptor);
    let read_arms = properties
        .iter()
        .filter(|property| property.meta.readable())
        .map(read_arm);
    let write_arms = properties
        .iter()
        .filter(|property| property.meta.writable())
        .map(|property| write_arm(property, &type_name));
    let constructors = parse_constructors(&input.attrs)?
        .iter()
        .map(constructor_descriptor)
        .collect::<Vec<_>>();

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::propmap::Mappable for #ident #ty_generics #where_clause {
            fn type_name() -> &'static str {
                #type_name
            }

            fn properties() -> ::std::vec::Vec<::propmap::PropertyDescriptor> {
                ::std::vec![#(#descriptors),*]
            }

            fn constructors() -> ::std::vec::Vec<::propmap::ConstructorDescriptor<Self>> {
                ::std::vec![#(#constructors),*]
            }

            fn read_property(&self, name: &str) -> ::core::option::Option<::propmap::Value> {
                match name {
                    #(#read_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn write_property(
                &mut self,
                name: &str,
                value: ::propmap::Value,
            ) -> ::propmap::MapResult<()> {
                match name {
                    #(#write_arms)*
                    _ => {
                        ::core::mem::drop(value);
                        ::core::result::Result::Err(::propmap::MapError::not_writable(#type_name, name))
                    }
                }
            }
        }
    })
}

fn type_info(ty: &Type) -> TokenStream {
    match option_inner(ty) {
        Some(inner) => quote! { ::propmap::TypeInfo::optional::<#inner>() },
        None => quote! { ::propmap::TypeInfo::of::<#ty>() },
    }
}

fn property_descriptor(property: &Property<'_>) -> TokenStream {
    let name = &property.name;
    let ty = type_info(property.ty);
    let readable = property.meta.readable();
    let writable = property.meta.writable();
    quote! {
        ::propmap::PropertyDescriptor {
            name: #name,
            ty: #ty,
            readable: #readable,
            writable: #writable,
        }
    }
}

fn read_arm(property: &Property<'_>) -> TokenStream {
    let name = &property.name;
    let ident = property.ident;
    quote! {
        #name => ::core::option::Option::Some(
            ::propmap::Value::new(::core::clone::Clone::clone(&self.#ident))
        ),
    }
}

fn write_arm(property: &Property<'_>, type_name: &LitStr) -> TokenStream {
    let name = &property.name;
    let ident = property.ident;
    let assign = match option_inner(property.ty) {
        Some(inner) => quote! { value.into_optional_property::<#inner>(#type_name, #name)? },
        None => {
            let ty = property.ty;
            quote! { value.into_property::<#ty>(#type_name, #name)? }
        }
    };
    quote! {
        #name => {
            self.#ident = #assign;
            ::core::result::Result::Ok(())
        }
    }
}

fn constructor_descriptor(spec: &ConstructorSpec) -> TokenStream {
    match spec {
        ConstructorSpec::Default => quote! { ::propmap::ConstructorDescriptor::default_path() },
        ConstructorSpec::Function { func, params } => {
            let func_name = LitStr::new(&func.unraw().to_string(), func.span());
            let descriptors = params.iter().map(parameter_descriptor);
            let args = params.iter().map(take_argument);
            let invoke = if params.is_empty() {
                quote! { |_args| ::core::result::Result::Ok(Self::#func()) }
            } else {
                quote! { |mut args| ::core::result::Result::Ok(Self::#func(#(#args),*)) }
            };
            quote! {
                ::propmap::ConstructorDescriptor::new(
                    #func_name,
                    ::std::vec![#(#descriptors),*],
                    #invoke,
                )
            }
        }
    }
}

fn param_name(param: &ParamSpec) -> LitStr {
    LitStr::new(&param.name.unraw().to_string(), param.name.span())
}

fn parameter_descriptor(param: &ParamSpec) -> TokenStream {
    let name = param_name(param);
    match option_inner(&param.ty) {
        Some(inner) => quote! { ::propmap::ParameterDescriptor::optional::<#inner>(#name) },
        None => {
            let ty = &param.ty;
            quote! { ::propmap::ParameterDescriptor::new::<#ty>(#name) }
        }
    }
}

fn take_argument(param: &ParamSpec) -> TokenStream {
    let name = param_name(param);
    match option_inner(&param.ty) {
        Some(inner) => quote! { args.next_optional::<#inner>(#name)? },
        None => {
            let ty = &param.ty;
            quote! { args.next::<#ty>(#name)? }
        }
    }
}
