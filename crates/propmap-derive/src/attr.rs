//! Parsing of `#[mapper(...)]` attributes.
//!
//! Struct level, one public constructor per attribute, in declaration order:
//! - `default`: zero-argument construction through `Default::default()`
//! - `constructor = func(name: Type, ...)`: calls `Self::func(...)`
//!
//! Field level:
//! - `readonly`: readable, not writable
//! - `writeonly`: writable, not readable
//! - `skip`: not a public property

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Field, GenericArgument, Ident, PathArguments, Token, Type};

/// A constructor declared on the struct.
pub enum ConstructorSpec {
    Default,
    Function { func: Ident, params: Vec<ParamSpec> },
}

/// One `name: Type` parameter of a declared constructor.
pub struct ParamSpec {
    pub name: Ident,
    pub ty: Type,
}

impl Parse for ParamSpec {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let ty: Type = input.parse()?;
        Ok(Self { name, ty })
    }
}

/// Parsed field capabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldMeta {
    pub readonly: bool,
    pub writeonly: bool,
    pub skip: bool,
}

impl FieldMeta {
    pub fn readable(self) -> bool {
        !self.writeonly
    }

    pub fn writable(self) -> bool {
        !self.readonly
    }
}

/// Collects the struct's constructor declarations in order.
pub fn parse_constructors(attrs: &[Attribute]) -> syn::Result<Vec<ConstructorSpec>> {
    let mut constructors = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("mapper") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("default") {
                constructors.push(ConstructorSpec::Default);
                Ok(())
            } else if nested.path.is_ident("constructor") {
                let input = nested.value()?;
                let func: Ident = input.parse()?;
                let content;
                syn::parenthesized!(content in input);
                let params = Punctuated::<ParamSpec, Token![,]>::parse_terminated(&content)?;
                constructors.push(ConstructorSpec::Function {
                    func,
                    params: params.into_iter().collect(),
                });
                Ok(())
            } else {
                Err(nested.error("expected `default` or `constructor = func(..)`"))
            }
        })?;
    }

    Ok(constructors)
}

/// Parses `#[mapper(...)]` attributes on a field.
pub fn parse_field_meta(field: &Field) -> syn::Result<FieldMeta> {
    let mut meta = FieldMeta::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("mapper") {
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("readonly") {
                meta.readonly = true;
            } else if nested.path.is_ident("writeonly") {
                meta.writeonly = true;
            } else if nested.path.is_ident("skip") {
                meta.skip = true;
            } else {
                return Err(nested.error("expected `readonly`, `writeonly` or `skip`"));
            }
            Ok(())
        })?;
    }

    if meta.readonly && meta.writeonly {
        return Err(syn::Error::new_spanned(
            field,
            "a property cannot be both `readonly` and `writeonly`",
        ));
    }
    Ok(meta)
}

/// Returns `T` if `ty` is syntactically `Option<T>`.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
