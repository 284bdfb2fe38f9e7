use crate::utils::{apply_derives, prepend_missing_fields};
use proc_macro::TokenStream;
use quote::{ToTokens, quote};
use std::collections::HashMap;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Expr, Ident, Item, Result, Token, Type, parse::Parse, parse::ParseStream, parse_macro_input,
};

/// #[event] 宏实现
/// - 仅支持具名字段变体：`Variant { .. }`
/// - 为每个变体注入缺失的 `id: IdType` 字段（事件实例标识，默认 `String`）
/// - 合并派生：Debug, Clone, PartialEq, Serialize, Deserialize
/// - 生成 `::train_domain::domain_event::DomainEvent` 实现（event_id/event_type）
/// - 事件类型默认 `"{Enum}.{Variant}"`，变体可覆写：`#[event(event_type = "...")]`
/// - 枚举级参数：`#[event(id = IdType)]`（要求该类型提供 `as_str()`）
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EventAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let enum_item = match &mut input {
        Item::Enum(e) => e,
        other => {
            return syn::Error::new(other.span(), "#[event] can only be used on enum types")
                .to_compile_error()
                .into();
        }
    };

    let id_type = cfg.id_ty.unwrap_or_else(|| syn::parse_quote! { String });

    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Debug),
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
    ];
    apply_derives(&mut enum_item.attrs, required);

    let mut variant_types: HashMap<String, syn::LitStr> = HashMap::new();

    for v in &mut enum_item.variants {
        let syn::Fields::Named(fields_named) = &mut v.fields else {
            return syn::Error::new(
                v.span(),
                "#[event] supports only named-field enum variants, e.g., Variant { x: T }",
            )
            .to_compile_error()
            .into();
        };

        prepend_missing_fields(fields_named, &[("id", &id_type)]);

        // 摘出变体级 #[event(...)] 覆写，其余属性原样保留
        let mut retained_attrs = Vec::new();
        let mut type_lit: Option<syn::LitStr> = None;
        for attr in v.attrs.iter() {
            if attr.path().is_ident("event") {
                match parse_variant_event_attr(attr) {
                    Ok(Some(lit)) => {
                        if type_lit.is_some() {
                            return syn::Error::new(
                                attr.span(),
                                "duplicate 'event_type' specified for this variant",
                            )
                            .to_compile_error()
                            .into();
                        }
                        type_lit = Some(lit);
                    }
                    Ok(None) => {}
                    Err(err) => return err.to_compile_error().into(),
                }
            } else {
                retained_attrs.push(attr.clone());
            }
        }
        v.attrs = retained_attrs;

        if let Some(lit) = type_lit {
            variant_types.insert(v.ident.to_string(), lit);
        }
    }

    // 生成 DomainEvent 实现
    let enum_ident = &enum_item.ident;
    let enum_name_string = enum_ident.to_string();

    let id_match_arms = enum_item.variants.iter().map(|v| {
        let v_ident = &v.ident;
        quote! { Self::#v_ident { id, .. } => id.as_str() }
    });

    let type_match_arms = enum_item.variants.iter().map(|v| {
        let v_ident = &v.ident;
        let key = v_ident.to_string();
        if let Some(lit) = variant_types.get(&key) {
            quote! { Self::#v_ident { .. } => #lit }
        } else {
            let combined = format!("{}.{}", enum_name_string, key);
            let lit = syn::LitStr::new(&combined, v_ident.span());
            quote! { Self::#v_ident { .. } => #lit }
        }
    });

    let out = quote! {
        #enum_item

        impl ::train_domain::domain_event::DomainEvent for #enum_ident {
            fn event_id(&self) -> &str { match self { #( #id_match_arms, )* } }
            fn event_type(&self) -> &str { match self { #( #type_match_arms, )* } }
        }
    };

    TokenStream::from(out)
}

// -------- parsing --------

// 变体级：#[event(event_type = "...")]，返回覆写的类型字面量
fn parse_variant_event_attr(attr: &syn::Attribute) -> Result<Option<syn::LitStr>> {
    match &attr.meta {
        syn::Meta::List(_) => {
            let mut ty: Option<syn::LitStr> = None;
            let pairs: Punctuated<VariantEventAttrKv, Token![,]> = attr
                .parse_args_with(Punctuated::<VariantEventAttrKv, Token![,]>::parse_terminated)?;

            for kv in pairs {
                match kv.key.to_string().as_str() {
                    "event_type" => {
                        if ty.is_some() {
                            return Err(syn::Error::new(
                                kv.key.span(),
                                "duplicate key 'event_type' in attribute",
                            ));
                        }
                        let lit = match kv.value {
                            Expr::Lit(syn::ExprLit {
                                lit: syn::Lit::Str(lit),
                                ..
                            }) => lit,
                            other => {
                                return Err(syn::Error::new(
                                    other.span(),
                                    "expected string literal for 'event_type'",
                                ));
                            }
                        };
                        ty = Some(lit);
                    }
                    _ => {
                        return Err(syn::Error::new(
                            kv.key.span(),
                            "unknown key; expected 'event_type'",
                        ));
                    }
                }
            }

            Ok(ty)
        }
        other => Err(syn::Error::new(other.span(), "expected #[event(...)]")),
    }
}

struct VariantEventAttrKv {
    key: Ident,
    #[allow(dead_code)]
    eq: Token![=],
    value: Expr,
}

impl Parse for VariantEventAttrKv {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            key: input.parse()?,
            eq: input.parse()?,
            value: input.parse()?,
        })
    }
}

// 枚举级配置：事件 id 的类型
struct EventAttrConfig {
    id_ty: Option<Type>,
}

impl Parse for EventAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut id_ty: Option<Type> = None;

        if input.is_empty() {
            return Ok(Self { id_ty });
        }

        let pairs: Punctuated<syn::ExprAssign, Token![,]> =
            Punctuated::<syn::ExprAssign, Token![,]>::parse_terminated(input)?;

        for assign in pairs.into_iter() {
            let key_ident = match *assign.left {
                syn::Expr::Path(p) if p.path.segments.len() == 1 => {
                    p.path.segments[0].ident.clone()
                }
                other => return Err(syn::Error::new(other.span(), "invalid attribute key")),
            };
            match key_ident.to_string().as_str() {
                "id" => {
                    if id_ty.is_some() {
                        return Err(syn::Error::new(
                            key_ident.span(),
                            "duplicate key 'id' in attribute",
                        ));
                    }
                    let ty_parsed: Type = syn::parse2(assign.right.to_token_stream())?;
                    id_ty = Some(ty_parsed);
                }
                _ => {
                    return Err(syn::Error::new(
                        key_ident.span(),
                        "unknown key; expected 'id'",
                    ));
                }
            }
        }

        Ok(Self { id_ty })
    }
}
